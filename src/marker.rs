//! Per-frame marker layout: projection, display-area clamping, orientation
//! and label placement, followed by emitting draw commands.

use crate::config::MarkerConfig;
use crate::constraint::{ScreenMarkConstraint, clamp_position, resolve};
use crate::draw::DrawList;
use crate::orientation::{pointing_rotation, rotated_rect_points};
use crate::projection::Projector;
use crate::text::{FontMetrics, LabelMetrics, draw_text_with_shadow, measure_text};
use crate::viewport::Viewport;
use eframe::egui::{Color32, Pos2, TextureId, Vec2};
use glam::Vec3;

/// Icon edge length in pixels at size scale 1.
pub const BASE_ICON_SIZE: f32 = 32.0;

/// Arrow edge length relative to the icon.
pub const ARROW_REL_SIZE: f32 = 0.75;

/// Label font size in pixels at size scale 1 and text scale 1.
pub const BASE_FONT_SIZE: f32 = 13.0;

/// Gap between the icon and its label at size scale 1.
const LABEL_GAP: f32 = 2.0;

pub const DISPLAY_AREA_OUTLINE: Color32 = Color32::RED;
pub const DISPLAY_AREA_OUTLINE_THICKNESS: f32 = 4.0;

/// Position, scale and rotation of one sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerGeometry {
    /// Centre of the sprite.
    pub anchor: Pos2,
    /// Edge length in pixels.
    pub size: f32,
    /// Radians; 0 leaves an upward-pointing sprite pointing up.
    pub rotation: f32,
}

impl MarkerGeometry {
    pub fn corners(&self) -> [Pos2; 4] {
        let size = Vec2::splat(self.size);
        rotated_rect_points(self.anchor - size / 2.0, size, self.rotation)
    }
}

/// Textures and colours used to draw a marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub icon: TextureId,
    pub arrow: TextureId,
    pub tint: Color32,
    pub label_colour: Color32,
    pub shadow_lightness: f32,
}

/// Everything needed to draw one marker this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerLayout {
    /// Projected screen position of the target, before clamping.
    pub target: Pos2,
    pub icon: MarkerGeometry,
    /// Present when the target lies outside the display area and the icon
    /// has been pinned to its edge.
    pub arrow: Option<MarkerGeometry>,
    pub label: String,
    pub label_pos: Pos2,
    pub label_metrics: LabelMetrics,
    /// Label font size before the marker size scale is applied.
    pub font_size: f32,
    pub scale: f32,
}

impl MarkerLayout {
    pub fn is_pinned(&self) -> bool {
        self.arrow.is_some()
    }

    /// Whether the target itself is visible, even if its marker is pinned.
    pub fn target_on_screen(&self, viewport: Viewport) -> bool {
        viewport.contains(self.target)
    }
}

/// `"{name}\n{distance} m"`, the label shown under a marker.
pub fn distance_label(name: &str, distance: f32) -> String {
    format!("{name}\n{distance:.1} m")
}

/// Lays out a marker for a world position, or `None` if it cannot be projected.
pub fn layout_marker(
    viewport: Viewport,
    config: &MarkerConfig,
    projector: &impl Projector,
    world_pos: Vec3,
    label: &str,
    metrics: &impl FontMetrics,
) -> Option<MarkerLayout> {
    let screen = projector.project(world_pos)?;
    Some(layout_at_screen(viewport, config, screen, label, metrics))
}

/// Lays out a marker for an already projected screen position.
pub fn layout_at_screen(
    viewport: Viewport,
    config: &MarkerConfig,
    screen: Pos2,
    label: &str,
    metrics: &impl FontMetrics,
) -> MarkerLayout {
    let scale = config.screen_mark_size_scale;
    let constraint = config.screen_mark_constraint;
    let icon_size = BASE_ICON_SIZE * scale;
    let half_icon = Vec2::splat(icon_size / 2.0);

    let anchor = clamp_position(viewport, screen, constraint, half_icon);
    let arrow = ((anchor - screen).length_sq() > f32::EPSILON).then(|| {
        let rotation = pointing_rotation(anchor, screen);
        let dir = (screen - anchor).normalized();
        let arrow_size = icon_size * ARROW_REL_SIZE;
        MarkerGeometry {
            anchor: anchor + dir * (icon_size + arrow_size) / 2.0,
            size: arrow_size,
            rotation,
        }
    });

    let font_size = BASE_FONT_SIZE * config.screen_mark_text_rel_size_scale;
    let label_metrics = measure_text(metrics, label, font_size * scale);
    let label_pos = place_label(viewport, constraint, anchor, icon_size, scale, label_metrics);

    MarkerLayout {
        target: screen,
        icon: MarkerGeometry {
            anchor,
            size: icon_size,
            rotation: 0.0,
        },
        arrow,
        label: label.to_owned(),
        label_pos,
        label_metrics,
        font_size,
        scale,
    }
}

/// Centres the label under the icon, or above it when it would leave the
/// bottom of the display area.
fn place_label(
    viewport: Viewport,
    constraint: ScreenMarkConstraint,
    anchor: Pos2,
    icon_size: f32,
    scale: f32,
    label: LabelMetrics,
) -> Pos2 {
    let area = resolve(viewport, constraint);
    let gap = LABEL_GAP * scale;
    let x = anchor.x - label.width / 2.0;
    let below = anchor.y + icon_size / 2.0 + gap;
    let y = if below + label.height > area.bottom {
        anchor.y - icon_size / 2.0 - gap - label.height
    } else {
        below
    };
    Pos2::new(x, y)
}

/// Queues the icon, the direction arrow if any, then the shadowed label.
pub fn draw_marker(list: &mut DrawList, layout: &MarkerLayout, style: &MarkerStyle) {
    list.textured_quad(layout.icon.corners(), style.icon, style.tint);
    if let Some(arrow) = &layout.arrow {
        list.textured_quad(arrow.corners(), style.arrow, style.tint);
    }
    if !layout.label.is_empty() {
        draw_text_with_shadow(
            list,
            &layout.label,
            layout.label_pos,
            layout.font_size,
            layout.scale,
            style.label_colour,
            style.shadow_lightness,
        );
    }
}

/// Queues the display-area outline shown while settings are being edited.
pub fn draw_display_area(list: &mut DrawList, viewport: Viewport, constraint: ScreenMarkConstraint) {
    list.rect_outline(
        resolve(viewport, constraint).rect(),
        DISPLAY_AREA_OUTLINE,
        DISPLAY_AREA_OUTLINE_THICKNESS,
    );
}

/// Label of the preview marker shown at the viewport centre while editing.
pub fn preview_label(config: &MarkerConfig) -> String {
    format!(
        "Marker size scale: {:.2},\nText rel size scale: {:.1}",
        config.screen_mark_size_scale, config.screen_mark_text_rel_size_scale
    )
}

/// Queues the display-area outline and a dummy marker at the viewport centre.
pub fn draw_config_preview(
    list: &mut DrawList,
    viewport: Viewport,
    config: &MarkerConfig,
    style: &MarkerStyle,
    metrics: &impl FontMetrics,
) {
    draw_display_area(list, viewport, config.screen_mark_constraint);
    let layout = layout_at_screen(
        viewport,
        config,
        viewport.centre(),
        &preview_label(config),
        metrics,
    );
    draw_marker(list, &layout, style);
}
