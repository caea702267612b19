//! Overlay visibility settings and drawing functions for the world view.

use crate::colors;
use crate::constants::{GRID_EXTENT, GRID_SPACING, LABEL_SHADOW_LIGHTNESS};
use compass_marks::marker::{distance_label, draw_marker};
use compass_marks::{
    Camera, DrawList, GlyphAdvances, MarkerConfig, MarkerLayout, MarkerStyle, ObjectKind,
    Projector, Scene, Viewport, layout_marker,
};
use eframe::egui::{self, TextureId};
use glam::Vec3;

/// Controls visibility of markers per object kind.
#[derive(Clone, Copy)]
pub struct OverlayVisibility {
    pub aether_currents: bool,
    pub gathering: bool,
    pub mob_hunts: bool,
    pub quests: bool,
}

impl Default for OverlayVisibility {
    fn default() -> Self {
        Self {
            aether_currents: true,
            gathering: true,
            mob_hunts: true,
            quests: true,
        }
    }
}

impl OverlayVisibility {
    pub fn shows(&self, kind: ObjectKind) -> bool {
        match kind {
            ObjectKind::AetherCurrent => self.aether_currents,
            ObjectKind::Gathering => self.gathering,
            ObjectKind::MobHunt => self.mob_hunts,
            ObjectKind::Quest => self.quests,
        }
    }

    pub fn toggle_mut(&mut self, kind: ObjectKind) -> &mut bool {
        match kind {
            ObjectKind::AetherCurrent => &mut self.aether_currents,
            ObjectKind::Gathering => &mut self.gathering,
            ObjectKind::MobHunt => &mut self.mob_hunts,
            ObjectKind::Quest => &mut self.quests,
        }
    }
}

/// Marker sprite textures.
#[derive(Clone, Copy)]
pub struct Sprites {
    pub icon: TextureId,
    pub arrow: TextureId,
}

impl Sprites {
    pub fn style(&self, tint: egui::Color32) -> MarkerStyle {
        MarkerStyle {
            icon: self.icon,
            arrow: self.arrow,
            tint,
            label_colour: colors::LABEL_TEXT,
            shadow_lightness: LABEL_SHADOW_LIGHTNESS,
        }
    }
}

/// Where a detected object ended up on screen this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenStatus {
    /// Marker drawn at the target, inside the display area.
    InArea,
    /// Target visible but outside the display area; marker pinned to its edge.
    AtEdge,
    /// Target outside the viewport; marker pinned to the display-area edge.
    OffScreen,
    /// Target behind the camera.
    Behind,
}

impl ScreenStatus {
    pub fn classify(viewport: Viewport, layout: Option<&MarkerLayout>) -> Self {
        match layout {
            None => ScreenStatus::Behind,
            Some(layout) if !layout.is_pinned() => ScreenStatus::InArea,
            Some(layout) if layout.target_on_screen(viewport) => ScreenStatus::AtEdge,
            Some(_) => ScreenStatus::OffScreen,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScreenStatus::InArea => "in view",
            ScreenStatus::AtEdge => "near edge",
            ScreenStatus::OffScreen => "off screen",
            ScreenStatus::Behind => "behind",
        }
    }
}

/// A detected object and its state this frame.
#[derive(Debug, Clone)]
pub struct Detection {
    pub index: usize,
    pub name: String,
    pub kind: ObjectKind,
    pub distance: f32,
    pub status: ScreenStatus,
}

/// Measures advances of printable ASCII with egui's proportional font.
pub fn glyph_advances(painter: &egui::Painter, native_size: f32) -> GlyphAdvances {
    let font_id = egui::FontId::proportional(native_size);
    let width = |text: String| {
        painter
            .layout_no_wrap(text, font_id.clone(), egui::Color32::WHITE)
            .size()
            .x
    };

    let mut table = GlyphAdvances::new(native_size, width("?".to_owned()));
    for c in ' '..='~' {
        table.insert(c, width(c.to_string()));
    }
    log::debug!("Measured {} glyph advances at {native_size}px", table.len());
    table
}

/// Draws the ground grid so camera motion is visible.
pub fn draw_ground_grid(painter: &egui::Painter, projector: &impl Projector) {
    let stroke = egui::Stroke::new(1.0, colors::GROUND_GRID);
    let steps = (2.0 * GRID_EXTENT / GRID_SPACING) as i32;

    for line in 0..=steps {
        let fixed = -GRID_EXTENT + line as f32 * GRID_SPACING;
        for step in 0..steps {
            let from = -GRID_EXTENT + step as f32 * GRID_SPACING;
            let to = from + GRID_SPACING;
            for (a, b) in [
                (Vec3::new(fixed, 0.0, from), Vec3::new(fixed, 0.0, to)),
                (Vec3::new(from, 0.0, fixed), Vec3::new(to, 0.0, fixed)),
            ] {
                if let (Some(a), Some(b)) = (projector.project(a), projector.project(b)) {
                    painter.line_segment([a, b], stroke);
                }
            }
        }
    }
}

/// Detects objects in range and draws their markers.
///
/// Returns every detected object, nearest last, including ones whose overlay
/// is hidden.
#[allow(clippy::too_many_arguments)]
pub fn draw_markers(
    painter: &egui::Painter,
    viewport: Viewport,
    config: &MarkerConfig,
    camera: &Camera,
    scene: &Scene,
    overlays: &OverlayVisibility,
    sprites: Sprites,
    glyphs: &GlyphAdvances,
) -> Vec<Detection> {
    if !config.enabled {
        return Vec::new();
    }

    let projector = camera.projector(viewport);
    let mut list = DrawList::new();
    let mut detections = Vec::new();

    // Far to near, so nearer markers end up on top
    let mut detected: Vec<_> = scene.detected(camera.eye).collect();
    detected.sort_by(|a, b| b.2.total_cmp(&a.2));

    for (index, object, distance) in detected {
        let label = distance_label(&object.name, distance);
        let layout = layout_marker(viewport, config, &projector, object.position(), &label, glyphs);

        let status = ScreenStatus::classify(viewport, layout.as_ref());

        if config.show_screen_mark
            && overlays.shows(object.kind)
            && let Some(layout) = &layout
        {
            draw_marker(&mut list, layout, &sprites.style(colors::kind_tint(object.kind)));
        }

        detections.push(Detection {
            index,
            name: object.name.clone(),
            kind: object.kind,
            distance,
            status,
        });
    }

    list.paint(painter);
    detections
}
