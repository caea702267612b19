//! Display-area constraint: margins from the viewport edges, the absolute
//! rectangle they resolve to, and clamping marker positions into it.
//!
//! Screen space has Y growing downward throughout. `up` is always the inset
//! from the top edge and `down` the inset from the bottom edge.

use crate::viewport::Viewport;
use eframe::egui::{self, Pos2, Vec2, pos2};
use serde::{Deserialize, Serialize};

/// Distance kept between a margin and the viewport centre line.
const CENTRE_GAP: f32 = 10.0;

/// Insets in pixels from each viewport edge toward the centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenMarkConstraint {
    pub left: f32,
    pub down: f32,
    pub right: f32,
    pub up: f32,
}

impl Default for ScreenMarkConstraint {
    fn default() -> Self {
        Self::uniform(80.0)
    }
}

impl ScreenMarkConstraint {
    pub const fn new(left: f32, down: f32, right: f32, up: f32) -> Self {
        Self {
            left,
            down,
            right,
            up,
        }
    }

    pub const fn uniform(inset: f32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Clamps every inset into `[min, half of its viewport dimension - 10]`.
    ///
    /// The upper bound is applied last, so on a viewport too small to honour
    /// both it takes precedence.
    pub fn validated(self, screen_size: Vec2, min: f32) -> Self {
        let max_x = screen_size.x / 2.0 - CENTRE_GAP;
        let max_y = screen_size.y / 2.0 - CENTRE_GAP;
        Self {
            left: self.left.max(min).min(max_x),
            down: self.down.max(min).min(max_y),
            right: self.right.max(min).min(max_x),
            up: self.up.max(min).min(max_y),
        }
    }
}

/// Absolute screen-space edges of the region markers may occupy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayArea {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

impl DisplayArea {
    pub const fn new(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    pub fn rect(&self) -> egui::Rect {
        egui::Rect::from_min_max(pos2(self.left, self.top), pos2(self.right, self.bottom))
    }

    /// Shrinks the area by `extra` on every side.
    pub fn inset(&self, extra: Vec2) -> Self {
        Self {
            left: self.left + extra.x,
            bottom: self.bottom - extra.y,
            right: self.right - extra.x,
            top: self.top + extra.y,
        }
    }

    /// Nearest point inside the area (edges included).
    ///
    /// If the area is inverted the left/top edge wins.
    pub fn clamp(&self, pos: Pos2) -> Pos2 {
        pos2(
            self.left.max(self.right.min(pos.x)),
            self.top.max(self.bottom.min(pos.y)),
        )
    }

    /// Whether `pos` lies inside the area, edges included.
    pub fn contains(&self, pos: Pos2) -> bool {
        pos.x >= self.left && pos.x <= self.right && pos.y >= self.top && pos.y <= self.bottom
    }
}

/// Resolves margins into absolute display-area edges.
pub fn resolve(viewport: Viewport, constraint: ScreenMarkConstraint) -> DisplayArea {
    let max = viewport.max();
    DisplayArea {
        left: viewport.origin.x + constraint.left,
        bottom: max.y - constraint.down,
        right: max.x - constraint.right,
        top: viewport.origin.y + constraint.up,
    }
}

/// Inverse of [`resolve`]: recovers the margins for a display area edited directly.
pub fn derive_constraint(viewport: Viewport, area: DisplayArea) -> ScreenMarkConstraint {
    let max = viewport.max();
    ScreenMarkConstraint {
        left: area.left - viewport.origin.x,
        down: max.y - area.bottom,
        right: max.x - area.right,
        up: area.top - viewport.origin.y,
    }
}

/// Clamps `pos` into the display area shrunk by `extra_inset`.
///
/// Pass half of a marker's footprint as `extra_inset` to keep the marker's
/// edge, not only its centre, inside the display area.
pub fn clamp_position(
    viewport: Viewport,
    pos: Pos2,
    constraint: ScreenMarkConstraint,
    extra_inset: Vec2,
) -> Pos2 {
    resolve(viewport, constraint).inset(extra_inset).clamp(pos)
}
