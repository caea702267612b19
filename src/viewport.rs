//! Snapshot of the render surface the markers are drawn onto.

use eframe::egui::{self, Pos2, Vec2};

/// Origin and size of the render surface in screen pixels (Y grows downward).
///
/// Taken once per frame from the host and never mutated by the marker code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub origin: Pos2,
    pub size: Vec2,
}

impl Viewport {
    pub const fn new(origin: Pos2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn from_rect(rect: egui::Rect) -> Self {
        Self {
            origin: rect.min,
            size: rect.size(),
        }
    }

    pub fn rect(&self) -> egui::Rect {
        egui::Rect::from_min_size(self.origin, self.size)
    }

    pub fn centre(&self) -> Pos2 {
        self.origin + self.size / 2.0
    }

    /// Bottom-right corner.
    pub fn max(&self) -> Pos2 {
        self.origin + self.size
    }

    /// Whether `pos` lies strictly inside the viewport. Points on an edge are outside.
    pub fn contains(&self, pos: Pos2) -> bool {
        let max = self.max();
        pos.x > self.origin.x && pos.x < max.x && pos.y > self.origin.y && pos.y < max.y
    }
}
