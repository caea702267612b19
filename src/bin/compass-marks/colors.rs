//! Color constants for markers and UI elements.

use compass_marks::ObjectKind;
use eframe::egui::Color32;

// Aether current markers
pub const AETHER_CURRENT_TINT: Color32 = Color32::from_rgb(110, 200, 255);

// Gathering point markers
pub const GATHERING_TINT: Color32 = Color32::from_rgb(50, 205, 50);

// Hunt mark markers
pub const MOB_HUNT_TINT: Color32 = Color32::from_rgb(255, 90, 70);

// Quest target markers
pub const QUEST_TINT: Color32 = Color32::from_rgb(255, 200, 60);

// Text colors
pub const LABEL_TEXT: Color32 = Color32::from_rgb(255, 250, 220);

// World grid
pub const GROUND_GRID: Color32 = Color32::from_rgba_premultiplied(90, 110, 90, 120);
pub const SKY: Color32 = Color32::from_rgb(24, 30, 44);

/// Marker tint for an object kind.
pub fn kind_tint(kind: ObjectKind) -> Color32 {
    match kind {
        ObjectKind::AetherCurrent => AETHER_CURRENT_TINT,
        ObjectKind::Gathering => GATHERING_TINT,
        ObjectKind::MobHunt => MOB_HUNT_TINT,
        ObjectKind::Quest => QUEST_TINT,
    }
}
