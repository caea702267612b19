/// Width of the sidebar panel in pixels.
pub const SIDEBAR_WIDTH: f32 = 200.0;

/// Storage key of the persisted marker settings.
pub const CONFIG_KEY: &str = "compass_marks_config";

/// Camera walk speed in world units per second.
pub const MOVE_SPEED: f32 = 12.0;

/// Keyboard turn speed in radians per second.
pub const TURN_SPEED: f32 = 1.5;

/// Mouse-look sensitivity in radians per dragged pixel.
pub const LOOK_SENSITIVITY: f32 = 0.004;

/// Pitch limit in radians, short of straight up/down.
pub const PITCH_LIMIT: f32 = 1.5;

/// Lightness of the shadow drawn behind marker labels.
pub const LABEL_SHADOW_LIGHTNESS: f32 = 0.1;

/// Half extent and spacing of the ground grid in world units.
pub const GRID_EXTENT: f32 = 150.0;
pub const GRID_SPACING: f32 = 10.0;
