//! Screen-space markers for tracked world objects.
//!
//! Each frame a [`Viewport`] snapshot and a [`MarkerConfig`] snapshot go in and
//! a [`DrawList`] comes out: world positions are projected, clamped into the
//! configured display area, oriented toward off-area targets and labelled with
//! shadowed text.

pub mod config;
pub mod constraint;
pub mod draw;
pub mod marker;
pub mod orientation;
pub mod projection;
pub mod scene;
pub mod text;
pub mod viewport;

pub use config::{ConfigSnapshot, ConfigStore, MarkerConfig};
pub use constraint::{DisplayArea, ScreenMarkConstraint, clamp_position, derive_constraint, resolve};
pub use draw::{DrawCommand, DrawList};
pub use marker::{MarkerGeometry, MarkerLayout, MarkerStyle, layout_marker};
pub use projection::{Camera, CameraProjector, Projector};
pub use scene::{ObjectKind, Scene, WorldObject};
pub use text::{FontMetrics, GlyphAdvances, LabelMetrics};
pub use viewport::Viewport;
