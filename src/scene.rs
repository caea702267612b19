//! Demo scene data: tracked objects and the starting camera pose.

use crate::projection::Camera;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Kind of a tracked object; decides marker colour and the overlay it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    AetherCurrent,
    Gathering,
    MobHunt,
    Quest,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 4] = [
        ObjectKind::AetherCurrent,
        ObjectKind::Gathering,
        ObjectKind::MobHunt,
        ObjectKind::Quest,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ObjectKind::AetherCurrent => "Aether Currents",
            ObjectKind::Gathering => "Gathering Points",
            ObjectKind::MobHunt => "Hunt Marks",
            ObjectKind::Quest => "Quest Targets",
        }
    }
}

/// An object placed in the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldObject {
    pub name: String,
    pub kind: ObjectKind,
    /// World position [x, y, z] where y is height
    pub position: [f32; 3],
}

impl WorldObject {
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Where the camera starts when a scene is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraStart {
    pub eye: [f32; 3],
    /// Degrees, 0 looks down -Z.
    #[serde(default)]
    pub yaw: f32,
    /// Degrees above the horizon.
    #[serde(default)]
    pub pitch: f32,
}

impl Default for CameraStart {
    fn default() -> Self {
        Self {
            eye: [0.0, 1.7, 0.0],
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl CameraStart {
    pub fn camera(&self) -> Camera {
        Camera {
            eye: Vec3::from_array(self.eye),
            yaw: self.yaw.to_radians(),
            pitch: self.pitch.to_radians(),
            ..Camera::default()
        }
    }
}

fn default_detection_range() -> f32 {
    150.0
}

/// A demo world: objects to track and the camera's starting pose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,
    #[serde(default)]
    pub camera: CameraStart,
    /// Objects further than this from the camera are not detected.
    #[serde(default = "default_detection_range")]
    pub detection_range: f32,
    pub objects: Vec<WorldObject>,
}

impl Scene {
    /// Objects within detection range of `from`, paired with their distance.
    pub fn detected(&self, from: Vec3) -> impl Iterator<Item = (usize, &WorldObject, f32)> {
        self.objects
            .iter()
            .enumerate()
            .map(move |(idx, object)| (idx, object, object.position().distance(from)))
            .filter(move |(_, _, distance)| *distance <= self.detection_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"(
        name: "Test",
        detection_range: 50.0,
        objects: [
            (name: "Near", kind: Quest, position: (0.0, 0.0, -10.0)),
            (name: "Far", kind: Gathering, position: (0.0, 0.0, -100.0)),
        ],
    )"#;

    #[test]
    fn parses_with_defaults() {
        let scene: Scene = ron::from_str(SCENE).unwrap();
        assert_eq!(scene.objects.len(), 2);
        assert_eq!(scene.camera, CameraStart::default());
        assert_eq!(scene.objects[1].kind, ObjectKind::Gathering);
    }

    #[test]
    fn camera_start_converts_degrees() {
        let start = CameraStart {
            eye: [1.0, 2.0, 3.0],
            yaw: 90.0,
            pitch: -45.0,
        };
        let camera = start.camera();
        assert_eq!(camera.eye, Vec3::new(1.0, 2.0, 3.0));
        assert!((camera.yaw - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((camera.pitch + std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn detection_filters_by_range() {
        let scene: Scene = ron::from_str(SCENE).unwrap();
        let detected: Vec<_> = scene.detected(Vec3::ZERO).collect();
        assert_eq!(detected.len(), 1);
        assert_eq!(detected[0].1.name, "Near");
        assert!((detected[0].2 - 10.0).abs() < 1e-4);
    }
}
