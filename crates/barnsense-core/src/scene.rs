//! Renderer-agnostic barn scene description.
//!
//! The scene is plain data: the barn shell (floor, three walls, roof),
//! a few cows for scale, a camera, an ambient light, and one pulsing
//! sphere per heat zone. A rendering layer owns everything after this
//! point.

use serde::{Deserialize, Serialize};

use crate::colormap::Rgb;
use crate::heatmap::HeatMap;

/// World-space vector, meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Geometry of a scene node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Cuboid {
        width: f32,
        height: f32,
        length: f32,
        chamfer: f32,
    },
    Sphere {
        radius: f32,
    },
}

/// Surface appearance: base color, opacity, and optional self-illumination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub color: Rgb,
    /// 1.0 fully opaque.
    pub alpha: f64,
    /// Emit the base color (heat zones glow).
    pub emissive: bool,
}

/// Repeating scale animation attached to heat zones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseSpec {
    /// Peak scale factor.
    pub scale_to: f32,
    /// Seconds for one grow-or-shrink leg.
    pub half_period_secs: f32,
}

/// One object in the scene.
#[derive(Debug, Clone, Serialize)]
pub struct SceneNode {
    /// Role tag (`"floor"`, `"wall"`, `"roof"`, `"cow"`, `"zone"`).
    pub tag: &'static str,
    pub shape: Shape,
    pub material: Material,
    pub position: Vec3,
    pub pulse: Option<PulseSpec>,
}

/// Fixed viewpoint looking into the barn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Uniform ambient illumination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientLight {
    pub intensity: f32,
}

/// A complete, immutable scene description.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
    pub camera: Camera,
    pub light: AmbientLight,
}

const BROWN: Rgb = Rgb::new(0.6, 0.4, 0.2);
const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);

/// Resting spots for the cows.
const COW_SPOTS: [Vec3; 4] = [
    Vec3::new(-3.0, 0.5, 1.0),
    Vec3::new(-1.0, 0.5, -1.0),
    Vec3::new(2.0, 0.5, 0.0),
    Vec3::new(3.0, 0.5, 2.0),
];

fn cuboid(width: f32, height: f32, length: f32, chamfer: f32) -> Shape {
    Shape::Cuboid {
        width,
        height,
        length,
        chamfer,
    }
}

fn structure(tag: &'static str, shape: Shape, color: Rgb, alpha: f64, position: Vec3) -> SceneNode {
    SceneNode {
        tag,
        shape,
        material: Material {
            color,
            alpha,
            emissive: false,
        },
        position,
        pulse: None,
    }
}

/// Build the barn scene around a computed heat map.
pub fn build_barn_scene(map: &HeatMap) -> Scene {
    let mut nodes = Vec::with_capacity(map.zones.len() + 13);

    // Barn shell. Walls are nearly transparent so the zones stay visible.
    nodes.push(structure(
        "floor",
        cuboid(10.0, 0.2, 6.0, 0.0),
        BROWN,
        0.5,
        Vec3::new(0.0, 0.0, 0.0),
    ));
    nodes.push(structure(
        "wall",
        cuboid(10.0, 5.0, 0.2, 0.0),
        WHITE,
        0.2,
        Vec3::new(0.0, 2.5, -3.0),
    ));
    nodes.push(structure(
        "wall",
        cuboid(0.2, 5.0, 6.0, 0.0),
        WHITE,
        0.2,
        Vec3::new(-5.0, 2.5, 0.0),
    ));
    nodes.push(structure(
        "wall",
        cuboid(0.2, 5.0, 6.0, 0.0),
        WHITE,
        0.2,
        Vec3::new(5.0, 2.5, 0.0),
    ));
    nodes.push(structure(
        "roof",
        cuboid(10.0, 0.2, 6.0, 0.0),
        RED,
        0.3,
        Vec3::new(0.0, 5.0, 0.0),
    ));

    // Cows: body plus head, offset forward and up.
    for spot in COW_SPOTS {
        nodes.push(structure(
            "cow",
            cuboid(0.8, 0.6, 1.2, 0.1),
            BROWN,
            1.0,
            spot,
        ));
        nodes.push(structure(
            "cow",
            cuboid(0.4, 0.4, 0.4, 0.05),
            BROWN,
            1.0,
            Vec3::new(spot.x, spot.y + 0.3, spot.z + 0.8),
        ));
    }

    // One glowing, pulsing sphere per heat zone.
    for zone in &map.zones {
        nodes.push(SceneNode {
            tag: "zone",
            shape: Shape::Sphere { radius: 0.4 },
            material: Material {
                color: zone.color,
                alpha: 0.6,
                emissive: true,
            },
            position: Vec3::new(zone.position.x, zone.position.y, zone.position.z),
            pulse: Some(PulseSpec {
                scale_to: 1.2,
                half_period_secs: 1.5,
            }),
        });
    }

    Scene {
        nodes,
        camera: Camera {
            position: Vec3::new(8.0, 8.0, 12.0),
            look_at: Vec3::new(0.0, 2.0, 0.0),
        },
        light: AmbientLight { intensity: 500.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        let map = HeatMap::seeded(35.0, 2).unwrap();
        build_barn_scene(&map)
    }

    #[test]
    fn node_census() {
        let s = scene();
        let count = |tag: &str| s.nodes.iter().filter(|n| n.tag == tag).count();
        assert_eq!(count("floor"), 1);
        assert_eq!(count("wall"), 3);
        assert_eq!(count("roof"), 1);
        assert_eq!(count("cow"), 8); // 4 cows, body + head
        assert_eq!(count("zone"), 75);
        assert_eq!(s.nodes.len(), 88);
    }

    #[test]
    fn zones_glow_and_pulse() {
        let s = scene();
        for node in s.nodes.iter().filter(|n| n.tag == "zone") {
            assert!(node.material.emissive);
            assert_eq!(node.material.alpha, 0.6);
            let pulse = node.pulse.expect("zone missing pulse");
            assert_eq!(pulse.scale_to, 1.2);
            assert_eq!(pulse.half_period_secs, 1.5);
        }
    }

    #[test]
    fn structure_is_static() {
        let s = scene();
        for node in s.nodes.iter().filter(|n| n.tag != "zone") {
            assert!(node.pulse.is_none());
            assert!(!node.material.emissive);
        }
    }

    #[test]
    fn zone_nodes_sit_on_zone_positions() {
        let map = HeatMap::seeded(35.0, 2).unwrap();
        let s = build_barn_scene(&map);
        let zone_nodes: Vec<_> = s.nodes.iter().filter(|n| n.tag == "zone").collect();
        for (node, zone) in zone_nodes.iter().zip(&map.zones) {
            assert_eq!(node.position.x, zone.position.x);
            assert_eq!(node.position.y, zone.position.y);
            assert_eq!(node.position.z, zone.position.z);
            assert_eq!(node.material.color, zone.color);
        }
    }

    #[test]
    fn camera_looks_into_the_barn() {
        let s = scene();
        assert_eq!(s.camera.position, Vec3::new(8.0, 8.0, 12.0));
        assert_eq!(s.camera.look_at, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(s.light.intensity, 500.0);
    }

    #[test]
    fn scene_serializes() {
        let s = scene();
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"zone\""));
        assert!(json.contains("sphere"));
    }
}
