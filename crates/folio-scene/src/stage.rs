//! Static lighting and set-dressing descriptors
//!
//! The renderer owns the actual light objects; this module only describes
//! them, so the rig can be serialized across the host boundary and asserted
//! in tests.

use serde::Serialize;

use folio_math::Vec3;

/// A sun-like light with parallel rays
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub intensity: f32,
    pub cast_shadow: bool,
    /// Shadow map resolution (square), when shadows are cast
    pub shadow_map_size: u32,
}

/// A local light with falloff
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
    pub distance: f32,
    pub decay: f32,
}

/// Depth fog
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Fog {
    pub color: &'static str,
    pub near: f32,
    pub far: f32,
}

/// The office lighting rig
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LightRig {
    pub ambient_intensity: f32,
    /// Main key light
    pub key: DirectionalLight,
    /// Fill from the opposite side
    pub fill: DirectionalLight,
    /// Soft light over the desk area
    pub desk: PointLight,
}

impl LightRig {
    /// The standard office rig
    pub fn standard() -> Self {
        Self {
            ambient_intensity: 0.5,
            key: DirectionalLight {
                position: Vec3::new(10.0, 10.0, 5.0),
                intensity: 1.0,
                cast_shadow: true,
                shadow_map_size: 2048,
            },
            fill: DirectionalLight {
                position: Vec3::new(-5.0, 5.0, -5.0),
                intensity: 0.3,
                cast_shadow: false,
                shadow_map_size: 0,
            },
            desk: PointLight {
                position: Vec3::new(0.0, 3.0, 0.0),
                intensity: 0.5,
                distance: 10.0,
                decay: 2.0,
            },
        }
    }
}

/// Everything static about the set
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StageSettings {
    pub lights: LightRig,
    pub ground_color: &'static str,
    pub ground_extent: f32,
    pub fog: Fog,
    /// Environment map preset name for image-based lighting
    pub environment: &'static str,
}

impl StageSettings {
    /// The standard set
    pub fn standard() -> Self {
        Self {
            lights: LightRig::standard(),
            ground_color: "#1a1a2e",
            ground_extent: 50.0,
            fog: Fog {
                color: "#1a1a2e",
                near: 10.0,
                far: 30.0,
            },
            environment: "apartment",
        }
    }
}
