//! 3D vector for world-space positions
//!
//! Character movement happens on the ground plane, so alongside the usual
//! component math there are planar helpers that ignore the y component:
//! [`Vec3::planar_distance`] for arrival checks and [`Vec3::heading_to`]
//! for the facing angle while walking.

use core::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A 3D point or offset in world space
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// The origin
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new vector
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Vec3) -> f32 {
        (other - self).length()
    }

    /// Vector length
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Distance to `other` on the ground plane (x/z only)
    pub fn planar_distance(self, other: Vec3) -> f32 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Facing angle toward `target` on the ground plane
    ///
    /// Arctangent of the remaining displacement, `atan2(dx, dz)`, matching
    /// a y-up world where heading 0 looks down +z.
    pub fn heading_to(self, target: Vec3) -> f32 {
        let dx = target.x - self.x;
        let dz = target.z - self.z;
        dx.atan2(dz)
    }

    /// Linear interpolation between `self` and `other` at `t`
    pub fn lerp(self, other: Vec3, t: f32) -> Vec3 {
        Vec3::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
