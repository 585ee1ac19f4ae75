//! Geometry and easing primitives for Folio OS
//!
//! Small 2D/3D math types shared by the scene choreography and the desktop
//! shell. Everything here is plain data with `f32` components:
//!
//! - [`Vec2`]: screen-space positions and drag offsets
//! - [`Vec3`]: world-space positions for the character and camera
//! - [`Size`]: window and screen dimensions
//! - [`Rect`]: window frames and hit-test areas
//! - [`easing`]: progress-to-interpolation-factor mappings for camera
//!   flights and shell transitions
//!
//! No rendering types live here; hosts consume these values as-is.

pub mod easing;

mod rect;
mod size;
mod vec2;
mod vec3;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
pub use vec3::Vec3;
