//! Easing functions for camera flights and shell transitions

/// Ease-out cubic: fast start, gentle arrival
///
/// `1 - (1 - t)^3`. This is the curve used for camera flights.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Ease-in-out cubic: gentle at both ends
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Linear interpolation (no easing)
#[inline]
pub fn linear(t: f32) -> f32 {
    t
}

#[cfg(test)]
fn curves() -> [(&'static str, fn(f32) -> f32); 3] {
    [
        ("ease_out_cubic", ease_out_cubic),
        ("ease_in_out", ease_in_out),
        ("linear", linear),
    ]
}
