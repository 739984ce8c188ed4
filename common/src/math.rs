//! Float helpers for `no_std` pixel math.
//!
//! `core` has no `sin`/`cos`/`round` for `f32`, so these route through
//! `micromath`. Calls go through the trait explicitly so host test builds
//! (which link `std`) use the same approximations as the target.

use embedded_graphics::prelude::Point;
use micromath::F32Ext;

/// Round to the nearest whole pixel.
#[inline]
pub fn round(value: f32) -> i32 { F32Ext::round(value) as i32 }

/// Point at `radius` from `center`, `deg` degrees clockwise from +x.
///
/// Screen Y grows downward, so a positive angle turns clockwise on screen.
pub fn polar(center: Point, radius: f32, deg: f32) -> Point {
    let rad = deg.to_radians();
    Point::new(
        center.x + round(radius * F32Ext::cos(rad)),
        center.y + round(radius * F32Ext::sin(rad)),
    )
}

/// Linear interpolation between `from` and `to` at fraction `t`.
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 { from + (to - from) * t }

/// Whole-millisecond fraction of `part` over `whole`, clamped to `0.0..=1.0`.
pub fn fraction(part: core::time::Duration, whole: core::time::Duration) -> f32 {
    if whole.is_zero() {
        return 1.0;
    }
    (part.as_secs_f32() / whole.as_secs_f32()).clamp(0.0, 1.0)
}
