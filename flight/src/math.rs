// Vector types are Bevy's (re-exported from bevy_math) so the client can pass
// them straight into transforms.
pub use bevy_math::{Quat as Quatf, Vec2 as Vec2f, Vec3 as Vec3f};

/// Exponential-approach step: moves `current` a fraction `t` of the way to `target`.
#[inline]
pub fn lerp(current: f32, target: f32, t: f32) -> f32 {
    current + (target - current) * t
}

/// Largest per-tick damping factor accepted from tuning; 1.0 would never decay.
pub const MAX_DAMPING: f32 = 0.9999;

/// Tuning magnitudes: negatives and non-finite values become zero.
#[inline]
pub(crate) fn non_negative(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

/// Multiplicative damping kept strictly below one so released motion decays.
#[inline]
pub(crate) fn damping_factor(d: f32) -> f32 {
    if d.is_finite() {
        d.clamp(0.0, MAX_DAMPING)
    } else {
        MAX_DAMPING
    }
}
