use crate::Vec3f;

// Basis: camera-style RHS with -Z forward, +Y up, +X right
pub(super) const BODY_FWD: Vec3f = Vec3f::new(0.0, 0.0, -1.0);

#[inline]
pub(super) fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
