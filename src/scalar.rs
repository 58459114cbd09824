//! Scalar helpers shared by both dimensionalities.

/// Linear interpolation: `a + (b - a) * t`.
///
/// `t` is not clamped to `[0, 1]`; values outside that range extrapolate.
#[inline(always)]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamp `v` to `[lo, hi]` as `max(lo, min(hi, v))`.
///
/// Unlike `f64::clamp` this never panics; when `lo > hi` the lower bound
/// wins, matching the formula exactly.
#[inline(always)]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    v.min(hi).max(lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    }

    #[test]
    fn lerp_extrapolates() {
        assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
        assert_eq!(lerp(0.0, 10.0, -1.0), -10.0);
    }

    #[test]
    fn clamp_inside_and_outside() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn clamp_inverted_bounds_takes_lower() {
        // lo > hi: v.min(hi).max(lo) == lo
        assert_eq!(clamp(5.0, 10.0, 0.0), 10.0);
    }
}
