//! Scalar helpers

/// Linear interpolation from `a` to `b` by `t`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly remap `value` from `[in_min, in_max]` to `[out_min, out_max]`
///
/// The result is not clamped: values outside the input range extrapolate.
/// A degenerate input range maps everything to `out_min`.
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    out_min + (value - in_min) / span * (out_max - out_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(10.0, 20.0, 0.1), 11.0);
        assert_eq!(lerp(-1.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn test_map_range_inside() {
        assert_eq!(map_range(0.0, 0.0, 250.0, 0.5, 0.0), 0.5);
        assert_eq!(map_range(125.0, 0.0, 250.0, 0.5, 0.0), 0.25);
        assert_eq!(map_range(250.0, 0.0, 250.0, 0.5, 0.0), 0.0);
    }

    #[test]
    fn test_map_range_extrapolates() {
        // speed 39 on [1, 20] -> [1, 4] lands past the top of the range
        let v = map_range(39.0, 1.0, 20.0, 1.0, 4.0);
        assert!((v - 7.0).abs() < 1e-5);
    }

    #[test]
    fn test_map_range_degenerate() {
        assert_eq!(map_range(3.0, 2.0, 2.0, 5.0, 9.0), 5.0);
    }
}
