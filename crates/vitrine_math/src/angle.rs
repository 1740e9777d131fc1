//! Angle helpers for the carousel geometry
//!
//! The ring accumulates an unbounded signed angle in degrees; everything that
//! cares about screen position works on the normalized remainder in [0, 360).

/// Normalize an angle in degrees to [0, 360)
///
/// Works for arbitrarily negative inputs: `((x mod 360) + 360) mod 360`.
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    ((degrees % 360.0) + 360.0) % 360.0
}

/// Convert degrees to radians
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Shortest angular distance from `degrees` to 0, in [0, 180]
#[inline]
pub fn distance_to_front(degrees: f32) -> f32 {
    let d = normalize_degrees(degrees);
    d.min(360.0 - d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_positive() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(60.0), 60.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(420.0), 60.0);
    }

    #[test]
    fn test_normalize_negative() {
        assert_eq!(normalize_degrees(-60.0), 300.0);
        assert_eq!(normalize_degrees(-360.0), 0.0);
        assert_eq!(normalize_degrees(-420.0), 300.0);
    }

    #[test]
    fn test_to_radians() {
        assert!((to_radians(180.0) - std::f32::consts::PI).abs() < 1e-6);
        assert_eq!(to_radians(0.0), 0.0);
    }

    #[test]
    fn test_distance_to_front() {
        assert_eq!(distance_to_front(0.0), 0.0);
        assert_eq!(distance_to_front(90.0), 90.0);
        assert_eq!(distance_to_front(180.0), 180.0);
        assert_eq!(distance_to_front(270.0), 90.0);
        assert_eq!(distance_to_front(350.0), 10.0);
        assert_eq!(distance_to_front(-10.0), 10.0);
    }
}
