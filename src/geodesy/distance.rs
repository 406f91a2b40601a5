//! Great-circle distances on a spherical Earth

use crate::geodesy::coordinate::Coordinate;
use crate::types::Vector3;

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in meters between two Cartesian vectors on the
/// Earth sphere.
///
/// The normalised dot product is clamped into [-1, 1] so rounding near
/// identical or antipodal points never reaches `acos` out of domain.
fn arc_length_m(a: &Vector3, b: &Vector3) -> f64 {
    if a == b {
        return 0.0;
    }

    let cos_angle = (a.dot(b) / (EARTH_RADIUS_KM * EARTH_RADIUS_KM)).clamp(-1.0, 1.0);
    EARTH_RADIUS_KM * cos_angle.acos() * 1000.0
}

/// Great-circle distance in meters between two coordinates
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    arc_length_m(
        &a.to_cartesian(EARTH_RADIUS_KM),
        &b.to_cartesian(EARTH_RADIUS_KM),
    )
}

/// Great-circle distances in meters from `point` to every element of
/// `coords`, index-aligned with `coords`
pub fn point_vs_point_array(point: Coordinate, coords: &[Coordinate]) -> Vec<f64> {
    let origin = point.to_cartesian(EARTH_RADIUS_KM);

    Coordinate::to_cartesian_many(coords, EARTH_RADIUS_KM)
        .iter()
        .map(|v| arc_length_m(&origin, v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_degree_along_equator() {
        let d = distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        assert!((d - 111_195.0).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn test_identical_points_are_zero() {
        for c in [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(47.3, 8.5),
            Coordinate::new(-89.9, -179.9),
            Coordinate::new(90.0, 0.0),
        ] {
            let d = distance(c, c);
            assert_eq!(d, 0.0, "distance to self was {}", d);
        }
    }

    #[test]
    fn test_symmetry() {
        let a = Coordinate::new(52.52, 13.405);
        let b = Coordinate::new(-22.9, -43.2);
        assert!((distance(a, b) - distance(b, a)).abs() < 1e-6);
    }

    #[test]
    fn test_antipodal_is_half_circumference() {
        let d = distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        let half = std::f64::consts::PI * EARTH_RADIUS_KM * 1000.0;
        assert!(d.is_finite());
        assert!((d - half).abs() < 1.0);
    }

    #[test]
    fn test_point_vs_point_array_alignment() {
        let origin = Coordinate::new(0.0, 0.0);
        let targets = [
            Coordinate::new(0.0, 2.0),
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
        ];
        let d = point_vs_point_array(origin, &targets);
        assert_eq!(d.len(), 3);
        assert_eq!(d[1], 0.0);
        assert!(d[2] < d[0]);
        assert!((d[0] - 2.0 * d[2]).abs() < 1e-3);
    }

    #[test]
    fn test_point_vs_empty_array() {
        assert!(point_vs_point_array(Coordinate::new(1.0, 1.0), &[]).is_empty());
    }
}
