//! Contour densification along great circles

use tracing::warn;

use crate::error::{Error, Result};
use crate::geodesy::coordinate::Coordinate;
use crate::geodesy::distance::{distance, EARTH_RADIUS_KM};

/// Below this `sin(angle)` a segment is treated as antipodal and its great
/// circle as undefined.
const ANTIPODAL_SIN_TOLERANCE: f64 = 1e-12;

/// Inserts vertices every `step_m` meters along each polygon edge that is
/// longer than `step_m`.
///
/// Original vertices are kept in order; inserted points lie on the great
/// circle between the two vertices of their edge. A point that would land
/// exactly on the next vertex is not duplicated.
pub fn densify_to_distance(polygon: &[Coordinate], step_m: f64) -> Result<Vec<Coordinate>> {
    if !step_m.is_finite() || step_m <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "densification step must be a positive distance, got {}",
            step_m
        )));
    }

    let mut dense = Vec::with_capacity(polygon.len());

    if let Some(&first) = polygon.first() {
        dense.push(first);
    }

    for edge in polygon.windows(2) {
        insert_along_edge(edge[0], edge[1], step_m, &mut dense);
        dense.push(edge[1]);
    }

    Ok(dense)
}

fn insert_along_edge(from: Coordinate, to: Coordinate, step_m: f64, out: &mut Vec<Coordinate>) {
    let length_m = distance(from, to);
    if step_m >= length_m {
        return;
    }

    let angle = length_m / (EARTH_RADIUS_KM * 1000.0);
    let sin_angle = angle.sin();
    if sin_angle.abs() < ANTIPODAL_SIN_TOLERANCE {
        warn!(
            from_lat = from.lat,
            from_lon = from.lon,
            to_lat = to.lat,
            to_lon = to.lon,
            "skipping densification of antipodal edge"
        );
        return;
    }

    let a = from.to_cartesian(1.0);
    let b = to.to_cartesian(1.0);
    let times = (length_m / step_m).floor() as usize;

    for j in 1..=times {
        let along = step_m * j as f64;
        if along >= length_m {
            break;
        }

        let t = along / length_m;
        let wa = ((1.0 - t) * angle).sin() / sin_angle;
        let wb = (t * angle).sin() / sin_angle;
        out.push(Coordinate::from_cartesian(&a.scale(wa).add(&b.scale(wb))));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equator_edge_gets_intermediate_points() {
        let polygon = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 2.0)];
        let dense = densify_to_distance(&polygon, 50_000.0).unwrap();

        // 222.4 km edge, a point every 50 km
        assert_eq!(dense.len(), 6);
        assert_eq!(dense[0], polygon[0]);
        assert_eq!(dense[5], polygon[1]);

        let expected_lon = 50_000.0 / distance(polygon[0], Coordinate::new(0.0, 1.0));
        assert!((dense[1].lon - expected_lon).abs() < 1e-9);

        for pair in dense.windows(2) {
            assert!(pair[0].lat.abs() < 1e-9);
            assert!(pair[1].lon > pair[0].lon);
            assert!(distance(pair[0], pair[1]) <= 50_000.0 + 1e-6);
        }
    }

    #[test]
    fn test_short_edges_untouched() {
        let polygon = [
            Coordinate::new(10.0, 10.0),
            Coordinate::new(10.1, 10.0),
            Coordinate::new(10.1, 10.1),
        ];
        let dense = densify_to_distance(&polygon, 100_000.0).unwrap();
        assert_eq!(dense, polygon.to_vec());
    }

    #[test]
    fn test_meridian_edge() {
        let polygon = [Coordinate::new(-1.0, 30.0), Coordinate::new(1.0, 30.0)];
        let dense = densify_to_distance(&polygon, 30_000.0).unwrap();
        assert!(dense.len() > 2);
        for c in &dense {
            assert!((c.lon - 30.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_and_single_vertex() {
        assert!(densify_to_distance(&[], 1000.0).unwrap().is_empty());
        let single = [Coordinate::new(5.0, 5.0)];
        assert_eq!(densify_to_distance(&single, 1000.0).unwrap(), single.to_vec());
    }

    #[test]
    fn test_invalid_step() {
        let polygon = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)];
        assert!(matches!(
            densify_to_distance(&polygon, 0.0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(densify_to_distance(&polygon, -5.0).is_err());
        assert!(densify_to_distance(&polygon, f64::NAN).is_err());
    }

    #[test]
    fn test_antipodal_edge_skipped() {
        let polygon = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0)];
        let dense = densify_to_distance(&polygon, 1_000_000.0).unwrap();
        assert_eq!(dense, polygon.to_vec());
    }
}
