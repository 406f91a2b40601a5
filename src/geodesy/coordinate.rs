use serde::{Deserialize, Serialize};

use crate::types::Vector3;

/// Geographic position on the sphere, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude/longitude in degrees
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Creates a coordinate from longitude/latitude in degrees
    pub fn from_lonlat(lon: f64, lat: f64) -> Self {
        Self::new(lat, lon)
    }

    /// Converts to a Cartesian vector on a sphere of the given radius
    pub fn to_cartesian(&self, radius: f64) -> Vector3 {
        let lat = self.lat.to_radians();
        let lon = self.lon.to_radians();

        Vector3::new(
            radius * lat.cos() * lon.cos(),
            radius * lat.cos() * lon.sin(),
            radius * lat.sin(),
        )
    }

    /// Recovers the geographic direction of a Cartesian vector.
    ///
    /// The magnitude is discarded; a zero vector maps to (0, 0).
    pub fn from_cartesian(v: &Vector3) -> Self {
        let lat = v.z.atan2((v.x * v.x + v.y * v.y).sqrt());
        let lon = v.y.atan2(v.x);

        Self::new(lat.to_degrees(), lon.to_degrees())
    }

    /// Converts a slice of coordinates to Cartesian vectors
    pub fn to_cartesian_many(coords: &[Coordinate], radius: f64) -> Vec<Vector3> {
        coords.iter().map(|c| c.to_cartesian(radius)).collect()
    }
}
