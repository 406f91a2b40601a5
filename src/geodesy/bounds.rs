//! Geographic limits of coordinate sets and regular lon/lat grids

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geodesy::coordinate::Coordinate;
use crate::geodesy::distance::EARTH_RADIUS_KM;

/// Upper limit on the number of values a single range may hold
pub const MAX_RANGE_LEN: usize = 10_000_000;

/// Upper limit on the number of points a generated grid may hold
pub const MAX_GRID_POINTS: usize = 50_000_000;

/// Longitude/latitude extent of a set of coordinates, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl GeoBounds {
    /// Creates bounds from explicit limits
    pub fn new(lon_min: f64, lon_max: f64, lat_min: f64, lat_max: f64) -> Self {
        Self {
            lon_min,
            lon_max,
            lat_min,
            lat_max,
        }
    }

    /// Bounds covering the whole globe
    pub fn global() -> Self {
        Self::new(-180.0, 180.0, -90.0, 90.0)
    }

    /// Extracts the limits of a coordinate set, `None` when empty
    pub fn from_coordinates(coords: &[Coordinate]) -> Option<Self> {
        let first = coords.first()?;
        let init = Self::new(first.lon, first.lon, first.lat, first.lat);

        Some(coords.iter().skip(1).fold(init, |b, c| {
            Self::new(
                b.lon_min.min(c.lon),
                b.lon_max.max(c.lon),
                b.lat_min.min(c.lat),
                b.lat_max.max(c.lat),
            )
        }))
    }

    /// Returns whether the coordinate lies inside (or on) the bounds
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.lon >= self.lon_min
            && coord.lon <= self.lon_max
            && coord.lat >= self.lat_min
            && coord.lat <= self.lat_max
    }
}

/// Evenly spaced values from `start` towards `stop`.
///
/// `stop` itself is included only when it falls exactly on a step.
pub fn arange(start: f64, stop: f64, step: f64) -> Result<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "range step must be positive, got {}",
            step
        )));
    }

    let n = ((stop - start) / step).ceil().max(0.0);
    if n >= MAX_RANGE_LEN as f64 {
        return Err(Error::InvalidParameter(format!(
            "range from {} to {} with step {} exceeds {} values",
            start, stop, step, MAX_RANGE_LEN
        )));
    }
    let n = n as usize;
    let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();

    let last = start + n as f64 * step;
    if last <= stop {
        values.push(last);
    }

    Ok(values)
}

/// Builds a regular grid covering the integer-degree envelope of `coords`.
///
/// Points are ordered longitude-major: every latitude of the first
/// longitude, then every latitude of the next.
pub fn make_grid(coords: &[Coordinate], step_deg: f64) -> Result<Vec<Coordinate>> {
    let bounds = GeoBounds::from_coordinates(coords).ok_or_else(|| {
        Error::InvalidParameter("cannot build a grid from an empty coordinate set".to_string())
    })?;

    let lons = arange(bounds.lon_min.floor(), bounds.lon_max.ceil(), step_deg)?;
    let lats = arange(bounds.lat_min.floor(), bounds.lat_max.ceil(), step_deg)?;

    let points = lons.len().saturating_mul(lats.len());
    if points > MAX_GRID_POINTS {
        return Err(Error::InvalidParameter(format!(
            "grid with step {} deg would hold {} points, limit is {}",
            step_deg, points, MAX_GRID_POINTS
        )));
    }

    let mut grid = Vec::with_capacity(lons.len() * lats.len());
    for &lon in &lons {
        for &lat in &lats {
            grid.push(Coordinate::new(lat, lon));
        }
    }

    Ok(grid)
}

/// Surface area in m² of the `step_deg` x `step_deg` cell centred on each
/// grid point, on the Earth sphere.
///
/// Cells reaching past a pole are not clipped.
pub fn cell_areas(grid: &[Coordinate], step_deg: f64) -> Result<Vec<f64>> {
    if !step_deg.is_finite() || step_deg <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "cell step must be positive, got {}",
            step_deg
        )));
    }

    let radius_m = EARTH_RADIUS_KM * 1000.0;
    let step = step_deg.to_radians();
    let half = step / 2.0;

    Ok(grid
        .iter()
        .map(|c| {
            let lat = c.lat.to_radians();
            radius_m * radius_m * ((lat + half).sin() - (lat - half).sin()) * step
        })
        .collect())
}
