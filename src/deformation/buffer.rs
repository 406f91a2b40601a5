//! Buffer distance validation and the buffered deformation workflow

use tracing::{debug, info, warn};

use crate::config::ScoringConfig;
use crate::deformation::score::{grid_score, grid_score_par};
use crate::error::{Error, Result};
use crate::geodesy::{densify_to_distance, Coordinate};

/// Distance, in meters, over which a score rises from 0 to 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Buffer(f64);

impl Buffer {
    /// Validates a buffer distance in meters; it must be finite and positive
    pub fn new(meters: f64) -> Result<Self> {
        if !meters.is_finite() || meters <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "buffer distance must be a positive number of meters, got {}",
                meters
            )));
        }
        Ok(Self(meters))
    }

    /// Returns the buffer width in meters
    pub fn meters(&self) -> f64 {
        self.0
    }

    /// Contour vertex spacing used before scoring: half the buffer width
    pub fn densify_step(&self) -> f64 {
        self.0 / 2.0
    }
}

/// Computes the deformation fraction of every grid point.
///
/// With no buffer configured every point is fully weighted (1.0). Otherwise
/// the contour is optionally densified to half the buffer width and each
/// point is scored against it.
pub fn deformation_fraction(
    grid: &[Coordinate],
    contour: &[Coordinate],
    config: &ScoringConfig,
) -> Result<Vec<Option<f64>>> {
    config.validate()?;

    let Some(buffer_m) = config.buffer_m else {
        info!(points = grid.len(), "no deformation buffer configured, using full weight");
        return Ok(vec![Some(1.0); grid.len()]);
    };

    let buffer = Buffer::new(buffer_m)?;
    let contour = if config.densify {
        let dense = densify_to_distance(contour, buffer.densify_step())?;
        debug!(before = contour.len(), after = dense.len(), "densified contour");
        dense
    } else {
        contour.to_vec()
    };

    if config.parallel {
        grid_score_par(grid, &contour, buffer.meters())
    } else {
        grid_score(grid, &contour, buffer.meters())
    }
}

/// Multiplies each cell area by its deformation fraction.
///
/// Unresolved fractions (`None`) carry no information about the cell, so
/// the cell contributes zero area. Fails if the slices differ in length.
pub fn weighted_areas(areas: &[f64], fractions: &[Option<f64>]) -> Result<Vec<f64>> {
    if areas.len() != fractions.len() {
        return Err(Error::InvalidParameter(format!(
            "{} cell areas but {} deformation fractions",
            areas.len(),
            fractions.len()
        )));
    }

    let unresolved = fractions.iter().filter(|f| f.is_none()).count();
    if unresolved > 0 {
        warn!(unresolved, "unresolved deformation fractions excluded from area");
    }

    Ok(areas
        .iter()
        .zip(fractions)
        .map(|(area, fraction)| fraction.map_or(0.0, |f| area * f))
        .collect())
}

/// Total area in m² of the grid cells, weighted by deformation fraction
pub fn weighted_total_area(areas: &[f64], fractions: &[Option<f64>]) -> Result<f64> {
    Ok(weighted_areas(areas, fractions)?.iter().sum())
}
