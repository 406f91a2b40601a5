//! Buffer-normalised distance scores
//!
//! A score of 0 means the point lies on the contour, 1 means it is at least
//! one buffer width away. `None` marks an unresolved score: no contour
//! distance was available, which callers must not confuse with 0.

use rayon::prelude::*;
use tracing::debug;

use crate::deformation::buffer::Buffer;
use crate::deformation::min::min_ignoring;
use crate::error::Result;
use crate::geodesy::{point_vs_point_array, Coordinate};

/// Scores one point against the contour.
///
/// Returns `None` when the contour yields no usable distance (e.g. it is
/// empty).
pub fn point_score(point: Coordinate, contour: &[Coordinate], buffer: Buffer) -> Option<f64> {
    let distances = point_vs_point_array(point, contour);

    min_ignoring(&distances, f64::NAN).map(|min_distance| (min_distance / buffer.meters()).min(1.0))
}

/// Scores every grid point, index-aligned with `grid`.
///
/// Fails with `Error::InvalidParameter` if `buffer_m` is not a positive
/// finite distance.
pub fn grid_score(grid: &[Coordinate], contour: &[Coordinate], buffer_m: f64) -> Result<Vec<Option<f64>>> {
    let buffer = Buffer::new(buffer_m)?;
    debug!(points = grid.len(), contour = contour.len(), buffer_m, "scoring grid");

    Ok(grid
        .iter()
        .map(|&point| point_score(point, contour, buffer))
        .collect())
}

/// Parallel version of [`grid_score`].
///
/// Uses rayon to score points on the global thread pool; the output keeps
/// the order of `grid`.
pub fn grid_score_par(grid: &[Coordinate], contour: &[Coordinate], buffer_m: f64) -> Result<Vec<Option<f64>>> {
    let buffer = Buffer::new(buffer_m)?;
    debug!(points = grid.len(), contour = contour.len(), buffer_m, "scoring grid in parallel");

    Ok(grid
        .par_iter()
        .map(|&point| point_score(point, contour, buffer))
        .collect())
}

/// Flattens scores into plain floats, encoding unresolved scores as NaN
pub fn unresolved_as_nan(scores: &[Option<f64>]) -> Vec<f64> {
    scores.iter().map(|s| s.unwrap_or(f64::NAN)).collect()
}
