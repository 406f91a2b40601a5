//! deformkit - Spherical-Earth deformation scoring
//!
//! deformkit computes great-circle distances on a spherical Earth, scores
//! grid points by their distance to a reference contour relative to a buffer
//! width, and stores symmetric 3x3 covariance matrices compactly.
//!
//! # Examples
//!
//! ## Scoring a grid
//!
//! ```
//! use deformkit::{grid_score, Coordinate};
//!
//! let contour = [Coordinate::new(0.0, 1.0)];
//! let grid = [Coordinate::new(0.0, 0.0)];
//!
//! let scores = grid_score(&grid, &contour, 200_000.0)?;
//! assert!((scores[0].unwrap() - 0.556).abs() < 1e-3);
//! # Ok::<(), deformkit::Error>(())
//! ```
//!
//! ## Covariance columns
//!
//! ```
//! use deformkit::{Covariance, CovarianceColumns};
//!
//! let covs = [
//!     Covariance::new(1.0, 0.0, 0.0, 2.0, 0.0, 3.0),
//!     Covariance::from_slice(&[4.0, 0.1, 0.2, 5.0, 0.3, 6.0])?,
//! ];
//! let cols = CovarianceColumns::from_covariances(&covs);
//! assert_eq!(cols.c22, vec![2.0, 5.0]);
//! # Ok::<(), deformkit::Error>(())
//! ```

pub mod error;
pub mod types;
pub mod geodesy;
pub mod deformation;
pub mod covariance;
pub mod config;
pub mod io;
pub mod logging;

pub use error::{Error, Result};
pub use types::{Matrix3, Vector3};
pub use geodesy::{
    cell_areas, densify_to_distance, distance, make_grid, point_vs_point_array, Coordinate, GeoBounds,
    EARTH_RADIUS_KM,
};
pub use deformation::{
    deformation_fraction, grid_score, grid_score_par, min_ignoring, point_score,
    unresolved_as_nan, weighted_areas, weighted_total_area, Buffer, SentinelOrd,
};
pub use covariance::{Covariance, CovarianceColumns};
pub use config::ScoringConfig;
