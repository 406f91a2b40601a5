//! Deformation-area scoring of grid points against a reference contour

pub mod min;
pub mod score;
pub mod buffer;

pub use min::{min_ignoring, SentinelOrd};
pub use score::{grid_score, grid_score_par, point_score, unresolved_as_nan};
pub use buffer::{deformation_fraction, weighted_areas, weighted_total_area, Buffer};
