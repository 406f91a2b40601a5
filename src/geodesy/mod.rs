//! Spherical-Earth geodesy: coordinates, great-circle distances and
//! contour/grid helpers

pub mod coordinate;
pub mod distance;
pub mod densify;
pub mod bounds;

pub use coordinate::Coordinate;
pub use distance::{distance, point_vs_point_array, EARTH_RADIUS_KM};
pub use densify::densify_to_distance;
pub use bounds::{arange, cell_areas, make_grid, GeoBounds};
