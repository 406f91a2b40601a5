//! CSV input/output of coordinate lists and score tables

pub mod points;

pub use points::{read_coordinates, read_coordinates_path, write_scores};
