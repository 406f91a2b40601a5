use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geodesy::Coordinate;

#[derive(Debug, Deserialize)]
struct CsvPoint {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Serialize)]
struct CsvScore {
    latitude: f64,
    longitude: f64,
    score: String,
}

/// Reads `latitude,longitude` rows with a header line; extra columns are
/// ignored
pub fn read_coordinates<R: Read>(reader: R) -> Result<Vec<Coordinate>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<CsvPoint>()
        .map(|row| {
            let point = row?;
            Ok(Coordinate::new(point.latitude, point.longitude))
        })
        .collect()
}

/// Reads a coordinate CSV file
pub fn read_coordinates_path<P: AsRef<Path>>(path: P) -> Result<Vec<Coordinate>> {
    read_coordinates(File::open(path)?)
}

/// Writes one `latitude,longitude,score` row per grid point.
///
/// Unresolved scores are written as an empty field.
pub fn write_scores<W: Write>(writer: W, grid: &[Coordinate], scores: &[Option<f64>]) -> Result<()> {
    if grid.len() != scores.len() {
        return Err(Error::InvalidParameter(format!(
            "grid has {} points but {} scores were given",
            grid.len(),
            scores.len()
        )));
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    for (point, score) in grid.iter().zip(scores) {
        csv_writer.serialize(CsvScore {
            latitude: point.lat,
            longitude: point.lon,
            score: score.map(|s| s.to_string()).unwrap_or_default(),
        })?;
    }
    csv_writer.flush()?;

    Ok(())
}
