use std::env;
use std::io;
use std::process;

use deformkit::{
    cell_areas, deformation_fraction, io as points, logging, make_grid, weighted_total_area, Error,
    Result, ScoringConfig,
};
use tracing::{error, info};

const USAGE: &str = "usage: deformkit <config.json> <contour.csv> [grid.csv]";

fn run(args: &[String]) -> Result<()> {
    let (config_path, contour_path, grid_path) = match args {
        [config, contour] => (config, contour, None),
        [config, contour, grid] => (config, contour, Some(grid)),
        _ => return Err(Error::InvalidParameter(USAGE.to_string())),
    };

    let config = ScoringConfig::from_json_file(config_path)?;
    let contour = points::read_coordinates_path(contour_path)?;

    let grid = match grid_path {
        Some(path) => points::read_coordinates_path(path)?,
        None => {
            let step = config.grid_step_deg.ok_or_else(|| {
                Error::InvalidParameter("grid_step_deg is required when no grid file is given".to_string())
            })?;
            make_grid(&contour, step)?
        }
    };

    info!(
        grid = grid.len(),
        contour = contour.len(),
        buffer_m = ?config.buffer_m,
        "computing deformation fraction"
    );

    let scores = deformation_fraction(&grid, &contour, &config)?;
    let unresolved = scores.iter().filter(|s| s.is_none()).count();
    if unresolved > 0 {
        info!(unresolved, "some grid points have no score");
    }

    if let Some(step) = config.grid_step_deg {
        let areas = cell_areas(&grid, step)?;
        let area_m2 = weighted_total_area(&areas, &scores)?;
        info!(area_km2 = area_m2 / 1e6, "weighted grid area");
    }

    points::write_scores(io::stdout().lock(), &grid, &scores)
}

fn main() {
    logging::init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}
