//! CSV time-series export for simulated trajectories.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use serde::Serialize;

use crate::state::Trajectory;

/// Record for CSV time-series export, one row per sample
#[derive(Debug, Clone, Serialize)]
pub struct TimeSeriesRecord {
    /// Simulation time (seconds)
    pub time_sec: f64,
    /// Mediator concentration (arbitrary units)
    pub mediator: f64,
    /// Regulator activation fraction
    pub activation: f64,
    /// Light output (a.u.)
    pub light_au: f64,
}

/// Export a trajectory to a timestamped CSV file under `dir`.
///
/// Creates the directory if it doesn't exist. Filename is auto-generated:
/// `trajectory_YYYYMMDD_HHMMSS.csv`. Returns the path written.
pub fn export_trajectory_csv<P: AsRef<Path>>(trajectory: &Trajectory, dir: P) -> Result<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("trajectory_{}.csv", timestamp));
    export_trajectory_csv_to(trajectory, &path)?;
    Ok(path)
}

/// Export a trajectory to a specific CSV file.
pub fn export_trajectory_csv_to(trajectory: &Trajectory, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for i in 0..trajectory.len() {
        writer.serialize(TimeSeriesRecord {
            time_sec: trajectory.time_sec[i],
            mediator: trajectory.mediator[i],
            activation: trajectory.activation[i],
            light_au: trajectory.light_au[i],
        })?;
    }
    writer.flush()?;

    log::info!("CSV trajectory exported: {}", path.display());
    Ok(())
}
