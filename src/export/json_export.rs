//! JSON trajectory export for simulation runs.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use serde::Serialize;

use crate::config::RateParameters;
use crate::state::Trajectory;

/// Full trajectory export structure
#[derive(Debug, Clone, Serialize)]
pub struct TrajectoryExport<'a> {
    /// Export timestamp
    pub exported_at: String,
    /// Export version for compatibility
    pub version: &'static str,
    /// Rate constants the run used
    pub rates: RateParameters,
    /// Sampled trajectory
    pub trajectory: &'a Trajectory,
}

/// Export a trajectory to a timestamped JSON file under `dir`.
///
/// Creates the directory if it doesn't exist. Filename is auto-generated:
/// `trajectory_YYYYMMDD_HHMMSS.json`. Returns the path written.
pub fn export_trajectory_json<P: AsRef<Path>>(
    trajectory: &Trajectory,
    rates: &RateParameters,
    dir: P,
) -> Result<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("trajectory_{}.json", timestamp));
    export_trajectory_json_to(trajectory, rates, &path)?;
    Ok(path)
}

/// Export a trajectory to a specific JSON file.
pub fn export_trajectory_json_to(
    trajectory: &Trajectory,
    rates: &RateParameters,
    path: &Path,
) -> Result<()> {
    let export = TrajectoryExport {
        exported_at: Local::now().to_rfc3339(),
        version: "1.0.0",
        rates: *rates,
        trajectory,
    };

    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &export)?;

    log::info!("JSON trajectory exported: {}", path.display());
    Ok(())
}
