//! Trajectory export for downstream consumers.
//!
//! The simulation core's obligation ends at the three time-aligned series
//! (mediator, activation, light); everything here consumes a finished
//! trajectory after the run completes.

mod csv_export;
mod json_export;

pub use csv_export::{export_trajectory_csv, export_trajectory_csv_to, TimeSeriesRecord};
pub use json_export::{export_trajectory_json, export_trajectory_json_to, TrajectoryExport};
