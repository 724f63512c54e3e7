//! Static rendering of simulated trajectories.
//!
//! The renderer is a consumer of the finished run: three named time series
//! in, a stacked-panel PNG out. Nothing flows back into the simulation
//! core and no windowing or interactive display is involved.

use std::error::Error;
use std::path::{Path, PathBuf};

use chrono::Local;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::full_palette::{ORANGE, PURPLE};

const PLOT_WIDTH: u32 = 900;
const PLOT_HEIGHT: u32 = 720;

/// Render the three pixel series as stacked panels to a timestamped PNG
/// under `dir`. Returns the path written.
pub fn render_trajectory_png<P: AsRef<Path>>(
    dir: P,
    time_sec: &[f64],
    mediator: &[f64],
    activation: &[f64],
    light_au: &[f64],
) -> Result<PathBuf, Box<dyn Error>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("trajectory_{}.png", timestamp));
    render_trajectory_png_to(&path, time_sec, mediator, activation, light_au)?;
    Ok(path)
}

/// Render the three pixel series as stacked panels to a specific PNG file.
pub fn render_trajectory_png_to(
    path: &Path,
    time_sec: &[f64],
    mediator: &[f64],
    activation: &[f64],
    light_au: &[f64],
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled("Minimal lumped ODE model: one living pixel", ("sans-serif", 22))?;

    let panels = root.split_evenly((3, 1));
    draw_panel(&panels[0], time_sec, mediator, "Mediator", &BLUE)?;
    draw_panel(&panels[1], time_sec, activation, "Regulator activation", &ORANGE)?;
    draw_panel(&panels[2], time_sec, light_au, "Light (a.u.)", &PURPLE)?;

    root.present()?;
    log::info!("Trajectory plot rendered: {}", path.display());
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    xs: &[f64],
    ys: &[f64],
    label: &str,
    color: &RGBColor,
) -> Result<(), Box<dyn Error>> {
    let x_min = xs.first().copied().unwrap_or(0.0);
    let x_max = xs.last().copied().unwrap_or(1.0);
    let (y_min, y_max) = padded_range(ys);

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(28)
        .y_label_area_size(52)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc(label)
        .draw()?;

    chart.draw_series(LineSeries::new(
        xs.iter().copied().zip(ys.iter().copied()),
        color,
    ))?;

    Ok(())
}

/// Axis range with 5% padding; flat series get a fixed margin so the line
/// stays visible.
fn padded_range(values: &[f64]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if hi - lo < 1e-12 {
        return (lo - 0.5, hi + 0.5);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}
