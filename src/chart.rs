//! Win-rate convergence chart.
//!
//! Draws the two running win-rate histories as a line chart with
//! `plotters`. The output backend follows the file extension:
//! `.png` renders a bitmap, `.svg` a vector image.

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::types::{Decision, MontyError};

const X_DESC: &str = "Game Number";
const Y_DESC: &str = "Win Probability";

/// Where and how large to draw the chart.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Configured trial count, shown in the title.
    pub trial_count: u64,
}

impl ChartSpec {
    pub fn title(&self) -> String {
        format!("Monty Hall Simulation ({} Games)", self.trial_count)
    }
}

/// Pair each value with its 1-based game number.
pub fn series_points(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| ((i + 1) as f64, v))
        .collect()
}

/// Render the switched and stayed histories. Empty histories are skipped.
pub fn render_win_rates(spec: &ChartSpec, switched: &[f64], stayed: &[f64]) -> Result<(), MontyError> {
    let size = (spec.width, spec.height);
    let extension = spec
        .output
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("png") => {
            let root = BitMapBackend::new(&spec.output, size).into_drawing_area();
            draw(&root, spec, switched, stayed).map_err(|e| MontyError::Chart(e.to_string()))?;
        }
        Some("svg") => {
            let root = SVGBackend::new(&spec.output, size).into_drawing_area();
            draw(&root, spec, switched, stayed).map_err(|e| MontyError::Chart(e.to_string()))?;
        }
        _ => {
            return Err(MontyError::Chart(format!(
                "unsupported chart format: {} (use .png or .svg)",
                spec.output.display()
            )));
        }
    }

    info!(path = %spec.output.display(), "Chart written");
    Ok(())
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    switched: &[f64],
    stayed: &[f64],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let x_max = switched.len().max(stayed.len()).max(1) as f64;

    let mut chart = ChartBuilder::on(root)
        .caption(spec.title(), ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0f64..x_max, 0.0f64..1.0f64)?;

    chart
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .axis_desc_style(("sans-serif", 20))
        .draw()?;

    let lines = [(Decision::Switched, switched, BLUE), (Decision::Stayed, stayed, RED)];
    let mut drawn = 0;
    for (decision, values, color) in lines {
        if values.is_empty() {
            continue;
        }
        chart
            .draw_series(LineSeries::new(series_points(values), color.stroke_width(2)))?
            .label(decision.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        drawn += 1;
    }

    if drawn > 0 {
        chart
            .configure_series_labels()
            .label_font(("sans-serif", 18))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// `base` with `-suffix` appended to the file stem.
pub fn suffixed_path(base: &Path, suffix: &str) -> PathBuf {
    let stem = base.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let name = match base.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}-{suffix}.{ext}"),
        None => format!("{stem}-{suffix}"),
    };
    base.with_file_name(name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
