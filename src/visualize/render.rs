// src/visualize/render.rs
// PNG output via plotters' bitmap backend. Y axes are pinned to 0–100.

use std::fmt::Display;
use std::path::Path;

use chrono::{NaiveDateTime, TimeDelta, Timelike};
use log::info;
use plotters::prelude::*;

use super::{DaySelection, HeatmapGrid, HOURS, WEEKDAYS};
use crate::config::consts::CHART_TITLE;
use crate::error::{Error, Result};
use crate::file::ensure_parent;
use crate::sample::Sample;

const STEEL_BLUE: RGBColor = RGBColor(70, 130, 180);
const EMPTY_CELL: RGBColor = RGBColor(225, 225, 225);

// Yellow → orange → red ramp over 0..=1
const HEAT_STOPS: [(f64, (u8, u8, u8)); 5] = [
    (0.00, (255, 255, 204)),
    (0.25, (254, 217, 118)),
    (0.50, (253, 141, 60)),
    (0.75, (227, 26, 28)),
    (1.00, (128, 0, 38)),
];

fn render_err<E: Display>(e: E) -> Error {
    Error::Render(e.to_string())
}

fn hour_of_day(ts: NaiveDateTime) -> f64 {
    f64::from(ts.hour()) + f64::from(ts.minute()) / 60.0 + f64::from(ts.second()) / 3600.0
}

/// "9 AM", "12 PM", ...
pub fn hour_label(h: f64) -> String {
    let hr = (h.round() as i64).rem_euclid(24) as u32;
    let twelve = if hr % 12 == 0 { 12 } else { hr % 12 };
    format!("{twelve} {}", if hr < 12 { "AM" } else { "PM" })
}

/// Color for a mean occupancy; values outside 0–100 are clamped.
pub fn heat_color(value: f64) -> RGBColor {
    let t = (value / 100.0).clamp(0.0, 1.0);
    for pair in HEAT_STOPS.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
            let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * f).round() as u8;
            return RGBColor(lerp(c0.0, c1.0), lerp(c0.1, c1.1), lerp(c0.2, c1.2));
        }
    }
    let (_, last) = HEAT_STOPS[HEAT_STOPS.len() - 1];
    RGBColor(last.0, last.1, last.2)
}

pub fn render_day(day: &DaySelection, path: &Path) -> Result<()> {
    if day.is_empty() {
        return Err(Error::Render(format!("no samples for {}", day.date)));
    }
    ensure_parent(path)?;

    let points: Vec<(f64, f64)> = day
        .samples
        .iter()
        .map(|s| (hour_of_day(s.timestamp), f64::from(s.occupancy)))
        .collect();
    let lo = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min).floor();
    let hi = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max).ceil();
    let (lo, hi) = if hi > lo { (lo, hi) } else { (lo, lo + 1.0) };

    let root = BitMapBackend::new(path, (1200, 500)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let title = format!("{CHART_TITLE} - {}", day.date.format("%A, %B %d %Y"));
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 26))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(lo..hi, 0f64..100f64)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels((hi - lo) as usize + 1)
        .x_label_formatter(&|h: &f64| hour_label(*h))
        .y_labels(11)
        .y_desc("Occupancy (%)")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(
            AreaSeries::new(points.iter().copied(), 0.0, STEEL_BLUE.mix(0.15))
                .border_style(STEEL_BLUE.stroke_width(2)),
        )
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    info!("Rendered day chart for {} ({} samples) to {}", day.date, day.samples.len(), path.display());
    Ok(())
}

pub fn render_heatmap(grid: &HeatmapGrid, path: &Path) -> Result<()> {
    ensure_parent(path)?;

    let root = BitMapBackend::new(path, (1400, 420)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;
    let (main, legend) = root.split_horizontally(1250);

    // Cells are centred on integer coordinates so tick labels sit mid-cell.
    // Monday is the top row (y = 6).
    let mut chart = ChartBuilder::on(&main)
        .caption(
            format!("{CHART_TITLE} - Average Occupancy by Day & Hour"),
            ("sans-serif", 24),
        )
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..(HOURS as f64 - 0.5), -0.5f64..6.5f64)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(HOURS / 2)
        .x_label_formatter(&|h: &f64| format!("{}:00", h.round() as i64))
        .y_labels(7)
        .y_label_formatter(&|y: &f64| {
            let row = 6 - y.round() as i64;
            usize::try_from(row)
                .ok()
                .and_then(|d| WEEKDAYS.get(d))
                .map(|s| s.to_string())
                .unwrap_or_default()
        })
        .x_desc("Hour of Day")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(grid.cells().map(|(day, hour, mean)| {
            let x = hour as f64;
            let y = 6.0 - day as f64;
            let color = mean.map(heat_color).unwrap_or(EMPTY_CELL);
            Rectangle::new([(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)], color.filled())
        }))
        .map_err(render_err)?;

    let mut bar = ChartBuilder::on(&legend)
        .margin(15)
        .margin_top(50)
        .y_label_area_size(80)
        .build_cartesian_2d(0f64..1f64, 0f64..100f64)
        .map_err(render_err)?;
    bar.configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_labels(6)
        .y_label_style(("sans-serif", 14))
        .y_desc("Avg Occupancy (%)")
        .axis_desc_style(("sans-serif", 14))
        .draw()
        .map_err(render_err)?;
    bar.draw_series((0..100).map(|v| {
        let v = f64::from(v);
        Rectangle::new([(0.0, v), (1.0, v + 1.0)], heat_color(v + 0.5).filled())
    }))
    .map_err(render_err)?;

    root.present().map_err(render_err)?;
    info!("Rendered heatmap to {}", path.display());
    Ok(())
}

pub fn render_all(series: &[Sample], path: &Path) -> Result<()> {
    let Some(first) = series.first().map(|s| s.timestamp) else {
        return Err(Error::Render(s!("no samples to plot")));
    };
    ensure_parent(path)?;

    let days_since = |ts: NaiveDateTime| (ts - first).num_milliseconds() as f64 / 86_400_000.0;
    let points: Vec<(f64, f64)> = series
        .iter()
        .map(|s| (days_since(s.timestamp), f64::from(s.occupancy)))
        .collect();
    // A lone sample still gets an hour of axis.
    let span = points.last().map(|p| p.0).unwrap_or(0.0).max(1.0 / 24.0);

    let root = BitMapBackend::new(path, (1600, 500)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{CHART_TITLE} - All Recorded Data"), ("sans-serif", 26))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(0f64..span, 0f64..100f64)
        .map_err(render_err)?;

    let date_label = |d: &f64| {
        TimeDelta::try_milliseconds((d * 86_400_000.0) as i64)
            .and_then(|delta| first.checked_add_signed(delta))
            .map(|ts| ts.format("%b %d %Y").to_string())
            .unwrap_or_default()
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(10)
        .x_label_formatter(&date_label)
        .y_labels(11)
        .y_desc("Occupancy (%)")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(points, STEEL_BLUE.mix(0.7).stroke_width(1)))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    info!("Rendered {} samples to {}", series.len(), path.display());
    Ok(())
}
