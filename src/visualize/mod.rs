// src/visualize/mod.rs
//! Shaping the loaded series for each chart. Drawing lives in `render`.

pub mod render;

use chrono::{Datelike, NaiveDate, Timelike};

use crate::sample::Sample;

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
pub const HOURS: usize = 24;

/* ---------------- Single day ---------------- */

/// Samples that fall on one calendar date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DaySelection {
    pub date: NaiveDate,
    pub samples: Vec<Sample>,
}

impl DaySelection {
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
}

pub fn latest_date(series: &[Sample]) -> Option<NaiveDate> {
    series.iter().map(|s| s.timestamp.date()).max()
}

/// Filter to `target`, or to the most recent date present when `target` is
/// `None`. Returns `None` only when no date can be chosen (empty series).
pub fn select_day(series: &[Sample], target: Option<NaiveDate>) -> Option<DaySelection> {
    let date = target.or_else(|| latest_date(series))?;
    let samples = series
        .iter()
        .filter(|s| s.timestamp.date() == date)
        .copied()
        .collect();
    Some(DaySelection { date, samples })
}

/* ---------------- Weekday × hour heatmap ---------------- */

/// Mean occupancy per (weekday, hour). Rows are Monday-first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeatmapGrid {
    sums: [[u64; HOURS]; 7],
    counts: [[u32; HOURS]; 7],
}

impl HeatmapGrid {
    pub fn from_samples(series: &[Sample]) -> Self {
        let mut sums = [[0u64; HOURS]; 7];
        let mut counts = [[0u32; HOURS]; 7];
        for s in series {
            let day = s.timestamp.weekday().num_days_from_monday() as usize;
            let hour = s.timestamp.hour() as usize;
            sums[day][hour] += u64::from(s.occupancy);
            counts[day][hour] += 1;
        }
        Self { sums, counts }
    }

    /// Mean for the cell, `None` when no sample fell in it.
    pub fn cell(&self, weekday: usize, hour: usize) -> Option<f64> {
        let n = *self.counts.get(weekday)?.get(hour)?;
        if n == 0 {
            return None;
        }
        Some(self.sums[weekday][hour] as f64 / f64::from(n))
    }

    /// `(weekday, hour, mean)` for all 168 cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Option<f64>)> + '_ {
        (0..7).flat_map(move |d| (0..HOURS).map(move |h| (d, h, self.cell(d, h))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    fn sample(ts: NaiveDateTime, occ: u8) -> Sample { Sample::new(ts, occ) }

    #[test]
    fn default_day_is_latest_date() {
        let series = vec![
            sample(at(2021, 3, 24, 9, 0), 10),
            sample(at(2021, 3, 26, 9, 0), 30),
            sample(at(2021, 3, 26, 17, 30), 60),
            sample(at(2021, 3, 25, 9, 0), 20),
        ];
        let day = select_day(&series, None).unwrap();
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2021, 3, 26).unwrap());
        assert_eq!(day.samples.iter().map(|s| s.occupancy).collect::<Vec<_>>(), vec![30, 60]);
    }

    #[test]
    fn explicit_day_without_samples_is_empty() {
        let series = vec![sample(at(2021, 3, 24, 9, 0), 10)];
        let wanted = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let day = select_day(&series, Some(wanted)).unwrap();
        assert_eq!(day.date, wanted);
        assert!(day.is_empty());
    }

    #[test]
    fn empty_series_has_no_default_day() {
        assert_eq!(select_day(&[], None), None);
    }

    #[test]
    fn heatmap_averages_per_cell() {
        // 2021-03-22 is a Monday
        let series = vec![
            sample(at(2021, 3, 22, 10, 5), 20),
            sample(at(2021, 3, 29, 10, 55), 40),
            sample(at(2021, 3, 28, 23, 0), 0), // Sunday
        ];
        let grid = HeatmapGrid::from_samples(&series);
        assert_eq!(grid.cell(0, 10), Some(30.0));
        assert_eq!(grid.cell(6, 23), Some(0.0));
        assert_eq!(grid.cell(0, 11), None);
        assert_eq!(grid.cell(7, 0), None);
    }

    #[test]
    fn empty_cells_are_not_zero() {
        let grid = HeatmapGrid::from_samples(&[sample(at(2021, 3, 23, 6, 0), 0)]);
        let defined: Vec<_> = grid.cells().filter(|(_, _, v)| v.is_some()).collect();
        assert_eq!(defined, vec![(1, 6, Some(0.0))]);
        assert_eq!(grid.cells().count(), 7 * HOURS);
    }
}
