//! Day-group binning and the vertical temperature scale

use chrono::{DateTime, Local};

use crate::types::{HourSample, Result, SkycastError};

/// Character columns one plotted hour occupies
pub const HOUR_WIDTH: usize = 4;

/// Contiguous run of samples sharing one local calendar day
#[derive(Debug, Clone)]
pub struct DayGroup {
    /// First sample's instant, used for the day label
    pub date: DateTime<Local>,
    pub hours: Vec<HourSample>,
}

impl DayGroup {
    /// Columns this group spans in the chart
    pub fn span(&self) -> usize {
        self.hours.len() * HOUR_WIDTH
    }
}

/// Integer-bounded vertical axis range covering all consumed samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureScale {
    pub min: i32,
    pub max: i32,
}

impl TemperatureScale {
    /// Number of chart rows, bounds inclusive
    pub fn rows(&self) -> usize {
        (self.max - self.min + 1) as usize
    }
}

/// Samples bucketed into chronological day groups plus the derived scale
#[derive(Debug, Clone)]
pub struct ChartLayout {
    pub days: Vec<DayGroup>,
    pub scale: TemperatureScale,
}

impl ChartLayout {
    pub fn hour_count(&self) -> usize {
        self.days.iter().map(|d| d.hours.len()).sum()
    }
}

/// Bucket a chronological run of hourly samples into day groups.
///
/// At most `chart_cols / HOUR_WIDTH` samples are consumed, further capped by
/// the input length. A new group starts whenever a sample's local hour is 0
/// and the working group already has members; the first group may begin
/// mid-day. The scale is rounded away from the observed range (max up, min
/// down) so `min <= temperature <= max` holds for every consumed sample.
pub fn bin_hours(samples: &[HourSample], chart_cols: usize) -> Result<ChartLayout> {
    if samples.is_empty() {
        return Err(SkycastError::EmptyForecast);
    }

    let hour_count = (chart_cols / HOUR_WIDTH).min(samples.len());

    let mut days: Vec<DayGroup> = Vec::new();
    let mut current: Vec<HourSample> = Vec::new();
    let mut min_temp = f64::MAX;
    let mut max_temp = f64::MIN;

    for sample in &samples[..hour_count] {
        if sample.local_hour() == 0 && !current.is_empty() {
            days.push(close_group(current));
            current = Vec::new();
        }
        min_temp = min_temp.min(sample.temperature);
        max_temp = max_temp.max(sample.temperature);
        current.push(sample.clone());
    }
    if !current.is_empty() {
        days.push(close_group(current));
    }

    // zero consumable hours: a placeholder scale keeps the layout finite and
    // the zero-width canvas is rejected at allocation
    let scale = if days.is_empty() {
        TemperatureScale { min: 0, max: 0 }
    } else {
        TemperatureScale {
            min: min_temp.floor() as i32,
            max: max_temp.ceil() as i32,
        }
    };

    Ok(ChartLayout { days, scale })
}

fn close_group(hours: Vec<HourSample>) -> DayGroup {
    DayGroup {
        date: hours[0].time,
        hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    /// Build `count` consecutive hourly samples starting at the given local time
    fn hourly_run(
        start: DateTime<Local>,
        count: usize,
        temp: impl Fn(usize) -> f64,
    ) -> Vec<HourSample> {
        (0..count)
            .map(|i| HourSample {
                time: start + Duration::hours(i as i64),
                temperature: temp(i),
                feels_like: temp(i),
                precip_probability: 0.0,
                precip_type: None,
                cloud_cover: 0.0,
            })
            .collect()
    }

    #[test]
    fn test_empty_forecast_is_an_error() {
        assert!(matches!(
            bin_hours(&[], 96),
            Err(SkycastError::EmptyForecast)
        ));
    }

    #[test]
    fn test_splits_at_local_midnight() {
        // 26 hours starting at 22:00 -> day rolls over two hours in
        let start = Local.with_ymd_and_hms(2026, 3, 2, 22, 0, 0).unwrap();
        let samples = hourly_run(start, 26, |_| 10.0);

        let layout = bin_hours(&samples, 26 * HOUR_WIDTH).unwrap();
        assert_eq!(layout.days.len(), 2);
        assert_eq!(layout.days[0].hours.len(), 2);
        assert_eq!(layout.days[1].hours.len(), 24);
        assert_eq!(layout.hour_count(), 26);
    }

    #[test]
    fn test_group_dates_are_first_samples() {
        let start = Local.with_ymd_and_hms(2026, 3, 2, 22, 0, 0).unwrap();
        let samples = hourly_run(start, 4, |_| 10.0);

        let layout = bin_hours(&samples, 4 * HOUR_WIDTH).unwrap();
        assert_eq!(layout.days[0].date, start);
        assert_eq!(layout.days[1].date, start + Duration::hours(2));
    }

    #[test]
    fn test_concatenated_groups_reproduce_input_order() {
        let start = Local.with_ymd_and_hms(2026, 3, 2, 18, 0, 0).unwrap();
        let samples = hourly_run(start, 30, |i| i as f64);

        let layout = bin_hours(&samples, 30 * HOUR_WIDTH).unwrap();
        let flattened: Vec<&HourSample> =
            layout.days.iter().flat_map(|d| d.hours.iter()).collect();
        assert_eq!(flattened.len(), 30);
        for (sample, original) in flattened.iter().zip(samples.iter()) {
            assert_eq!(sample.time, original.time);
        }
    }

    #[test]
    fn test_truncates_to_available_columns() {
        let start = Local.with_ymd_and_hms(2026, 3, 2, 6, 0, 0).unwrap();
        let samples = hourly_run(start, 48, |_| 5.0);

        // 41 columns fit 10 full hours
        let layout = bin_hours(&samples, 41).unwrap();
        assert_eq!(layout.hour_count(), 10);
    }

    #[test]
    fn test_scale_rounds_away_from_range() {
        let start = Local.with_ymd_and_hms(2026, 3, 2, 6, 0, 0).unwrap();
        let samples = hourly_run(start, 3, |i| [3.2, 7.8, 5.0][i]);

        let layout = bin_hours(&samples, 3 * HOUR_WIDTH).unwrap();
        assert_eq!(layout.scale, TemperatureScale { min: 3, max: 8 });
        assert_eq!(layout.scale.rows(), 6);
    }

    #[test]
    fn test_scale_contains_every_sample() {
        let start = Local.with_ymd_and_hms(2026, 3, 2, 6, 0, 0).unwrap();
        let samples = hourly_run(start, 24, |i| -4.3 + 0.7 * i as f64);

        let layout = bin_hours(&samples, 24 * HOUR_WIDTH).unwrap();
        for sample in &samples {
            assert!(f64::from(layout.scale.min) <= sample.temperature);
            assert!(sample.temperature <= f64::from(layout.scale.max));
        }
    }

    #[test]
    fn test_negative_exact_bounds_stay_inclusive() {
        let start = Local.with_ymd_and_hms(2026, 3, 2, 6, 0, 0).unwrap();
        let samples = hourly_run(start, 2, |i| [-5.0, -1.0][i]);

        let layout = bin_hours(&samples, 2 * HOUR_WIDTH).unwrap();
        assert_eq!(layout.scale, TemperatureScale { min: -5, max: -1 });
        assert_eq!(layout.scale.rows(), 5);
    }
}
