#![allow(clippy::cast_precision_loss)]

use super::{
    chart::{ChartPoint, ChartValue, SeriesToggles, build_temperature_series, skip_logged},
    detail::WeatherDetailKind,
    report::Report,
};

/// Shown instead of an average when nothing contributed to it.
pub const NO_DATA: &str = "No data";

#[must_use]
pub fn summarize(kind: WeatherDetailKind, reports: &[Report], toggles: SeriesToggles) -> String {
    match kind {
        WeatherDetailKind::Temperature => {
            let points = build_temperature_series(reports, toggles.air_temp, toggles.ground_temp);
            average_temperature(&points)
                .map_or_else(|| NO_DATA.to_string(), |avg| format!("{avg:.1} °C"))
        }
        WeatherDetailKind::Daylight => average_daylight_minutes(reports)
            .map_or_else(|| NO_DATA.to_string(), format_minutes),
        WeatherDetailKind::Conditions => "Conditions Summary".to_string(),
        WeatherDetailKind::Pressure => "Pressure Summary".to_string(),
        WeatherDetailKind::Irradiance => "Irradiance Summary".to_string(),
    }
}

/// Mean of every degree value in `points`, max and min series alike.
#[must_use]
pub fn average_temperature(points: &[ChartPoint]) -> Option<f64> {
    let (total, count) = points
        .iter()
        .filter_map(|point| match point.y_axis {
            ChartValue::Degrees(value) => Some(i64::from(value)),
            _ => None,
        })
        .fold((0_i64, 0_usize), |(total, count), value| {
            (total + value, count + 1)
        });
    (count > 0).then(|| total as f64 / count as f64)
}

/// Whole minutes from sunrise to sunset, `None` when either time is
/// unreadable or the sun sets before it rises.
#[must_use]
pub fn daylight_minutes(report: &Report) -> Option<i64> {
    let sunrise = skip_logged(report.sol, report.sunrise_time())?;
    let sunset = skip_logged(report.sol, report.sunset_time())?;
    let minutes = sunset.signed_duration_since(sunrise).num_minutes();
    if minutes < 0 {
        log::debug!("sol {}: sunset precedes sunrise; skipping", report.sol);
        return None;
    }
    Some(minutes)
}

/// Sums whole minutes over the reports that have both times, then divides
/// once; the remainder is truncated.
#[must_use]
pub fn average_daylight_minutes(reports: &[Report]) -> Option<i64> {
    let (total, count) = reports
        .iter()
        .filter_map(daylight_minutes)
        .fold((0_i64, 0_i64), |(total, count), minutes| {
            (total + minutes, count + 1)
        });
    (count > 0).then(|| total / count)
}

#[must_use]
pub fn format_minutes(minutes: i64) -> String {
    let hours = minutes / 60;
    let minutes = minutes % 60;

    if hours < 1 {
        format!("{minutes} Minutes")
    } else if minutes == 0 {
        format!("{hours} Hours")
    } else {
        format!("{hours} Hours {minutes} Minutes")
    }
}

/// Lowest minimum and highest maximum air temperature across `reports`.
#[must_use]
pub fn temperature_extremes(reports: &[Report]) -> Option<(i32, i32)> {
    reports
        .iter()
        .filter_map(|report| report.air_temps().ok())
        .fold(None, |acc, (max, min)| match acc {
            None => Some((min, max)),
            Some((lowest, highest)) => Some((min.min(lowest), max.max(highest))),
        })
}
