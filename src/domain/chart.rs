use chrono::{NaiveDate, NaiveTime, Timelike};

use super::{
    detail::WeatherDetailKind,
    error::ReportError,
    report::{Report, UvIrradiance},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    MaxAirTemp,
    MinAirTemp,
    MaxGroundTemp,
    MinGroundTemp,
    Sunrise,
    Sunset,
    Pressure,
    Irradiance,
    Conditions,
}

impl SeriesKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MaxAirTemp => "Max Air Temp",
            Self::MinAirTemp => "Min Air Temp",
            Self::MaxGroundTemp => "Max Ground Temp",
            Self::MinGroundTemp => "Min Ground Temp",
            Self::Sunrise => "Sunrise",
            Self::Sunset => "Sunset",
            Self::Pressure => "Pressure",
            Self::Irradiance => "UV Index",
            Self::Conditions => "Conditions",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartValue {
    Degrees(i32),
    Pascals(i32),
    Time(NaiveTime),
    Uv(UvIrradiance),
    Condition(String),
}

impl ChartValue {
    /// Numeric y coordinate; times of day plot as minutes since midnight.
    #[must_use]
    pub fn plot_value(&self) -> f64 {
        match self {
            Self::Degrees(value) | Self::Pascals(value) => f64::from(*value),
            Self::Time(time) => f64::from(time.hour() * 60 + time.minute()),
            Self::Uv(uv) => f64::from(uv.level()),
            Self::Condition(_) => 0.0,
        }
    }

    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Degrees(value) => format!("{value} °C"),
            Self::Pascals(value) => format!("{value} Pa"),
            Self::Time(time) => time.format("%H:%M").to_string(),
            Self::Uv(uv) => uv.label().to_string(),
            Self::Condition(label) => label.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x_axis: NaiveDate,
    pub y_axis: ChartValue,
    pub series: SeriesKind,
}

impl ChartPoint {
    fn new(x_axis: NaiveDate, y_axis: ChartValue, series: SeriesKind) -> Self {
        Self {
            x_axis,
            y_axis,
            series,
        }
    }
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesToggles {
    pub air_temp: bool,
    pub ground_temp: bool,
    pub sunrise: bool,
    pub sunset: bool,
}

impl Default for SeriesToggles {
    fn default() -> Self {
        Self {
            air_temp: true,
            ground_temp: false,
            sunrise: true,
            sunset: false,
        }
    }
}

#[must_use]
pub fn build_temperature_series(
    reports: &[Report],
    show_air: bool,
    show_ground: bool,
) -> Vec<ChartPoint> {
    let mut points = Vec::new();
    for report in reports {
        let Some(date) = report_date(report) else {
            continue;
        };
        if show_air {
            push_pair(
                &mut points,
                date,
                report.air_temps(),
                (SeriesKind::MaxAirTemp, SeriesKind::MinAirTemp),
            );
        }
        if show_ground {
            push_pair(
                &mut points,
                date,
                report.ground_temps(),
                (SeriesKind::MaxGroundTemp, SeriesKind::MinGroundTemp),
            );
        }
    }
    points
}

#[must_use]
pub fn build_daylight_series(
    reports: &[Report],
    show_sunrise: bool,
    show_sunset: bool,
) -> Vec<ChartPoint> {
    let mut points = Vec::new();
    for report in reports {
        let Some(date) = report_date(report) else {
            continue;
        };
        if show_sunrise {
            push_time(&mut points, date, report.sunrise_time(), SeriesKind::Sunrise);
        }
        if show_sunset {
            push_time(&mut points, date, report.sunset_time(), SeriesKind::Sunset);
        }
    }
    points
}

#[must_use]
pub fn build_pressure_series(reports: &[Report]) -> Vec<ChartPoint> {
    reports
        .iter()
        .filter_map(|report| {
            let date = report_date(report)?;
            let pascals = skip_logged(report.sol, report.pressure_pa())?;
            Some(ChartPoint::new(
                date,
                ChartValue::Pascals(pascals),
                SeriesKind::Pressure,
            ))
        })
        .collect()
}

#[must_use]
pub fn build_irradiance_series(reports: &[Report]) -> Vec<ChartPoint> {
    reports
        .iter()
        .filter_map(|report| {
            let date = report_date(report)?;
            let uv = skip_logged(report.sol, report.uv_index())?;
            Some(ChartPoint::new(
                date,
                ChartValue::Uv(uv),
                SeriesKind::Irradiance,
            ))
        })
        .collect()
}

#[must_use]
pub fn build_conditions_series(reports: &[Report]) -> Vec<ChartPoint> {
    reports
        .iter()
        .filter(|report| is_reported(&report.atmo_opacity))
        .filter_map(|report| {
            let date = report_date(report)?;
            Some(ChartPoint::new(
                date,
                ChartValue::Condition(report.atmo_opacity.trim().to_string()),
                SeriesKind::Conditions,
            ))
        })
        .collect()
}

#[must_use]
pub fn build_series(
    kind: WeatherDetailKind,
    reports: &[Report],
    toggles: SeriesToggles,
) -> Vec<ChartPoint> {
    match kind {
        WeatherDetailKind::Temperature => {
            build_temperature_series(reports, toggles.air_temp, toggles.ground_temp)
        }
        WeatherDetailKind::Daylight => {
            build_daylight_series(reports, toggles.sunrise, toggles.sunset)
        }
        WeatherDetailKind::Conditions => build_conditions_series(reports),
        WeatherDetailKind::Pressure => build_pressure_series(reports),
        WeatherDetailKind::Irradiance => build_irradiance_series(reports),
    }
}

fn report_date(report: &Report) -> Option<NaiveDate> {
    skip_logged(report.sol, report.date())
}

pub(super) fn skip_logged<T>(sol: u32, parsed: Result<T, ReportError>) -> Option<T> {
    match parsed {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("sol {sol}: {err}; skipping");
            None
        }
    }
}

fn push_pair(
    points: &mut Vec<ChartPoint>,
    date: NaiveDate,
    temps: Result<(i32, i32), ReportError>,
    (max_kind, min_kind): (SeriesKind, SeriesKind),
) {
    // Both readings or neither.
    if let Ok((max, min)) = temps {
        points.push(ChartPoint::new(date, ChartValue::Degrees(max), max_kind));
        points.push(ChartPoint::new(date, ChartValue::Degrees(min), min_kind));
    }
}

fn push_time(
    points: &mut Vec<ChartPoint>,
    date: NaiveDate,
    time: Result<NaiveTime, ReportError>,
    series: SeriesKind,
) {
    match time {
        Ok(time) => points.push(ChartPoint::new(date, ChartValue::Time(time), series)),
        Err(err) => log::debug!("{date}: {err}; no {} point", series.label()),
    }
}

fn is_reported(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != "--"
}
