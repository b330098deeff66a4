use chrono::{Duration, NaiveDate, NaiveTime};

use crate::domain::report::{PressureTrend, Report};

pub(crate) fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid date fixture")
}

pub(crate) fn time(value: &str) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M").expect("valid time fixture")
}

pub(crate) fn sample_report(sol: u32, terrestrial_date: &str) -> Report {
    Report {
        sol,
        terrestrial_date: terrestrial_date.to_string(),
        min_temp: "-80".to_string(),
        max_temp: "-18".to_string(),
        min_gts_temp: "-83".to_string(),
        max_gts_temp: "-5".to_string(),
        pressure: "830".to_string(),
        pressure_relative: PressureTrend::Higher,
        sunrise: "05:23".to_string(),
        sunset: "17:21".to_string(),
        atmo_opacity: "Sunny".to_string(),
        uv_irradiance: "Moderate".to_string(),
        season: "Month 3".to_string(),
    }
}

pub(crate) fn air_report(sol: u32, terrestrial_date: &str, min: &str, max: &str) -> Report {
    let mut report = sample_report(sol, terrestrial_date);
    report.min_temp = min.to_string();
    report.max_temp = max.to_string();
    report
}

pub(crate) fn daylight_report(sol: u32, sunrise: &str, sunset: &str) -> Report {
    let mut report = sample_report(sol, "2023-05-01");
    report.sunrise = sunrise.to_string();
    report.sunset = sunset.to_string();
    report
}

/// `count` consecutive reports, newest first, ending at sol 3821 / 2023-05-01.
pub(crate) fn sample_reports(count: usize) -> Vec<Report> {
    let newest = date("2023-05-01");
    (0..count)
        .map(|offset| {
            let offset = u32::try_from(offset).expect("fixture count fits u32");
            let day = newest - Duration::days(i64::from(offset));
            sample_report(3821 - offset, &day.format("%Y-%m-%d").to_string())
        })
        .collect()
}
