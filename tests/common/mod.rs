#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};
use mars_weather::{
    cli::{Cli, DetailArg, RangeArg},
    domain::report::{PressureTrend, Report},
};
use serde_json::{Value, json};

pub fn report(sol: u32, terrestrial_date: &str) -> Report {
    Report {
        sol,
        terrestrial_date: terrestrial_date.to_string(),
        min_temp: "-80".to_string(),
        max_temp: "-18".to_string(),
        min_gts_temp: "-83".to_string(),
        max_gts_temp: "-5".to_string(),
        pressure: "830".to_string(),
        pressure_relative: PressureTrend::Normal,
        sunrise: "05:23".to_string(),
        sunset: "17:21".to_string(),
        atmo_opacity: "Sunny".to_string(),
        uv_irradiance: "Moderate".to_string(),
        season: "Month 3".to_string(),
    }
}

/// `count` reports, newest first, ending at sol 3821 / 2023-05-01.
pub fn reports(count: usize) -> Vec<Report> {
    let newest = NaiveDate::from_ymd_opt(2023, 5, 1).expect("valid fixed date");
    (0..count)
        .map(|offset| {
            let offset = u32::try_from(offset).expect("fixture count fits u32");
            let day = newest - Duration::days(i64::from(offset));
            report(3821 - offset, &day.format("%Y-%m-%d").to_string())
        })
        .collect()
}

/// A feed entry the way the rover API serves it: everything as strings.
pub fn feed_entry(sol: u32, terrestrial_date: &str, sunrise: &str, sunset: &str) -> Value {
    json!({
        "id": sol.to_string(),
        "terrestrial_date": terrestrial_date,
        "sol": sol.to_string(),
        "ls": "6",
        "season": "Month 1",
        "min_temp": "-80",
        "max_temp": "-18",
        "pressure": "830",
        "pressure_string": "Higher",
        "abs_humidity": "--",
        "wind_speed": "--",
        "wind_direction": "--",
        "atmo_opacity": "Sunny",
        "sunrise": sunrise,
        "sunset": sunset,
        "local_uv_irradiance_index": "Moderate",
        "min_gts_temp": "-83",
        "max_gts_temp": "-5"
    })
}

pub fn write_feed(dir: &Path, entries: Vec<Value>) -> PathBuf {
    let path = dir.join("feed.json");
    let payload = json!({ "descriptions": {}, "soles": entries });
    std::fs::write(&path, payload.to_string()).expect("write feed fixture");
    path
}

pub fn cli(feed: PathBuf) -> Cli {
    Cli {
        feed,
        detail: DetailArg::Temperature,
        range: RangeArg::All,
        no_air_temp: false,
        ground_temp: false,
        no_sunrise: false,
        sunset: false,
        ascii_icons: true,
        emoji_icons: false,
        list: false,
        sol: None,
        points: 10,
    }
}
