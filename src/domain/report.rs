use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, de};

use super::{
    error::ReportError,
    parse::{parse_daylight_time, parse_fixed_date, parse_reading},
};
use crate::cli::IconMode;

/// One sol of rover weather. Readings stay as feed text; a missing or `null`
/// reading is stored as `"--"` and fails to parse later.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Report {
    #[serde(deserialize_with = "sol_from_feed")]
    pub sol: u32,
    pub terrestrial_date: String,
    #[serde(default = "missing", deserialize_with = "text_from_feed")]
    pub min_temp: String,
    #[serde(default = "missing", deserialize_with = "text_from_feed")]
    pub max_temp: String,
    #[serde(default = "missing", deserialize_with = "text_from_feed")]
    pub min_gts_temp: String,
    #[serde(default = "missing", deserialize_with = "text_from_feed")]
    pub max_gts_temp: String,
    #[serde(default = "missing", deserialize_with = "text_from_feed")]
    pub pressure: String,
    #[serde(rename = "pressure_string", default, deserialize_with = "trend_from_feed")]
    pub pressure_relative: PressureTrend,
    #[serde(default = "missing", deserialize_with = "label_from_feed")]
    pub sunrise: String,
    #[serde(default = "missing", deserialize_with = "label_from_feed")]
    pub sunset: String,
    #[serde(default = "missing", deserialize_with = "label_from_feed")]
    pub atmo_opacity: String,
    #[serde(
        rename = "local_uv_irradiance_index",
        default = "missing",
        deserialize_with = "label_from_feed"
    )]
    pub uv_irradiance: String,
    #[serde(default, deserialize_with = "season_from_feed")]
    pub season: String,
}

impl Report {
    pub fn date(&self) -> Result<NaiveDate, ReportError> {
        parse_fixed_date(&self.terrestrial_date)
    }

    /// `(max, min)` air temperature.
    pub fn air_temps(&self) -> Result<(i32, i32), ReportError> {
        Ok((
            parse_reading("max_temp", &self.max_temp)?,
            parse_reading("min_temp", &self.min_temp)?,
        ))
    }

    /// `(max, min)` ground temperature.
    pub fn ground_temps(&self) -> Result<(i32, i32), ReportError> {
        Ok((
            parse_reading("max_gts_temp", &self.max_gts_temp)?,
            parse_reading("min_gts_temp", &self.min_gts_temp)?,
        ))
    }

    pub fn pressure_pa(&self) -> Result<i32, ReportError> {
        parse_reading("pressure", &self.pressure)
    }

    pub fn sunrise_time(&self) -> Result<NaiveTime, ReportError> {
        parse_daylight_time(&self.sunrise)
    }

    pub fn sunset_time(&self) -> Result<NaiveTime, ReportError> {
        parse_daylight_time(&self.sunset)
    }

    pub fn uv_index(&self) -> Result<UvIrradiance, ReportError> {
        UvIrradiance::from_label(&self.uv_irradiance)
            .ok_or_else(|| ReportError::parse("local_uv_irradiance_index", &self.uv_irradiance))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressureTrend {
    Higher,
    Lower,
    #[default]
    Normal,
}

impl From<String> for PressureTrend {
    fn from(value: String) -> Self {
        match value.trim() {
            "Higher" => Self::Higher,
            "Lower" => Self::Lower,
            _ => Self::Normal,
        }
    }
}

impl PressureTrend {
    #[must_use]
    pub fn icon(self, mode: IconMode) -> &'static str {
        match (self, mode) {
            (Self::Higher, IconMode::Ascii) => "HI",
            (Self::Lower, IconMode::Ascii) => "LO",
            (Self::Normal, IconMode::Ascii) => "--",
            (Self::Higher, IconMode::Emoji) => "⬆️",
            (Self::Lower, IconMode::Emoji) => "⬇️",
            (Self::Normal, IconMode::Emoji) => "⏺️",
            (Self::Higher, IconMode::Unicode) => "▲",
            (Self::Lower, IconMode::Unicode) => "▼",
            (Self::Normal, IconMode::Unicode) => "●",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UvIrradiance {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvIrradiance {
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            "very_high" | "very high" => Some(Self::VeryHigh),
            "extreme" => Some(Self::Extreme),
            _ => None,
        }
    }

    #[must_use]
    pub fn level(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Moderate => 2,
            Self::High => 3,
            Self::VeryHigh => 4,
            Self::Extreme => 5,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Extreme => "Extreme",
        }
    }
}

fn missing() -> String {
    "--".to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FeedValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl FeedValue {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
        }
    }
}

fn text_from_feed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<FeedValue>::deserialize(deserializer)?.map_or_else(missing, FeedValue::into_text))
}

fn label_from_feed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(missing))
}

fn season_from_feed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn trend_from_feed<'de, D>(deserializer: D) -> Result<PressureTrend, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(PressureTrend::from)
        .unwrap_or_default())
}

fn sol_from_feed<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let text = FeedValue::deserialize(deserializer)?.into_text();
    text.trim()
        .parse::<u32>()
        .map_err(|_| de::Error::custom(format!("invalid sol {text:?}")))
}
