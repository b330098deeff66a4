#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::domain::{detail::WeatherDetailKind, range::TimeRange};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum DetailArg {
    Temperature,
    Daylight,
    Conditions,
    Pressure,
    Irradiance,
}

impl From<DetailArg> for WeatherDetailKind {
    fn from(arg: DetailArg) -> Self {
        match arg {
            DetailArg::Temperature => Self::Temperature,
            DetailArg::Daylight => Self::Daylight,
            DetailArg::Conditions => Self::Conditions,
            DetailArg::Pressure => Self::Pressure,
            DetailArg::Irradiance => Self::Irradiance,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RangeArg {
    ThreeMonth,
    SixMonth,
    Year,
    TwoYear,
    All,
}

impl From<RangeArg> for TimeRange {
    fn from(arg: RangeArg) -> Self {
        match arg {
            RangeArg::ThreeMonth => Self::ThreeMonth,
            RangeArg::SixMonth => Self::SixMonth,
            RangeArg::Year => Self::Year,
            RangeArg::TwoYear => Self::TwoYear,
            RangeArg::All => Self::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Unicode,
    Ascii,
    Emoji,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "mars-weather",
    version,
    about = "Chart series and summaries for Mars rover weather reports"
)]
pub struct Cli {
    /// Weather feed JSON (`{"soles": [...]}` or a bare array)
    pub feed: PathBuf,

    /// Detail screen to render
    #[arg(long, value_enum, default_value_t = DetailArg::Temperature)]
    pub detail: DetailArg,

    /// Time range, counted back from the newest report
    #[arg(long, value_enum, default_value_t = RangeArg::ThreeMonth)]
    pub range: RangeArg,

    /// Hide air temperature series
    #[arg(long)]
    pub no_air_temp: bool,

    /// Show ground temperature series
    #[arg(long)]
    pub ground_temp: bool,

    /// Hide sunrise series
    #[arg(long)]
    pub no_sunrise: bool,

    /// Show sunset series
    #[arg(long)]
    pub sunset: bool,

    /// Force ASCII icons
    #[arg(long, conflicts_with = "emoji_icons")]
    pub ascii_icons: bool,

    /// Force emoji icons
    #[arg(long)]
    pub emoji_icons: bool,

    /// Print the report list instead of a detail screen
    #[arg(long)]
    pub list: bool,

    /// Print the single-report view for this sol
    #[arg(long, conflicts_with = "list")]
    pub sol: Option<u32>,

    /// Chart points to print
    #[arg(long, default_value_t = 10)]
    pub points: usize,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.no_air_temp && !self.ground_temp {
            anyhow::bail!("--no-air-temp requires --ground-temp");
        }
        if self.no_sunrise && !self.sunset {
            anyhow::bail!("--no-sunrise requires --sunset");
        }
        Ok(())
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else if self.emoji_icons {
            IconMode::Emoji
        } else {
            IconMode::Unicode
        }
    }
}
