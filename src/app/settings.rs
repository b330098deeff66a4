use crate::{
    cli::{Cli, IconMode},
    domain::{chart::SeriesToggles, detail::WeatherDetailKind, range::TimeRange},
};

/// Initial screen state, resolved from command-line defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    pub kind: WeatherDetailKind,
    pub range: TimeRange,
    pub toggles: SeriesToggles,
    pub icon_mode: IconMode,
    pub max_points: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            kind: WeatherDetailKind::Temperature,
            range: TimeRange::default(),
            toggles: SeriesToggles::default(),
            icon_mode: IconMode::Unicode,
            max_points: 10,
        }
    }
}

impl ViewSettings {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            kind: cli.detail.into(),
            range: cli.range.into(),
            toggles: SeriesToggles {
                air_temp: !cli.no_air_temp,
                ground_temp: cli.ground_temp,
                sunrise: !cli.no_sunrise,
                sunset: cli.sunset,
            },
            icon_mode: cli.icon_mode(),
            max_points: cli.points,
        }
    }
}
