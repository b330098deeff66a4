use crate::cli::IconMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherDetailKind {
    Temperature,
    Daylight,
    Conditions,
    Pressure,
    Irradiance,
}

impl WeatherDetailKind {
    pub const ALL: [Self; 5] = [
        Self::Temperature,
        Self::Daylight,
        Self::Conditions,
        Self::Pressure,
        Self::Irradiance,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Daylight => "Daylight",
            Self::Conditions => "Conditions",
            Self::Pressure => "Pressure",
            Self::Irradiance => "Irradiance",
        }
    }

    #[must_use]
    pub fn summary_title(self) -> &'static str {
        match self {
            Self::Temperature => "Average Temperature",
            Self::Daylight => "Average Daylight Duration",
            Self::Conditions => "Percentage of Sunny Days",
            Self::Pressure => "Average Pressure",
            Self::Irradiance => "Most Frequent UV Index",
        }
    }

    #[must_use]
    pub fn icon(self, mode: IconMode) -> &'static str {
        let (ascii, emoji, unicode) = match self {
            Self::Temperature => ("TMP", "🌡️", "°"),
            Self::Daylight => ("SUN", "🌅", "☀"),
            Self::Conditions => ("CND", "⛅", "☁"),
            Self::Pressure => ("PRS", "⏲️", "◔"),
            Self::Irradiance => ("UV", "🔆", "✹"),
        };
        match mode {
            IconMode::Ascii => ascii,
            IconMode::Emoji => emoji,
            IconMode::Unicode => unicode,
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Temperature => {
                "Mars is farther from the Sun than Earth, which makes it colder than our planet. \
                 Its extremely tenuous atmosphere does not retain heat, so the difference between \
                 day and night temperatures is far more pronounced than on Earth."
            }
            Self::Daylight => {
                "A Martian day (sol) lasts about 24 hours and 40 minutes. The duration of \
                 daylight varies along the Martian year, as it does on Earth."
            }
            Self::Conditions => {
                "Weather on Mars is more extreme than on Earth: colder, with bigger swings \
                 between day and night, and dust storms that lash the surface. The two climates \
                 still share polar ice caps and seasonal change, and Mars has sunny, cloudy and \
                 windy days too."
            }
            Self::Pressure => {
                "Pressure measures the mass of the air column above the sensor. Surface pressure \
                 on Mars averages about 700 Pascals, roughly 160 times less than on Earth. \
                 Curiosity sits inside Gale crater, about 5 kilometers deep, so it usually \
                 measures more than the planetary average."
            }
            Self::Irradiance => {
                "The local ultraviolet irradiance index tracks the intensity of solar UV \
                 radiation at the rover. Mars has no ozone layer, so ultraviolet light that \
                 would be filtered on Earth reaches the Martian surface."
            }
        }
    }
}
