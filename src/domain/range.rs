use std::fmt;

use super::{error::ReportError, report::Report};

/// How far back a detail screen looks. Reports are ordered newest first, so
/// every range is a prefix of the loaded sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    #[default]
    ThreeMonth,
    SixMonth,
    Year,
    TwoYear,
    All,
}

impl TimeRange {
    pub const ALL: [Self; 5] = [
        Self::ThreeMonth,
        Self::SixMonth,
        Self::Year,
        Self::TwoYear,
        Self::All,
    ];

    #[must_use]
    pub fn prefix_len(self) -> Option<usize> {
        match self {
            Self::ThreeMonth => Some(90),
            Self::SixMonth => Some(180),
            Self::Year => Some(365),
            Self::TwoYear => Some(730),
            Self::All => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ThreeMonth => "3 Months",
            Self::SixMonth => "6 Months",
            Self::Year => "1 Year",
            Self::TwoYear => "2 Years",
            Self::All => "All",
        }
    }

    /// Ranges that `select` can satisfy for `len` loaded reports.
    #[must_use]
    pub fn available(len: usize) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|range| range.prefix_len().is_none_or(|required| required <= len))
            .collect()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn select(reports: &[Report], range: TimeRange) -> Result<&[Report], ReportError> {
    let Some(required) = range.prefix_len() else {
        return Ok(reports);
    };
    reports.get(..required).ok_or(ReportError::OutOfRange {
        range,
        required,
        available: reports.len(),
    })
}
