use thiserror::Error;

use super::range::TimeRange;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("cannot parse {field} value {value:?}")]
    Parse { field: &'static str, value: String },

    #[error("{range} needs {required} reports but only {available} are loaded")]
    OutOfRange {
        range: TimeRange,
        required: usize,
        available: usize,
    },
}

impl ReportError {
    pub(crate) fn parse(field: &'static str, value: &str) -> Self {
        Self::Parse {
            field,
            value: value.to_string(),
        }
    }
}
