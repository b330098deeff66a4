pub mod chart;
pub mod detail;
pub mod error;
pub mod parse;
pub mod range;
pub mod report;
pub mod summary;
