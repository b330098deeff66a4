use std::{cmp::Reverse, fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::report::Report;

// Entries stay raw until each is decoded on its own, so one bad report
// cannot take down the whole feed.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeedPayload {
    Wrapped { soles: Vec<Value> },
    Bare(Vec<Value>),
}

pub fn load_feed(path: &Path) -> Result<Vec<Report>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading weather feed {} failed", path.display()))?;
    parse_feed(&content).with_context(|| format!("loading weather feed {}", path.display()))
}

/// Parses a feed and orders it newest first, one report per sol.
pub fn parse_feed(content: &str) -> Result<Vec<Report>> {
    let payload: FeedPayload =
        serde_json::from_str(content).context("failed to parse weather feed payload")?;
    let entries = match payload {
        FeedPayload::Wrapped { soles } => soles,
        FeedPayload::Bare(entries) => entries,
    };
    let mut reports: Vec<Report> = entries.into_iter().filter_map(decode_entry).collect();

    let received = reports.len();
    reports.sort_by_key(|report| Reverse(report.sol));
    reports.dedup_by_key(|report| report.sol);
    if reports.len() < received {
        log::warn!("dropped {} duplicate sol reports", received - reports.len());
    }
    log::info!("loaded {} reports", reports.len());

    Ok(reports)
}

fn decode_entry(entry: Value) -> Option<Report> {
    let sol = entry.get("sol").map_or_else(|| "?".to_string(), Value::to_string);
    match serde_json::from_value(entry) {
        Ok(report) => Some(report),
        Err(err) => {
            log::warn!("skipping report for sol {sol}: {err}");
            None
        }
    }
}
