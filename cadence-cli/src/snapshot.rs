//! Snapshot files: JSON exports of one creator's records, or an agency
//! roster. The API layer produces these; here we only read them.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cadence_core::{Company, DailyGoal, Event, Task};
use serde::Deserialize;

/// One creator's records. Missing sections default to empty.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub events: Vec<Event>,
    pub goals: Vec<DailyGoal>,
    pub companies: Vec<Company>,
}

/// One agency roster entry. Health status is derived locally, so the
/// export only carries raw records.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub events: Vec<Event>,
}

pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing snapshot {}", path.display()))
}

pub fn load_roster(path: &Path) -> Result<Vec<RosterEntry>> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading roster {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing roster {}", path.display()))
}
