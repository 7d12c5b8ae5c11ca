//! JSON input/output helpers for the command-line tool.

use crate::batch::Event;
use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk form of an event.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EventRecord {
    pub center: [f64; 2],
    pub points: Vec<[f64; 3]>,
}

impl From<EventRecord> for Event {
    fn from(rec: EventRecord) -> Self {
        Event {
            center: Point2::new(rec.center[0], rec.center[1]),
            points: rec
                .points
                .into_iter()
                .map(|[x, y, z]| Point3::new(x, y, z))
                .collect(),
        }
    }
}

/// Parses a JSON array of events.
pub fn parse_events(json: &str) -> Result<Vec<Event>, String> {
    let records: Vec<EventRecord> =
        serde_json::from_str(json).map_err(|e| format!("Failed to parse events: {e}"))?;
    Ok(records.into_iter().map(Event::from).collect())
}

pub fn load_events(path: &Path) -> Result<Vec<Event>, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read events {}: {e}", path.display()))?;
    parse_events(&data).map_err(|e| format!("{e} ({})", path.display()))
}

pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
