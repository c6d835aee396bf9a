//! Community alert records and their storage slot.
//!
//! The whole alert list lives JSON-encoded under one key; reads and writes
//! are wholesale, with no merge or partial-write semantics. There is exactly
//! one writer (the local user), so last-writer-wins is acceptable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{KeyValueStore, StorageError};
use crate::errors::AppError;

/// Severity of a community flood alert.
///
/// Closed set. The field defaults to `Low` when absent from stored data, and
/// unrecognized stored values also decode as `Low` rather than invalidating
/// the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl Severity {
    /// Parse a form/select value. Unknown values fall back to `Low`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "" | "low" => Severity::Low,
            "medium" => Severity::Medium,
            "high" => Severity::High,
            other => {
                tracing::warn!("Unknown alert severity '{}', using low", other);
                Severity::Low
            }
        }
    }

    /// CSS class the alert renderer tags the block with.
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

fn severity_lenient<'de, D>(deserializer: D) -> Result<Severity, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(Severity::from_value(&raw))
}

/// One user-submitted flood alert.
///
/// Records are immutable once created; the stored collection only ever grows
/// by appending or is cleared wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub title: String,
    pub desc: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "severity_lenient")]
    pub severity: Severity,
    /// Creation instant; drives display order (newest first).
    pub ts: DateTime<Utc>,
}

/// Reads and writes the ordered alert list in a single storage slot.
///
/// Storage order is oldest first; the renderer reverses it for display.
#[derive(Debug)]
pub struct AlertStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> AlertStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Load the stored list, oldest first.
    ///
    /// An absent slot or an undecodable payload yields an empty list; corrupt
    /// data is logged and never surfaced to the caller.
    pub fn load(&self) -> Vec<AlertRecord> {
        let raw = match self.store.get(&self.key) {
            Some(raw) => raw,
            None => return Vec::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(e) => {
                tracing::error!("Failed to parse stored alerts: {}", e);
                Vec::new()
            }
        }
    }

    /// Serialize `list` and overwrite the slot wholesale.
    pub fn save(&mut self, list: &[AlertRecord]) -> Result<(), AppError> {
        let encoded = serde_json::to_string(list).map_err(StorageError::from)?;
        self.store.set(&self.key, &encoded)?;
        Ok(())
    }

    /// Append one record to the stored list.
    pub fn append(&mut self, record: AlertRecord) -> Result<(), AppError> {
        let mut list = self.load();
        list.push(record);
        self.save(&list)
    }

    /// Remove the slot entirely. Asking the user first is the caller's job.
    pub fn clear(&mut self) {
        self.store.remove(&self.key);
    }
}
