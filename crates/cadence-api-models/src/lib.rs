#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Cadence scheduling API.
//!
//! The settings console only consumes these resources; the server that owns
//! them lives elsewhere. Field names follow the wire contract (camelCase) so the
//! same types decode list responses and encode create/update bodies.

use serde::{Deserialize, Serialize};

/// Collection path for activity types.
pub const ACTIVITY_TYPES_PATH: &str = "/api/activity-types";
/// Collection path for time slots.
pub const TIME_SLOTS_PATH: &str = "/api/time-slots";

/// Server-assigned record identifier.
pub type RecordId = i64;

/// Build the item path for a record within a collection.
#[must_use]
pub fn item_path(collection: &str, id: RecordId) -> String {
    format!("{}/{id}", collection.trim_end_matches('/'))
}

/// Named, colored category assigned to scheduled entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityType {
    /// Server-assigned identifier.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Short unique code.
    pub code: String,
    /// Hex color used for badges and calendar entries.
    pub color: String,
}

/// Body for creating or updating an activity type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityTypeInput {
    /// Display name.
    pub name: String,
    /// Short unique code.
    pub code: String,
    /// Hex color.
    pub color: String,
}

impl From<&ActivityType> for ActivityTypeInput {
    fn from(value: &ActivityType) -> Self {
        Self {
            name: value.name.clone(),
            code: value.code.clone(),
            color: value.color.clone(),
        }
    }
}

/// Reusable start/end pair offered when building a schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Server-assigned identifier.
    pub id: RecordId,
    /// Start time, `HH:MM`.
    pub start_time: String,
    /// End time, `HH:MM`.
    pub end_time: String,
}

/// Body for creating a time slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotInput {
    /// Start time, `HH:MM`.
    pub start_time: String,
    /// End time, `HH:MM`.
    pub end_time: String,
}

/// RFC9457-compatible problem document returned by the API on failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type", default)]
    /// URI reference identifying the problem type.
    pub kind: String,
    /// Short, human-readable summary of the issue.
    pub title: String,
    /// HTTP status code associated with the error.
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Detailed diagnostic message when available.
    pub detail: Option<String>,
}

impl ProblemDetails {
    /// Most specific message carried by the document.
    #[must_use]
    pub fn message(&self) -> &str {
        self.detail
            .as_deref()
            .filter(|detail| !detail.trim().is_empty())
            .unwrap_or(&self.title)
    }
}
