//! Decoded response bodies.
//!
//! These mirror what the remote service returns. The client never alters or
//! enriches them.

use serde::{Deserialize, Serialize};

use crate::identifiers::EventId;

/// Reply of operations that only acknowledge, e.g. `{"message": "success"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Returns `true` when the remote service reported `"success"`.
    pub fn is_success(&self) -> bool {
        self.message == "success"
    }
}

/// Reply of `create_scheduled_event`.
///
/// Current servers also return the id of the scheduled event; older ones send
/// only the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEventResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<EventId>,
}

impl ScheduledEventResponse {
    /// Returns `true` when the remote service reported `"success"`.
    pub fn is_success(&self) -> bool {
        self.message == "success"
    }
}

/// Reply of `invoke_event_trigger`: the id of the event that was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeEventTriggerResponse {
    pub event_id: EventId,
}

/// Reply of `run_sql`.
///
/// `result_type` is `"CommandOk"` for statements that return no rows (and then
/// `result` is absent or `null`), or `"TuplesOk"` when rows are returned. The
/// first row of a `TuplesOk` result holds the column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSqlResponse {
    pub result_type: String,
    #[serde(default)]
    pub result: Option<Vec<Vec<serde_json::Value>>>,
}

impl RunSqlResponse {
    pub const COMMAND_OK: &'static str = "CommandOk";
    pub const TUPLES_OK: &'static str = "TuplesOk";

    /// Returns `true` for statements that returned no rows.
    pub fn is_command_ok(&self) -> bool {
        self.result_type == Self::COMMAND_OK
    }

    /// Returns the result rows, an empty slice when there are none.
    pub fn rows(&self) -> &[Vec<serde_json::Value>] {
        self.result.as_deref().unwrap_or_default()
    }
}

/// HTTP status plus the decoded body.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T> AdminResponse<T> {
    /// Discards the status, keeping the body.
    pub fn into_data(self) -> T {
        self.data
    }
}
