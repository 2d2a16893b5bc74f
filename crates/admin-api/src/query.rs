//! Query envelopes and the conversion from parameters to wire requests.
//!
//! Every request body is `{"type": <tag>, "version"?: <int>, "args": {...}}`.
//! The builder functions here are the single place where parameters become
//! envelopes; they perform no I/O, so the exact bytes a client would send can
//! be checked without a transport.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::identifiers::{EventId, TriggerName};
use crate::params::{
    CreateCronTriggerParams, CreateEventTriggerParams, CreateScheduledEventParams,
    InvokeEventTriggerParams, RunSqlParams, SetTableCustomFieldsParams, SetTableIsEnumParams,
    TrackTableParams, TrackTableV2Params, UntrackTableParams,
};
use crate::types::{EventHeader, EventPayload, RetryConfig};

/// Operation tag carried in the envelope's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    CreateCronTrigger,
    DeleteCronTrigger,
    CreateScheduledEvent,
    CreateEventTrigger,
    DeleteEventTrigger,
    RedeliverEvent,
    InvokeEventTrigger,
    RunSql,
    TrackTable,
    SetTableIsEnum,
    SetTableCustomFields,
    UntrackTable,
}

impl QueryType {
    /// Returns the tag exactly as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateCronTrigger => "create_cron_trigger",
            Self::DeleteCronTrigger => "delete_cron_trigger",
            Self::CreateScheduledEvent => "create_scheduled_event",
            Self::CreateEventTrigger => "create_event_trigger",
            Self::DeleteEventTrigger => "delete_event_trigger",
            Self::RedeliverEvent => "redeliver_event",
            Self::InvokeEventTrigger => "invoke_event_trigger",
            Self::RunSql => "run_sql",
            Self::TrackTable => "track_table",
            Self::SetTableIsEnum => "set_table_is_enum",
            Self::SetTableCustomFields => "set_table_custom_fields",
            Self::UntrackTable => "untrack_table",
        }
    }
}

impl std::fmt::Display for QueryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// The JSON body POSTed to the query endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryEnvelope<A> {
    #[serde(rename = "type")]
    pub kind: QueryType,
    /// Query API version. Omitted from the body when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    pub args: A,
}

impl<A> QueryEnvelope<A> {
    /// An envelope with no `version` field.
    pub fn v1(kind: QueryType, args: A) -> Self {
        Self {
            kind,
            version: None,
            args,
        }
    }

    /// An envelope carrying `"version": 2`.
    pub fn v2(kind: QueryType, args: A) -> Self {
        Self {
            kind,
            version: Some(2),
            args,
        }
    }
}

impl<A: Serialize> QueryEnvelope<A> {
    /// Serializes the envelope into the JSON value handed to the transport.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

// ---------------------------------------------------------------------------
// Argument shapes that differ from their parameter structs
// ---------------------------------------------------------------------------

/// `args` of `create_cron_trigger`, with the boolean defaults already applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CronTriggerArgs<'a> {
    pub name: &'a TriggerName,
    pub webhook: &'a str,
    pub schedule: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<&'a EventPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<&'a [EventHeader]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_conf: Option<&'a RetryConfig>,
    pub include_in_metadata: bool,
    pub replace: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<&'a str>,
}

/// `args` of operations addressed by trigger name alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameArgs<'a> {
    pub name: &'a TriggerName,
}

/// `args` of `redeliver_event`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventIdArgs<'a> {
    pub event_id: &'a EventId,
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Checks the one local precondition on event trigger creation: a webhook URL
/// or an environment-variable reference to one must be supplied.
///
/// An empty string counts as not supplied.
pub fn validate_event_trigger(params: &CreateEventTriggerParams) -> Result<(), ValidationError> {
    let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
    if present(&params.webhook) || present(&params.webhook_from_env) {
        Ok(())
    } else {
        Err(ValidationError::MissingWebhook)
    }
}

/// `create_cron_trigger`; `include_in_metadata` and `replace` default to `false`.
pub fn create_cron_trigger(params: &CreateCronTriggerParams) -> QueryEnvelope<CronTriggerArgs<'_>> {
    QueryEnvelope::v1(
        QueryType::CreateCronTrigger,
        CronTriggerArgs {
            name: &params.name,
            webhook: &params.webhook,
            schedule: &params.schedule,
            payload: params.payload.as_ref(),
            headers: params.headers.as_deref(),
            retry_conf: params.retry_config.as_ref(),
            include_in_metadata: params.include_in_metadata.unwrap_or(false),
            replace: params.replace.unwrap_or(false),
            comment: params.comment.as_deref(),
        },
    )
}

/// `delete_cron_trigger` addressed by name.
pub fn delete_cron_trigger(name: &TriggerName) -> QueryEnvelope<NameArgs<'_>> {
    QueryEnvelope::v1(QueryType::DeleteCronTrigger, NameArgs { name })
}

/// `create_scheduled_event`; arguments are the parameters as given.
pub fn create_scheduled_event(
    params: &CreateScheduledEventParams,
) -> QueryEnvelope<&CreateScheduledEventParams> {
    QueryEnvelope::v1(QueryType::CreateScheduledEvent, params)
}

/// `create_event_trigger`; fails with [`ValidationError::MissingWebhook`]
/// when [`validate_event_trigger`] does.
pub fn create_event_trigger(
    params: &CreateEventTriggerParams,
) -> Result<QueryEnvelope<&CreateEventTriggerParams>, ValidationError> {
    validate_event_trigger(params)?;
    Ok(QueryEnvelope::v1(QueryType::CreateEventTrigger, params))
}

/// `delete_event_trigger` addressed by name.
pub fn delete_event_trigger(name: &TriggerName) -> QueryEnvelope<NameArgs<'_>> {
    QueryEnvelope::v1(QueryType::DeleteEventTrigger, NameArgs { name })
}

/// `redeliver_event` for one event id.
pub fn redeliver_event(event_id: &EventId) -> QueryEnvelope<EventIdArgs<'_>> {
    QueryEnvelope::v1(QueryType::RedeliverEvent, EventIdArgs { event_id })
}

/// `invoke_event_trigger` with a custom payload.
pub fn invoke_event_trigger(
    params: &InvokeEventTriggerParams,
) -> QueryEnvelope<&InvokeEventTriggerParams> {
    QueryEnvelope::v1(QueryType::InvokeEventTrigger, params)
}

/// `run_sql`; the SQL text is sent uninspected.
pub fn run_sql(params: &RunSqlParams) -> QueryEnvelope<&RunSqlParams> {
    QueryEnvelope::v1(QueryType::RunSql, params)
}

/// `track_table` without a `version` field.
pub fn track_table(params: &TrackTableParams) -> QueryEnvelope<&TrackTableParams> {
    QueryEnvelope::v1(QueryType::TrackTable, params)
}

/// `track_table` with `"version": 2`.
pub fn track_table_v2(params: &TrackTableV2Params) -> QueryEnvelope<&TrackTableV2Params> {
    QueryEnvelope::v2(QueryType::TrackTable, params)
}

/// `set_table_is_enum`.
pub fn set_table_is_enum(params: &SetTableIsEnumParams) -> QueryEnvelope<&SetTableIsEnumParams> {
    QueryEnvelope::v1(QueryType::SetTableIsEnum, params)
}

/// `set_table_custom_fields` with `"version": 2`.
pub fn set_table_custom_fields(
    params: &SetTableCustomFieldsParams,
) -> QueryEnvelope<&SetTableCustomFieldsParams> {
    QueryEnvelope::v2(QueryType::SetTableCustomFields, params)
}

/// `untrack_table`; `cascade` is passed through.
pub fn untrack_table(params: &UntrackTableParams) -> QueryEnvelope<&UntrackTableParams> {
    QueryEnvelope::v1(QueryType::UntrackTable, params)
}
