//! Parameter structs, one per administrative operation.
//!
//! Each struct serializes to the `args` object of its query envelope. Fields
//! left as `None` are omitted from the JSON entirely so that the remote service
//! applies its own default; they are never sent as `null`.
//!
//! The only operation with client-side defaults is cron trigger creation. Its
//! defaults are applied when the envelope is built (see
//! [`crate::query`]), so an unset flag stays distinguishable from an explicit
//! `false` until that point.

use serde::{Deserialize, Serialize};

use crate::identifiers::TriggerName;
use crate::types::{
    CustomColumnNames, CustomRootFields, EventHeader, EventPayload, OperationSpec, QualifiedTable,
    RetryConfig, TableConfiguration, TableRef, Timestamp,
};

// ---------------------------------------------------------------------------
// Scheduled triggers
// ---------------------------------------------------------------------------

/// Parameters for `create_cron_trigger`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCronTriggerParams {
    /// Name of the cron trigger.
    pub name: TriggerName,
    /// URL of the webhook.
    pub webhook: String,
    /// Cron expression at which the trigger is invoked (e.g. `"* * * * *"`).
    pub schedule: String,
    /// Any JSON payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<EventPayload>,
    /// Headers sent with the webhook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<EventHeader>>,
    /// Retry configuration if scheduled invocation delivery fails.
    #[serde(
        default,
        rename = "retry_conf",
        alias = "retry_config",
        skip_serializing_if = "Option::is_none"
    )]
    pub retry_config: Option<RetryConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Whether the trigger is included in exported metadata. Sent as `false` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_in_metadata: Option<bool>,
    /// Replace an existing cron trigger with the same name. Sent as `false` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace: Option<bool>,
}

impl CreateCronTriggerParams {
    /// Creates parameters with the required fields and every optional field unset.
    pub fn new(
        name: impl Into<TriggerName>,
        webhook: impl Into<String>,
        schedule: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            webhook: webhook.into(),
            schedule: schedule.into(),
            payload: None,
            headers: None,
            retry_config: None,
            comment: None,
            include_in_metadata: None,
            replace: None,
        }
    }

    /// Sets the JSON payload sent to the webhook.
    pub fn with_payload(mut self, payload: EventPayload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Sets the headers sent with the webhook.
    pub fn with_headers(mut self, headers: Vec<EventHeader>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Sets the delivery retry configuration.
    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = Some(retry_config);
        self
    }

    /// Attaches a free-form comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Sets whether the trigger is included in exported metadata.
    pub fn with_include_in_metadata(mut self, include: bool) -> Self {
        self.include_in_metadata = Some(include);
        self
    }

    /// Sets whether an existing definition with the same name is replaced.
    pub fn with_replace(mut self, replace: bool) -> Self {
        self.replace = Some(replace);
        self
    }
}

/// Parameters for `create_scheduled_event`: a one-off webhook invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateScheduledEventParams {
    /// URL of the webhook.
    pub webhook: String,
    /// When the invocation should happen.
    ///
    /// Sent in normalised RFC 3339 UTC form (`2999-12-31T14:00:00Z`), so a
    /// caller's `.000Z` or non-UTC offset is not reproduced verbatim.
    pub schedule_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<EventPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<EventHeader>>,
    #[serde(
        default,
        rename = "retry_conf",
        alias = "retry_config",
        skip_serializing_if = "Option::is_none"
    )]
    pub retry_config: Option<RetryConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CreateScheduledEventParams {
    /// Creates parameters for an invocation of `webhook` at `schedule_at`.
    pub fn new(webhook: impl Into<String>, schedule_at: Timestamp) -> Self {
        Self {
            webhook: webhook.into(),
            schedule_at,
            payload: None,
            headers: None,
            retry_config: None,
            comment: None,
        }
    }

    /// Sets the JSON payload sent to the webhook.
    pub fn with_payload(mut self, payload: EventPayload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Sets the headers sent with the webhook.
    pub fn with_headers(mut self, headers: Vec<EventHeader>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Sets the delivery retry configuration.
    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = Some(retry_config);
        self
    }

    /// Attaches a free-form comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Event triggers
// ---------------------------------------------------------------------------

/// Parameters for `create_event_trigger`.
///
/// At least one of `webhook` or `webhook_from_env` must be set; the client
/// rejects the call locally otherwise (see [`crate::validate_event_trigger`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEventTriggerParams {
    pub name: TriggerName,
    /// Table whose row changes fire the trigger.
    pub table: QualifiedTable,
    /// Literal webhook URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook: Option<String>,
    /// Environment variable on the remote service holding the webhook URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_from_env: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert: Option<OperationSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<OperationSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<OperationSpec>,
    /// Allow the trigger to be fired through `invoke_event_trigger`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_manual: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<EventHeader>>,
    #[serde(
        default,
        rename = "retry_conf",
        alias = "retry_config",
        skip_serializing_if = "Option::is_none"
    )]
    pub retry_config: Option<RetryConfig>,
    /// Replace an existing event trigger with the same name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace: Option<bool>,
}

impl CreateEventTriggerParams {
    /// Creates parameters with no webhook and no operations configured.
    ///
    /// Set a webhook with [`Self::with_webhook`] or
    /// [`Self::with_webhook_from_env`] before sending.
    pub fn new(name: impl Into<TriggerName>, table: QualifiedTable) -> Self {
        Self {
            name: name.into(),
            table,
            webhook: None,
            webhook_from_env: None,
            insert: None,
            update: None,
            delete: None,
            enable_manual: None,
            headers: None,
            retry_config: None,
            replace: None,
        }
    }

    /// Sets a literal webhook URL.
    pub fn with_webhook(mut self, webhook: impl Into<String>) -> Self {
        self.webhook = Some(webhook.into());
        self
    }

    /// Reads the webhook URL from an environment variable on the remote service.
    pub fn with_webhook_from_env(mut self, env_var: impl Into<String>) -> Self {
        self.webhook_from_env = Some(env_var.into());
        self
    }

    /// Fires the trigger on inserts.
    pub fn on_insert(mut self, spec: OperationSpec) -> Self {
        self.insert = Some(spec);
        self
    }

    /// Fires the trigger on updates to the given columns.
    pub fn on_update(mut self, spec: OperationSpec) -> Self {
        self.update = Some(spec);
        self
    }

    /// Fires the trigger on deletes.
    pub fn on_delete(mut self, spec: OperationSpec) -> Self {
        self.delete = Some(spec);
        self
    }

    /// Allows manual invocation through `invoke_event_trigger`.
    pub fn with_enable_manual(mut self, enable: bool) -> Self {
        self.enable_manual = Some(enable);
        self
    }

    /// Sets the headers sent with the webhook.
    pub fn with_headers(mut self, headers: Vec<EventHeader>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Sets the delivery retry configuration.
    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = Some(retry_config);
        self
    }

    /// Sets whether an existing definition with the same name is replaced.
    pub fn with_replace(mut self, replace: bool) -> Self {
        self.replace = Some(replace);
        self
    }
}

/// Parameters for `invoke_event_trigger`: fire a trigger manually with a custom payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokeEventTriggerParams {
    pub name: TriggerName,
    pub payload: EventPayload,
}

impl InvokeEventTriggerParams {
    /// Creates parameters invoking trigger `name` with `payload`.
    pub fn new(name: impl Into<TriggerName>, payload: EventPayload) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }
}

// ---------------------------------------------------------------------------
// SQL
// ---------------------------------------------------------------------------

/// Parameters for `run_sql`. The SQL text is not inspected locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSqlParams {
    pub sql: String,
    /// Cascade dependent metadata when the statement drops objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cascade: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_metadata_consistency: Option<bool>,
    /// Run the statement in a read-only transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

impl RunSqlParams {
    /// Creates parameters running `sql` with every flag unset.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            ..Self::default()
        }
    }

    /// Cascades to dependent objects.
    pub fn with_cascade(mut self, cascade: bool) -> Self {
        self.cascade = Some(cascade);
        self
    }

    /// Sets whether metadata consistency is checked after the statement.
    pub fn with_check_metadata_consistency(mut self, check: bool) -> Self {
        self.check_metadata_consistency = Some(check);
        self
    }

    /// Runs the statement in a read-only transaction.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = Some(read_only);
        self
    }
}

// ---------------------------------------------------------------------------
// Tables and views
// ---------------------------------------------------------------------------

/// Parameters for `track_table` (version 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackTableParams {
    pub table: TableRef,
    /// Track the table as an enum table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enum: Option<bool>,
}

impl TrackTableParams {
    /// Tracks `table`, which may be a bare name or schema-qualified.
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            table: table.into(),
            is_enum: None,
        }
    }

    /// Tracks the table as an enum table.
    pub fn with_is_enum(mut self, is_enum: bool) -> Self {
        self.is_enum = Some(is_enum);
        self
    }
}

/// Parameters for `track_table` version 2, which accepts a table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackTableV2Params {
    pub table: TableRef,
    pub configuration: TableConfiguration,
}

impl TrackTableV2Params {
    /// Tracks `table` with `configuration`.
    pub fn new(table: impl Into<TableRef>, configuration: TableConfiguration) -> Self {
        Self {
            table: table.into(),
            configuration,
        }
    }
}

/// Parameters for `set_table_is_enum`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetTableIsEnumParams {
    pub table: TableRef,
    pub is_enum: bool,
}

impl SetTableIsEnumParams {
    /// Marks `table` as an enum table, or unmarks it.
    pub fn new(table: impl Into<TableRef>, is_enum: bool) -> Self {
        Self {
            table: table.into(),
            is_enum,
        }
    }
}

/// Parameters for `set_table_custom_fields` (version 2).
///
/// Unset fields are omitted; the remote service treats an omitted field as
/// clearing the corresponding customisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetTableCustomFieldsParams {
    pub table: TableRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_root_fields: Option<CustomRootFields>,
    #[serde(default, alias = "custom_column_name", skip_serializing_if = "Option::is_none")]
    pub custom_column_names: Option<CustomColumnNames>,
}

impl SetTableCustomFieldsParams {
    /// Creates parameters with no customisations set.
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            table: table.into(),
            custom_root_fields: None,
            custom_column_names: None,
        }
    }

    /// Sets custom GraphQL root field names.
    pub fn with_custom_root_fields(mut self, fields: CustomRootFields) -> Self {
        self.custom_root_fields = Some(fields);
        self
    }

    /// Sets custom GraphQL names for columns.
    pub fn with_custom_column_names(mut self, names: CustomColumnNames) -> Self {
        self.custom_column_names = Some(names);
        self
    }
}

/// Parameters for `untrack_table`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UntrackTableParams {
    pub table: TableRef,
    /// Also drop metadata objects (relationships, permissions) that depend on the table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cascade: Option<bool>,
}

impl UntrackTableParams {
    /// Untracks `table` without cascading.
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            table: table.into(),
            cascade: None,
        }
    }

    /// Cascades to dependent objects.
    pub fn with_cascade(mut self, cascade: bool) -> Self {
        self.cascade = Some(cascade);
        self
    }
}
