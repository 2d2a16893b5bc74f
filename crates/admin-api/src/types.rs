//! Shared value types used across administrative operations.
//!
//! These are the building blocks of the parameter structs in
//! [`crate::params`]: table references, webhook headers, retry settings, and
//! the column selections that drive event triggers. All of them serialize to
//! the exact JSON the remote service expects, and optional fields are omitted
//! rather than sent as `null`.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Arbitrary JSON forwarded to a webhook when a trigger or event fires.
pub type EventPayload = serde_json::Value;

/// Mapping from database column name to the GraphQL field name exposed for it.
pub type CustomColumnNames = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// A database table or view identified by schema and name.
///
/// The remote service resolves the reference; no local existence check is made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedTable {
    /// Table or view name.
    pub name: String,
    /// Schema containing the table (e.g. `"public"`).
    pub schema: String,
}

impl QualifiedTable {
    /// Creates a reference to `schema.name`.
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
        }
    }

    /// Creates a reference to a table in the `public` schema.
    pub fn public(name: impl Into<String>) -> Self {
        Self::new("public", name)
    }
}

impl std::fmt::Display for QualifiedTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.schema, self.name)
    }
}

// ---------------------------------------------------------------------------

/// A table argument that may be given either as a bare name or fully qualified.
///
/// A bare name is sent as a JSON string and resolved by the remote service
/// against its default schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableRef {
    /// Unqualified table name.
    Name(String),
    /// Schema-qualified table.
    Qualified(QualifiedTable),
}

impl From<&str> for TableRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for TableRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<QualifiedTable> for TableRef {
    fn from(table: QualifiedTable) -> Self {
        Self::Qualified(table)
    }
}

// ---------------------------------------------------------------------------
// Webhook headers and retries
// ---------------------------------------------------------------------------

/// A header the remote service attaches when it calls a webhook.
///
/// Exactly one of a literal value or an environment-variable reference is
/// carried; the variant encodes which.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventHeader {
    /// Header with a literal value.
    Value {
        /// Header name.
        name: String,
        /// Header value.
        value: String,
    },
    /// Header whose value the remote service reads from its own environment.
    FromEnv {
        /// Header name.
        name: String,
        /// Name of the environment variable on the remote service.
        value_from_env: String,
    },
}

impl EventHeader {
    /// Creates a header with a literal value.
    pub fn value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Value {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates a header resolved from an environment variable on the remote service.
    pub fn from_env(name: impl Into<String>, value_from_env: impl Into<String>) -> Self {
        Self::FromEnv {
            name: name.into(),
            value_from_env: value_from_env.into(),
        }
    }

    /// Returns the header name.
    pub fn name(&self) -> &str {
        match self {
            Self::Value { name, .. } | Self::FromEnv { name, .. } => name,
        }
    }
}

/// Delivery retry settings for triggers and scheduled events.
///
/// Passed through verbatim; unset fields fall back to the remote service's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_retries: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_interval_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u32>,
    /// Only meaningful for cron triggers and scheduled events: how late an
    /// invocation may be delivered before it is dropped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance_seconds: Option<u32>,
}

// ---------------------------------------------------------------------------
// Event trigger operations
// ---------------------------------------------------------------------------

/// A column selection: every column (`"*"`) or an explicit list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Columns {
    /// All columns, sent as the wildcard string `"*"`.
    All,
    /// The named columns only.
    Named(Vec<String>),
}

impl Columns {
    /// Builds an explicit column list.
    pub fn named<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Named(columns.into_iter().map(Into::into).collect())
    }
}

impl Serialize for Columns {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str("*"),
            Self::Named(columns) => columns.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Columns {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColumnsVisitor;

        impl<'de> Visitor<'de> for ColumnsVisitor {
            type Value = Columns;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("\"*\" or a list of column names")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Columns, E> {
                if v == "*" {
                    Ok(Columns::All)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }

            fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Columns, A::Error> {
                let mut columns = Vec::new();
                while let Some(column) = seq.next_element::<String>()? {
                    columns.push(column);
                }
                Ok(Columns::Named(columns))
            }
        }

        deserializer.deserialize_any(ColumnsVisitor)
    }
}

/// Which columns fire an event trigger and which are forwarded in its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationSpec {
    /// Columns whose change fires the trigger.
    pub columns: Columns,
    /// Columns included in the event payload. Omitted means all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Columns>,
}

impl OperationSpec {
    /// Fires on any column and forwards every column.
    pub fn all() -> Self {
        Self {
            columns: Columns::All,
            payload: None,
        }
    }

    /// Fires on the given columns.
    pub fn columns(columns: Columns) -> Self {
        Self {
            columns,
            payload: None,
        }
    }

    /// Restricts the forwarded payload to `payload`.
    pub fn with_payload(mut self, payload: Columns) -> Self {
        self.payload = Some(payload);
        self
    }
}

// ---------------------------------------------------------------------------
// Table customisation
// ---------------------------------------------------------------------------

/// Custom GraphQL root field names for a tracked table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRootFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_by_pk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_aggregate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_one: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_by_pk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_by_pk: Option<String>,
}

/// Table configuration accepted by `track_table` version 2.
///
/// An empty configuration serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfiguration {
    /// GraphQL type name for the table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_root_fields: Option<CustomRootFields>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_column_names: Option<CustomColumnNames>,
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp, serialized as RFC 3339 / ISO 8601.
///
/// Wraps [`chrono::DateTime<Utc>`] so callers never depend on `chrono` types
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current UTC time as a [`Timestamp`].
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a [`Timestamp`] from a [`DateTime<Utc>`].
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Parses an RFC 3339 string such as `"2999-12-31T14:00:00.000Z"`.
    ///
    /// Offsets other than UTC are converted to UTC.
    pub fn parse_rfc3339(value: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(value).map(|dt| Self(dt.with_timezone(&Utc)))
    }

    /// Returns the underlying [`DateTime<Utc>`].
    pub fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}
