//! Domain types for the Hasura administrative query API.
//!
//! Every administrative operation is a JSON envelope `{type, version?, args}`
//! POSTed to `<endpoint>/v1/query`. This crate owns the shape of those
//! envelopes, the parameter and response types around them, and the
//! [`AdminTransport`] port that infrastructure crates implement to carry them.
//!
//! ## Architectural Layer
//!
//! **Domain + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is sent; `http-transport` defines *how* it is sent.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype names (`TriggerName`, `EventId`) |
//! | [`types`] | Shared value types (`QualifiedTable`, `EventHeader`, `RetryConfig`, etc.) |
//! | [`params`] | One parameter struct per operation |
//! | [`query`] | `QueryType`, `QueryEnvelope`, and params-to-envelope conversion |
//! | [`responses`] | Decoded response bodies |
//! | [`transport`] | The `AdminTransport` port trait |
//! | [`config`] | `HasuraConfig` and the admin secret header |
//! | [`errors`] | Validation and client error types |

pub mod config;
pub mod errors;
pub mod identifiers;
pub mod params;
pub mod query;
pub mod responses;
pub mod transport;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use config::{AdminHeaders, HasuraConfig, ADMIN_SECRET_HEADER, QUERY_PATH};
pub use errors::{ClientError, ValidationError};
pub use identifiers::{EventId, TriggerName};
pub use params::{
    CreateCronTriggerParams, CreateEventTriggerParams, CreateScheduledEventParams,
    InvokeEventTriggerParams, RunSqlParams, SetTableCustomFieldsParams, SetTableIsEnumParams,
    TrackTableParams, TrackTableV2Params, UntrackTableParams,
};
pub use query::{validate_event_trigger, QueryEnvelope, QueryType};
pub use responses::{
    AdminResponse, InvokeEventTriggerResponse, MessageResponse, RunSqlResponse, ScheduledEventResponse,
};
pub use transport::{AdminTransport, TransportResponse};
pub use types::{
    Columns, CustomColumnNames, CustomRootFields, EventHeader, EventPayload, OperationSpec,
    QualifiedTable, RetryConfig, TableConfiguration, TableRef, Timestamp,
};
