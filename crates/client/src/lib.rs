//! Typed async client for the Hasura administrative query API.
//!
//! [`Hasura`] exposes one method per administrative operation. Each method
//! turns its parameters into a `{type, version?, args}` envelope, attaches the
//! `x-hasura-admin-secret` header, and POSTs it to `<endpoint>/v1/query`
//! through an [`AdminTransport`]. Nothing is cached, batched, or retried.
//!
//! ```no_run
//! use hasura_admin::{CreateCronTriggerParams, Hasura, HasuraConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let hasura = Hasura::new(HasuraConfig::new("http://localhost:8080", "myadminsecretkey"));
//! let params = CreateCronTriggerParams::new("nightly", "https://example.com/hook", "0 3 * * *");
//! let reply = hasura.create_cron_trigger(&params).await?;
//! assert_eq!(reply.data.message, "success");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architectural Layer
//!
//! **Orchestration.** Envelope shapes live in [`admin_api::query`]; the HTTP
//! exchange lives in [`http_transport`]. This crate sequences the two and
//! decodes the reply.

use admin_api::query::{self, QueryEnvelope};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use admin_api::{
    AdminHeaders, AdminResponse, AdminTransport, ClientError, Columns, CreateCronTriggerParams,
    CreateEventTriggerParams, CreateScheduledEventParams, CustomColumnNames, CustomRootFields,
    EventHeader, EventId, EventPayload, HasuraConfig, InvokeEventTriggerParams,
    InvokeEventTriggerResponse, MessageResponse, OperationSpec, QualifiedTable, QueryType,
    RetryConfig, RunSqlParams, RunSqlResponse, ScheduledEventResponse, SetTableCustomFieldsParams,
    SetTableIsEnumParams, TableConfiguration, TableRef, Timestamp, TrackTableParams,
    TrackTableV2Params, TransportResponse, TriggerName, UntrackTableParams, ValidationError,
    ADMIN_SECRET_HEADER,
};
pub use http_transport::{HttpTransportError, ReqwestTransport};

/// Outcome of one administrative call over transport `T`.
pub type CallResult<R, T> = Result<AdminResponse<R>, ClientError<<T as AdminTransport>::Error>>;

/// Handle on one remote administrative endpoint.
///
/// Holds only configuration, so a single handle can serve any number of
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct Hasura<T = ReqwestTransport> {
    config: HasuraConfig,
    query_endpoint: String,
    transport: T,
}

impl Hasura<ReqwestTransport> {
    /// Creates a client over a default [`ReqwestTransport`]. Performs no I/O.
    pub fn new(config: HasuraConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T> Hasura<T> {
    /// Creates a client that sends through `transport`.
    pub fn with_transport(config: HasuraConfig, transport: T) -> Self {
        let query_endpoint = config.query_endpoint();
        Self {
            config,
            query_endpoint,
            transport,
        }
    }

    /// Base URL as configured.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Shared admin secret as configured.
    pub fn admin_secret(&self) -> &str {
        &self.config.admin_secret
    }

    /// `<endpoint>/v1/query`, fixed at construction.
    pub fn query_endpoint(&self) -> &str {
        &self.query_endpoint
    }

    /// The authentication header attached to every request.
    pub fn get_headers(&self) -> AdminHeaders {
        self.config.admin_headers()
    }

    /// The transport requests are sent through.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: AdminTransport> Hasura<T> {
    /// Sends one envelope and decodes the reply as `R`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(query = %envelope.kind, version = ?envelope.version)
    )]
    async fn send<A, R>(&self, envelope: QueryEnvelope<A>) -> CallResult<R, T>
    where
        A: Serialize + Send,
        R: DeserializeOwned,
    {
        let body = envelope.to_value().map_err(ClientError::Encode)?;
        let TransportResponse { status, data } = self
            .transport
            .post(&self.query_endpoint, body, &self.get_headers())
            .await
            .map_err(ClientError::Transport)?;
        let data = serde_json::from_value(data).map_err(|source| ClientError::Decode { status, source })?;
        Ok(AdminResponse { status, data })
    }

    // -----------------------------------------------------------------------
    // Scheduled triggers
    // -----------------------------------------------------------------------

    /// Creates a cron trigger. `include_in_metadata` and `replace` are sent as
    /// `false` unless set.
    pub async fn create_cron_trigger(
        &self,
        params: &CreateCronTriggerParams,
    ) -> CallResult<MessageResponse, T> {
        self.send(query::create_cron_trigger(params)).await
    }

    /// Deletes a cron trigger by name.
    ///
    /// Deleting a name that does not exist is reported by the remote service
    /// as an error status; it is not treated as success.
    pub async fn delete_cron_trigger(
        &self,
        name: impl Into<TriggerName>,
    ) -> CallResult<MessageResponse, T> {
        let name = name.into();
        self.send(query::delete_cron_trigger(&name)).await
    }

    /// Schedules a one-off webhook invocation. The reply carries the new
    /// event's id when the server reports one.
    pub async fn create_scheduled_event(
        &self,
        params: &CreateScheduledEventParams,
    ) -> CallResult<ScheduledEventResponse, T> {
        self.send(query::create_scheduled_event(params)).await
    }

    // -----------------------------------------------------------------------
    // Event triggers
    // -----------------------------------------------------------------------

    /// Creates (or, with `replace`, replaces) an event trigger.
    ///
    /// Fails with [`ValidationError::MissingWebhook`] and sends nothing when
    /// neither `webhook` nor `webhook_from_env` is set.
    pub async fn create_event_trigger(
        &self,
        params: &CreateEventTriggerParams,
    ) -> CallResult<MessageResponse, T> {
        let envelope = query::create_event_trigger(params)?;
        self.send(envelope).await
    }

    /// Deletes an event trigger by name.
    pub async fn delete_event_trigger(
        &self,
        name: impl Into<TriggerName>,
    ) -> CallResult<MessageResponse, T> {
        let name = name.into();
        self.send(query::delete_event_trigger(&name)).await
    }

    /// Asks the remote service to deliver an existing event again.
    pub async fn redeliver_event(&self, event_id: impl Into<EventId>) -> CallResult<MessageResponse, T> {
        let event_id = event_id.into();
        self.send(query::redeliver_event(&event_id)).await
    }

    /// Fires an event trigger manually with a custom payload. The reply
    /// carries the id of the created event.
    pub async fn invoke_event_trigger(
        &self,
        params: &InvokeEventTriggerParams,
    ) -> CallResult<InvokeEventTriggerResponse, T> {
        self.send(query::invoke_event_trigger(params)).await
    }

    // -----------------------------------------------------------------------
    // SQL
    // -----------------------------------------------------------------------

    /// Runs arbitrary SQL on the remote database.
    pub async fn run_sql(&self, params: &RunSqlParams) -> CallResult<RunSqlResponse, T> {
        self.send(query::run_sql(params)).await
    }

    // -----------------------------------------------------------------------
    // Tables and views
    // -----------------------------------------------------------------------

    /// Tracks a table or view so it is exposed over GraphQL.
    pub async fn track_table(&self, params: &TrackTableParams) -> CallResult<MessageResponse, T> {
        self.send(query::track_table(params)).await
    }

    /// `track_table` version 2: tracks a table with a GraphQL configuration.
    pub async fn track_table_v2(&self, params: &TrackTableV2Params) -> CallResult<MessageResponse, T> {
        self.send(query::track_table_v2(params)).await
    }

    /// Marks a tracked table as an enum table, or unmarks it.
    pub async fn set_table_is_enum(
        &self,
        params: &SetTableIsEnumParams,
    ) -> CallResult<MessageResponse, T> {
        self.send(query::set_table_is_enum(params)).await
    }

    /// Sets custom GraphQL root fields and column names (version 2).
    pub async fn set_table_custom_fields(
        &self,
        params: &SetTableCustomFieldsParams,
    ) -> CallResult<MessageResponse, T> {
        self.send(query::set_table_custom_fields(params)).await
    }

    /// Stops tracking a table, optionally cascading to dependent metadata.
    pub async fn untrack_table(&self, params: &UntrackTableParams) -> CallResult<MessageResponse, T> {
        self.send(query::untrack_table(params)).await
    }
}

#[cfg(test)]
mod tests;
