use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use super::*;

#[derive(Debug, thiserror::Error)]
#[error("remote rejected request with HTTP {0}")]
struct FakeError(u16);

#[derive(Debug, Clone)]
struct Recorded {
    url: String,
    body: Value,
    headers: AdminHeaders,
}

/// Records every POST and answers with a canned reply.
#[derive(Debug, Clone)]
struct RecordingTransport {
    requests: Arc<Mutex<Vec<Recorded>>>,
    reply: Result<Value, u16>,
}

impl RecordingTransport {
    fn replying(data: Value) -> Self {
        Self {
            requests: Arc::default(),
            reply: Ok(data),
        }
    }

    fn failing(status: u16) -> Self {
        Self {
            requests: Arc::default(),
            reply: Err(status),
        }
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    fn only_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl AdminTransport for RecordingTransport {
    type Error = FakeError;

    async fn post(
        &self,
        url: &str,
        body: Value,
        headers: &AdminHeaders,
    ) -> Result<TransportResponse, Self::Error> {
        self.requests.lock().unwrap().push(Recorded {
            url: url.to_owned(),
            body,
            headers: headers.clone(),
        });
        match &self.reply {
            Ok(data) => Ok(TransportResponse {
                status: 200,
                data: data.clone(),
            }),
            Err(status) => Err(FakeError(*status)),
        }
    }
}

const ENDPOINT: &str = "http://localhost:8080";
const SECRET: &str = "myadminsecretkey";

fn client(transport: RecordingTransport) -> Hasura<RecordingTransport> {
    Hasura::with_transport(HasuraConfig::new(ENDPOINT, SECRET), transport)
}

fn success() -> RecordingTransport {
    RecordingTransport::replying(json!({"message": "success"}))
}

#[test]
fn constructor_derives_the_query_endpoint() {
    let hasura = Hasura::new(HasuraConfig::new(ENDPOINT, SECRET));
    assert_eq!(hasura.endpoint(), ENDPOINT);
    assert_eq!(hasura.admin_secret(), SECRET);
    assert_eq!(hasura.query_endpoint(), "http://localhost:8080/v1/query");
}

#[test]
fn get_headers_returns_only_the_admin_secret() {
    let hasura = client(success());
    let mut expected = BTreeMap::new();
    expected.insert(ADMIN_SECRET_HEADER.to_owned(), SECRET.to_owned());
    assert_eq!(hasura.get_headers(), expected);

    let empty = Hasura::with_transport(HasuraConfig::new(ENDPOINT, ""), success());
    assert_eq!(empty.get_headers().get(ADMIN_SECRET_HEADER).map(String::as_str), Some(""));
}

#[tokio::test]
async fn create_event_trigger_without_webhook_sends_nothing() {
    let transport = success();
    let hasura = client(transport.clone());

    let params = CreateEventTriggerParams::new("missing webhook", QualifiedTable::new("myschema", "mytable"));
    let err = hasura.create_event_trigger(&params).await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.to_string(), "either webhook or webhook_from_env is required");
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn create_event_trigger_with_env_webhook_is_sent() {
    let transport = success();
    let hasura = client(transport.clone());

    let params = CreateEventTriggerParams::new("item_changes", QualifiedTable::public("item"))
        .with_webhook_from_env("ITEM_WEBHOOK")
        .on_insert(OperationSpec::all())
        .on_update(OperationSpec::columns(Columns::named(["name", "category"])))
        .with_headers(vec![EventHeader::from_env("X-Token", "ITEM_TOKEN")]);
    let reply = hasura.create_event_trigger(&params).await.unwrap();
    assert!(reply.data.is_success());

    let request = transport.only_request();
    assert_eq!(
        request.body,
        json!({
            "type": "create_event_trigger",
            "args": {
                "name": "item_changes",
                "table": {"name": "item", "schema": "public"},
                "webhook_from_env": "ITEM_WEBHOOK",
                "insert": {"columns": "*"},
                "update": {"columns": ["name", "category"]},
                "headers": [{"name": "X-Token", "value_from_env": "ITEM_TOKEN"}]
            }
        })
    );
}

#[tokio::test]
async fn create_cron_trigger_fills_default_flags() {
    let transport = success();
    let hasura = client(transport.clone());

    let params = CreateCronTriggerParams::new("test_cron", "https://httpbin.org/post", "* * * * *");
    hasura.create_cron_trigger(&params).await.unwrap();

    let request = transport.only_request();
    assert_eq!(request.url, "http://localhost:8080/v1/query");
    assert_eq!(request.body["type"], json!("create_cron_trigger"));
    assert_eq!(request.body["args"]["include_in_metadata"], json!(false));
    assert_eq!(request.body["args"]["replace"], json!(false));
    assert!(request.body.get("version").is_none());
}

#[tokio::test]
async fn create_cron_trigger_keeps_explicit_flags() {
    let transport = success();
    let hasura = client(transport.clone());

    let params = CreateCronTriggerParams::new("test_cron_delete", "https://httpbin.org/post", "* * * * *")
        .with_payload(json!({"hello": "world"}))
        .with_include_in_metadata(true)
        .with_replace(true);
    hasura.create_cron_trigger(&params).await.unwrap();

    let args = &transport.only_request().body["args"];
    assert_eq!(args["include_in_metadata"], json!(true));
    assert_eq!(args["replace"], json!(true));
}

#[tokio::test]
async fn every_operation_carries_the_admin_header_and_its_tag() {
    // Satisfies every reply shape: acknowledgements and event ids.
    let transport = RecordingTransport::replying(json!({"message": "success", "event_id": "evt-1"}));
    let hasura = client(transport.clone());
    let table = QualifiedTable::public("item");
    let at = Timestamp::from_utc(chrono::DateTime::<chrono::Utc>::UNIX_EPOCH);

    hasura
        .create_cron_trigger(&CreateCronTriggerParams::new("c", "https://h", "* * * * *"))
        .await
        .unwrap();
    hasura.delete_cron_trigger("c").await.unwrap();
    hasura
        .create_scheduled_event(&CreateScheduledEventParams::new("https://h", at))
        .await
        .unwrap();
    hasura
        .create_event_trigger(&CreateEventTriggerParams::new("e", table.clone()).with_webhook("https://h"))
        .await
        .unwrap();
    hasura.delete_event_trigger("e").await.unwrap();
    hasura.redeliver_event("evt-1").await.unwrap();
    hasura
        .invoke_event_trigger(&InvokeEventTriggerParams::new("e", json!({"id": 1})))
        .await
        .unwrap();
    hasura.track_table(&TrackTableParams::new(table.clone())).await.unwrap();
    hasura
        .track_table_v2(&TrackTableV2Params::new("item", TableConfiguration::default()))
        .await
        .unwrap();
    hasura
        .set_table_is_enum(&SetTableIsEnumParams::new(table, true))
        .await
        .unwrap();
    hasura
        .set_table_custom_fields(&SetTableCustomFieldsParams::new("item"))
        .await
        .unwrap();
    hasura
        .untrack_table(&UntrackTableParams::new("item").with_cascade(true))
        .await
        .unwrap();

    let expected = [
        ("create_cron_trigger", None),
        ("delete_cron_trigger", None),
        ("create_scheduled_event", None),
        ("create_event_trigger", None),
        ("delete_event_trigger", None),
        ("redeliver_event", None),
        ("invoke_event_trigger", None),
        ("track_table", None),
        ("track_table", Some(2)),
        ("set_table_is_enum", None),
        ("set_table_custom_fields", Some(2)),
        ("untrack_table", None),
    ];
    let requests = transport.requests();
    assert_eq!(requests.len(), expected.len());
    for (request, (tag, version)) in requests.iter().zip(expected) {
        assert_eq!(request.url, hasura.query_endpoint());
        assert_eq!(request.headers, hasura.get_headers());
        assert_eq!(request.body["type"], json!(tag));
        assert_eq!(request.body.get("version").and_then(Value::as_u64), version);
        let mut keys: Vec<&String> = request.body.as_object().unwrap().keys().collect();
        keys.retain(|k| !matches!(k.as_str(), "type" | "version" | "args"));
        assert!(keys.is_empty(), "unexpected top-level fields {keys:?} in {tag}");
    }
}

#[tokio::test]
async fn invoke_event_trigger_returns_the_event_id() {
    let transport = RecordingTransport::replying(json!({"event_id": "85558393-c75d-4d2f-9c15-e80591b83894"}));
    let hasura = client(transport.clone());

    let reply = hasura
        .invoke_event_trigger(&InvokeEventTriggerParams::new("item_changes", json!({"id": 1})))
        .await
        .unwrap();
    assert_eq!(reply.data.event_id, EventId::from("85558393-c75d-4d2f-9c15-e80591b83894"));
    assert_eq!(
        transport.only_request().body,
        json!({"type": "invoke_event_trigger", "args": {"name": "item_changes", "payload": {"id": 1}}})
    );
}

#[tokio::test]
async fn create_scheduled_event_keeps_the_event_id() {
    let transport = RecordingTransport::replying(json!({"message": "success", "event_id": "abc"}));
    let hasura = client(transport);
    let at = Timestamp::parse_rfc3339("2999-12-31T14:00:00.000Z").unwrap();

    let reply = hasura
        .create_scheduled_event(&CreateScheduledEventParams::new("https://httpbin.org/post", at))
        .await
        .unwrap();
    assert!(reply.data.is_success());
    assert_eq!(reply.data.event_id, Some(EventId::from("abc")));
}

#[tokio::test]
async fn track_table_sends_a_bare_name() {
    let transport = success();
    let hasura = client(transport.clone());

    hasura.track_table(&TrackTableParams::new("item")).await.unwrap();
    assert_eq!(
        transport.only_request().body,
        json!({"type": "track_table", "args": {"table": "item"}})
    );
}

#[tokio::test]
async fn run_sql_attaches_the_admin_header() {
    let transport = RecordingTransport::replying(json!({"result_type": "CommandOk", "result": null}));
    let hasura = client(transport.clone());

    let reply = hasura
        .run_sql(&RunSqlParams::new("DROP TABLE IF EXISTS t").with_read_only(false))
        .await
        .unwrap();
    assert_eq!(reply.status, 200);
    assert_eq!(reply.data.result_type, RunSqlResponse::COMMAND_OK);
    assert!(reply.data.result.is_none());

    let request = transport.only_request();
    assert_eq!(request.headers.get(ADMIN_SECRET_HEADER).map(String::as_str), Some(SECRET));
    assert_eq!(
        request.body,
        json!({"type": "run_sql", "args": {"sql": "DROP TABLE IF EXISTS t", "read_only": false}})
    );
}

#[tokio::test]
async fn transport_failure_is_propagated_unchanged() {
    let transport = RecordingTransport::failing(400);
    let hasura = client(transport.clone());

    let err = hasura.delete_cron_trigger("test_cron").await.unwrap_err();
    assert_eq!(err.transport().map(|e| e.0), Some(400));
    assert!(!err.is_validation());
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn unexpected_reply_shape_is_a_decode_error() {
    let transport = RecordingTransport::replying(json!({"unexpected": true}));
    let hasura = client(transport);

    let err = hasura.run_sql(&RunSqlParams::new("SELECT 1")).await.unwrap_err();
    assert!(matches!(err, ClientError::Decode { status: 200, .. }));
}

#[tokio::test]
async fn concurrent_calls_share_one_handle() {
    let transport = success();
    let hasura = Arc::new(client(transport.clone()));

    let mut handles = Vec::new();
    for i in 0..8 {
        let hasura = Arc::clone(&hasura);
        handles.push(tokio::spawn(async move {
            hasura.delete_event_trigger(format!("trigger_{i}")).await.map(|r| r.data)
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().unwrap().is_success());
    }
    assert_eq!(transport.requests().len(), 8);
}
