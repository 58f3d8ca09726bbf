// Voice API client against a local stand-in server

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, post};
use axum::{Json, Router};
use std::sync::{Arc, Mutex};
use vapi_console::vapi::{ControlMessage, WebCallRequest};
use vapi_console::{StartRequest, VapiClientFactory, VoiceClient, VoiceClientFactory};

#[derive(Clone, Default)]
struct Recorded {
    requests: Arc<Mutex<Vec<(String, serde_json::Value)>>>,
    with_control_url: bool,
    base: Arc<Mutex<String>>,
}

async fn create_call(
    State(rec): State<Recorded>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    rec.requests.lock().unwrap().push((auth.clone(), body));

    if auth != "Bearer good-key" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "message": "Invalid Key" })),
        );
    }

    let base = rec.base.lock().unwrap().clone();
    let mut call = serde_json::json!({
        "id": "call-1",
        "webCallUrl": "https://daily.example/room",
    });
    if rec.with_control_url {
        call["monitor"] = serde_json::json!({ "controlUrl": format!("{}/control/call-1", base) });
    }
    (StatusCode::CREATED, Json(call))
}

async fn control(
    State(rec): State<Recorded>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    rec.requests
        .lock()
        .unwrap()
        .push((format!("control {}", id), body));
    StatusCode::OK
}

async fn delete_call(State(rec): State<Recorded>, Path(id): Path<String>) -> StatusCode {
    rec.requests
        .lock()
        .unwrap()
        .push((format!("delete {}", id), serde_json::Value::Null));
    StatusCode::OK
}

async fn serve(with_control_url: bool) -> (String, Recorded) {
    let rec = Recorded {
        with_control_url,
        ..Recorded::default()
    };
    let app = Router::new()
        .route("/call/web", post(create_call))
        .route("/call/:id", delete(delete_call))
        .route("/control/:id", post(control))
        .with_state(rec.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    *rec.base.lock().unwrap() = base.clone();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (base, rec)
}

#[test]
fn test_web_call_request_wire_format() {
    let by_id = WebCallRequest::from(&StartRequest::AssistantId("abc123".to_string()));
    assert_eq!(
        serde_json::to_value(&by_id).unwrap(),
        serde_json::json!({ "assistantId": "abc123" })
    );

    let end = serde_json::to_value(ControlMessage::end_call()).unwrap();
    assert_eq!(end, serde_json::json!({ "type": "end-call" }));
}

#[test]
fn test_factory_rejects_empty_key() {
    let factory = VapiClientFactory::new("http://127.0.0.1:1", None).unwrap();
    assert!(factory.connect("  ").is_err());
}

#[tokio::test]
async fn test_start_then_stop_via_control_url() {
    let (base, rec) = serve(true).await;
    let factory = VapiClientFactory::new(&base, None).unwrap();
    let mut client = factory.connect("good-key").unwrap();

    client
        .start(&StartRequest::AssistantId("abc123".to_string()))
        .await
        .unwrap();
    assert_eq!(client.join_url(), Some("https://daily.example/room"));

    client.stop().await.unwrap();
    assert_eq!(client.join_url(), None);

    let requests = rec.requests.lock().unwrap().clone();
    assert_eq!(requests[0].0, "Bearer good-key");
    assert_eq!(requests[0].1, serde_json::json!({ "assistantId": "abc123" }));
    assert_eq!(requests[1].0, "control call-1");
    assert_eq!(requests[1].1, serde_json::json!({ "type": "end-call" }));
}

#[tokio::test]
async fn test_stop_without_control_url_deletes_call() {
    let (base, rec) = serve(false).await;
    let factory = VapiClientFactory::new(&base, None).unwrap();
    let mut client = factory.connect("good-key").unwrap();

    client
        .start(&StartRequest::AssistantId("abc123".to_string()))
        .await
        .unwrap();
    client.stop().await.unwrap();

    let requests = rec.requests.lock().unwrap().clone();
    assert_eq!(requests[1].0, "delete call-1");
}

#[tokio::test]
async fn test_rejected_start_surfaces_api_message() {
    let (base, _rec) = serve(true).await;
    let factory = VapiClientFactory::new(&base, None).unwrap();
    let mut client = factory.connect("wrong-key").unwrap();

    let err = client
        .start(&StartRequest::AssistantId("abc123".to_string()))
        .await
        .unwrap_err();

    let message = format!("{:#}", err);
    assert!(message.contains("401"), "{}", message);
    assert!(message.contains("Invalid Key"), "{}", message);
}

#[tokio::test]
async fn test_stop_before_start_fails() {
    let factory = VapiClientFactory::new("http://127.0.0.1:1", None).unwrap();
    let mut client = factory.connect("good-key").unwrap();

    assert!(client.stop().await.is_err());
}
