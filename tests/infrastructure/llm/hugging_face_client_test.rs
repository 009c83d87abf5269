use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use prospectus::application::ports::{InferenceClient, InferenceError};
use prospectus::infrastructure::llm::HuggingFaceClient;

const MODEL: &str = "google/flan-t5-large";

struct MockBackend {
    status: u16,
    body: &'static str,
    delay: Duration,
    hits: AtomicUsize,
    last_authorization: Mutex<Option<String>>,
    last_payload: Mutex<Option<serde_json::Value>>,
}

async fn mock_inference(
    State(backend): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Json(payload): Json<serde_json::Value>,
) -> impl IntoResponse {
    backend.hits.fetch_add(1, Ordering::SeqCst);
    *backend.last_authorization.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    *backend.last_payload.lock().unwrap() = Some(payload);

    if !backend.delay.is_zero() {
        tokio::time::sleep(backend.delay).await;
    }

    (StatusCode::from_u16(backend.status).unwrap(), backend.body)
}

async fn start_mock_backend(
    status: u16,
    body: &'static str,
    delay: Duration,
) -> (String, Arc<MockBackend>, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let backend = Arc::new(MockBackend {
        status,
        body,
        delay,
        hits: AtomicUsize::new(0),
        last_authorization: Mutex::new(None),
        last_payload: Mutex::new(None),
    });

    let app = Router::new()
        .route(&format!("/models/{MODEL}"), post(mock_inference))
        .with_state(Arc::clone(&backend));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}/models", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, backend, shutdown_tx)
}

fn client(base_url: &str, token: &str, timeout: Duration) -> HuggingFaceClient {
    HuggingFaceClient::new(base_url, MODEL, token, timeout).unwrap()
}

#[tokio::test]
async fn given_generated_text_response_when_generating_then_returns_first_generated_text() {
    let (base_url, backend, shutdown_tx) = start_mock_backend(
        200,
        r#"[{"generated_text": "Luxury waterfront living."}]"#,
        Duration::ZERO,
    )
    .await;

    let result = client(&base_url, "hf_test", Duration::from_secs(5))
        .generate("Write an LPV")
        .await;

    assert_eq!(result.unwrap(), "Luxury waterfront living.");
    assert_eq!(backend.hits.load(Ordering::SeqCst), 1);
    assert_eq!(
        backend.last_authorization.lock().unwrap().as_deref(),
        Some("Bearer hf_test")
    );
    assert_eq!(
        backend.last_payload.lock().unwrap().clone(),
        Some(serde_json::json!({ "inputs": "Write an LPV" }))
    );
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unexpected_json_shape_when_generating_then_returns_stringified_body() {
    let (base_url, _, shutdown_tx) =
        start_mock_backend(200, r#"{"summary_text": "Short"}"#, Duration::ZERO).await;

    let result = client(&base_url, "hf_test", Duration::from_secs(5))
        .generate("prompt")
        .await;

    assert_eq!(result.unwrap(), r#"{"summary_text":"Short"}"#);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_service_unavailable_when_generating_then_returns_upstream_status_and_body() {
    let (base_url, _, shutdown_tx) =
        start_mock_backend(503, "Model is currently loading", Duration::ZERO).await;

    let result = client(&base_url, "hf_test", Duration::from_secs(5))
        .generate("prompt")
        .await;

    match result {
        Err(InferenceError::Upstream { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "Model is currently loading");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_token_when_generating_then_fails_without_network_call() {
    let (base_url, backend, shutdown_tx) =
        start_mock_backend(200, r#"[{"generated_text": "x"}]"#, Duration::ZERO).await;

    for token in ["", "   "] {
        let result = client(&base_url, token, Duration::from_secs(5))
            .generate("prompt")
            .await;

        assert!(matches!(result, Err(InferenceError::MissingCredential(_))));
    }
    assert_eq!(backend.hits.load(Ordering::SeqCst), 0);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_slow_backend_when_generating_then_returns_timeout_without_status() {
    let (base_url, _, shutdown_tx) = start_mock_backend(
        200,
        r#"[{"generated_text": "late"}]"#,
        Duration::from_secs(3),
    )
    .await;

    let result = client(&base_url, "hf_test", Duration::from_millis(200))
        .generate("prompt")
        .await;

    let error = result.unwrap_err();
    assert!(matches!(error, InferenceError::Timeout));
    assert_eq!(error.status(), None);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_non_json_success_body_when_generating_then_returns_invalid_response() {
    let (base_url, _, shutdown_tx) =
        start_mock_backend(200, "<html>gateway</html>", Duration::ZERO).await;

    let result = client(&base_url, "hf_test", Duration::from_secs(5))
        .generate("prompt")
        .await;

    assert!(matches!(result, Err(InferenceError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_backend_when_generating_then_returns_request_failed() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = client(&format!("http://{}", addr), "hf_test", Duration::from_secs(5))
        .generate("prompt")
        .await;

    assert!(matches!(result, Err(InferenceError::RequestFailed(_))));
}

#[test]
fn given_base_url_with_trailing_slash_when_building_client_then_joins_model_path() {
    let client = client(
        "https://router.huggingface.co/hf-inference/models/",
        "hf_test",
        Duration::from_secs(1),
    );

    assert_eq!(
        client.endpoint(),
        "https://router.huggingface.co/hf-inference/models/google/flan-t5-large"
    );
}
