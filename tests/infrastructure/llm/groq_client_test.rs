use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use studyhub::application::ports::{GenerationRequest, LlmClient, LlmClientError};
use studyhub::infrastructure::llm::GroqClient;

#[derive(Default)]
struct Captured {
    body: Option<Value>,
    authorization: Option<String>,
}

async fn start_mock_groq_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, Arc<Mutex<Captured>>, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let captured = Arc::new(Mutex::new(Captured::default()));
    let sink = Arc::clone(&captured);

    let app = Router::new().route(
        "/openai/v1/chat/completions",
        post(move |headers: HeaderMap, body: String| {
            let sink = Arc::clone(&sink);
            async move {
                {
                    let mut captured = sink.lock().unwrap();
                    captured.body = serde_json::from_str(&body).ok();
                    captured.authorization = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(String::from);
                }

                let status = StatusCode::from_u16(response_status).unwrap();
                (status, [("content-type", "application/json")], response_body)
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}/openai/v1/", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, captured, shutdown_tx)
}

fn request() -> GenerationRequest {
    GenerationRequest {
        model: "test-model".to_string(),
        system_prompt: "You write flashcards.".to_string(),
        user_content: "Mitochondria produce ATP.".to_string(),
        max_tokens: 512,
        temperature: 0.4,
    }
}

fn client(base_url: &str) -> GroqClient {
    GroqClient::new(base_url, "gsk-test".to_string(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn given_successful_completion_when_generating_then_returns_first_choice() {
    let (base_url, _, _shutdown) = start_mock_groq_server(
        200,
        r#"{"choices":[{"message":{"role":"assistant","content":"Q: What produces ATP?"}}]}"#,
    )
    .await;

    let text = client(&base_url).generate(&request()).await.unwrap();

    assert_eq!(text, "Q: What produces ATP?");
}

#[tokio::test]
async fn given_request_when_generating_then_body_carries_messages_and_parameters() {
    let (base_url, captured, _shutdown) = start_mock_groq_server(
        200,
        r#"{"choices":[{"message":{"content":"ok"}}]}"#,
    )
    .await;

    client(&base_url).generate(&request()).await.unwrap();

    let captured = captured.lock().unwrap();
    assert_eq!(captured.authorization.as_deref(), Some("Bearer gsk-test"));

    let body = captured.body.as_ref().unwrap();
    assert_eq!(body["model"], "test-model");
    assert_eq!(body["max_tokens"], 512);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], "You write flashcards.");
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(body["messages"][1]["content"], "Mitochondria produce ATP.");
    assert!((body["temperature"].as_f64().unwrap() - 0.4).abs() < 1e-6);
}

#[tokio::test]
async fn given_rate_limit_status_when_generating_then_rate_limited() {
    let (base_url, _, _shutdown) =
        start_mock_groq_server(429, r#"{"error":{"message":"slow down"}}"#).await;

    let result = client(&base_url).generate(&request()).await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
}

#[tokio::test]
async fn given_server_error_when_generating_then_api_request_failed_with_status() {
    let (base_url, _, _shutdown) = start_mock_groq_server(500, r#"{"oops":true}"#).await;

    let result = client(&base_url).generate(&request()).await;

    match result {
        Err(LlmClientError::ApiRequestFailed(msg)) => assert!(msg.contains("500")),
        other => panic!("expected ApiRequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn given_error_field_in_success_body_when_generating_then_api_request_failed() {
    let (base_url, _, _shutdown) =
        start_mock_groq_server(200, r#"{"error":{"message":"model overloaded"}}"#).await;

    let result = client(&base_url).generate(&request()).await;

    match result {
        Err(LlmClientError::ApiRequestFailed(msg)) => assert_eq!(msg, "model overloaded"),
        other => panic!("expected ApiRequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn given_no_choices_when_generating_then_invalid_response() {
    let (base_url, _, _shutdown) = start_mock_groq_server(200, r#"{"choices":[]}"#).await;

    let result = client(&base_url).generate(&request()).await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_non_json_body_when_generating_then_invalid_response() {
    let (base_url, _, _shutdown) = start_mock_groq_server(200, "not json").await;

    let result = client(&base_url).generate(&request()).await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}
