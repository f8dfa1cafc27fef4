//! Integration tests for the Gemini client against a local stub server.

use std::net::SocketAddr;

use assert_matches::assert_matches;
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use fitvision_core::error::CoreError;
use fitvision_core::media::InlineImage;
use fitvision_core::transform::ContentPart;
use fitvision_gemini::api::{GeminiApi, GeminiApiError};
use fitvision_gemini::messages::GenerateContentRequest;
use fitvision_gemini::{EditRequest, GeminiGenerator, ImageGenerator};
use serde_json::{json, Value};

const MODEL: &str = "test-model";
const API_KEY: &str = "test-key";

/// Echo stub: answers with a text part plus the uploaded image, after
/// checking the key, the method suffix, and the request shape.
async fn echo_generate(
    Path(model_action): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some(API_KEY) {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({"error": {"message": "bad key"}})),
        );
    }
    if model_action != format!("{MODEL}:generateContent") {
        return (StatusCode::NOT_FOUND, Json(json!({})));
    }

    let parts = &body["contents"][0]["parts"];
    let prompt = parts[0]["text"].as_str().unwrap_or_default();
    let inline = parts[1]["inlineData"].clone();

    (
        StatusCode::OK,
        Json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": format!("edited: {prompt}")},
                        {"inlineData": inline}
                    ]
                },
                "finishReason": "STOP"
            }]
        })),
    )
}

async fn spawn_stub(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn echo_router() -> Router {
    Router::new().route("/v1beta/models/{model_action}", post(echo_generate))
}

#[tokio::test]
async fn generator_round_trips_through_gemini_wire_format() {
    let addr = spawn_stub(echo_router()).await;
    let api = GeminiApi::new(format!("http://{addr}"), MODEL.into(), API_KEY.into());
    let generator = GeminiGenerator::new(api);

    let request = EditRequest {
        prompt: "three months".into(),
        image: InlineImage::new("image/png", vec![0, 1, 2, 254, 255]),
    };
    let parts = generator.generate(&request).await.unwrap();

    assert_eq!(
        parts,
        vec![
            ContentPart::Text("edited: three months".into()),
            ContentPart::Image(InlineImage::new("image/png", vec![0, 1, 2, 254, 255])),
        ]
    );
}

#[tokio::test]
async fn non_success_status_is_an_api_error() {
    let addr = spawn_stub(echo_router()).await;
    let api = GeminiApi::new(format!("http://{addr}"), MODEL.into(), "wrong".into());

    let image = InlineImage::new("image/jpeg", vec![1]);
    let result = api
        .generate_content(&GenerateContentRequest::image_edit("p", &image))
        .await;

    assert_matches!(
        result,
        Err(GeminiApiError::ApiError { status: 403, ref body }) if body.contains("bad key")
    );
}

#[tokio::test]
async fn transport_failure_surfaces_as_generation_error() {
    // Bind then drop a listener so the port is very likely closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = GeminiApi::new(format!("http://{addr}"), MODEL.into(), API_KEY.into());
    let generator = GeminiGenerator::new(api);
    let request = EditRequest {
        prompt: "p".into(),
        image: InlineImage::new("image/jpeg", vec![1]),
    };

    let err = generator.generate(&request).await.unwrap_err();
    assert_matches!(err, CoreError::Generation(msg) if msg.starts_with("HTTP request failed"));
}

#[tokio::test]
async fn empty_candidates_yield_no_parts() {
    let router = Router::new().route(
        "/v1beta/models/{model_action}",
        post(|| async { Json(json!({"candidates": []})) }),
    );
    let addr = spawn_stub(router).await;
    let api = GeminiApi::new(format!("http://{addr}"), MODEL.into(), API_KEY.into());

    let request = EditRequest {
        prompt: "p".into(),
        image: InlineImage::new("image/jpeg", vec![1]),
    };
    let parts = GeminiGenerator::new(api).generate(&request).await.unwrap();
    assert!(parts.is_empty());
}
