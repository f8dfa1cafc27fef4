#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use fitvision_core::error::CoreError;
use fitvision_core::transform::ContentPart;
use fitvision_gemini::{EditRequest, ImageGenerator};
use http_body_util::BodyExt;
use tower::ServiceExt;

use fitvision_api::config::ServerConfig;
use fitvision_api::router::build_app_router;
use fitvision_api::state::AppState;

pub const BOUNDARY: &str = "fitvision-test-boundary";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default),
/// a 30-second request timeout, and no static UI.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 1024 * 1024,
        static_dir: None,
    }
}

/// What the fake generator does when called.
#[derive(Clone)]
pub enum FakeBehavior {
    Parts(Vec<ContentPart>),
    Fail(String),
    /// Sleep before answering with no parts.
    Stall(Duration),
    Panic(String),
}

/// In-process stand-in for Gemini that records every request it receives.
pub struct FakeGenerator {
    behavior: FakeBehavior,
    pub calls: Mutex<Vec<EditRequest>>,
}

impl FakeGenerator {
    pub fn returning(parts: Vec<ContentPart>) -> Arc<Self> {
        Arc::new(Self {
            behavior: FakeBehavior::Parts(parts),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            behavior: FakeBehavior::Fail(message.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn stalling(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            behavior: FakeBehavior::Stall(delay),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn panicking(message: &str) -> Arc<Self> {
        Arc::new(Self {
            behavior: FakeBehavior::Panic(message.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn recorded(&self) -> Vec<EditRequest> {
        self.calls.lock().unwrap().clone()
    }
}

/// Erase a fake into the generator slot of [`AppState`].
pub fn configured(fake: &Arc<FakeGenerator>) -> Option<Arc<dyn ImageGenerator>> {
    Some(Arc::clone(fake) as Arc<dyn ImageGenerator>)
}

#[async_trait]
impl ImageGenerator for FakeGenerator {
    async fn generate(&self, request: &EditRequest) -> Result<Vec<ContentPart>, CoreError> {
        self.calls.lock().unwrap().push(request.clone());
        match &self.behavior {
            FakeBehavior::Parts(parts) => Ok(parts.clone()),
            FakeBehavior::Fail(message) => Err(CoreError::Generation(message.clone())),
            FakeBehavior::Stall(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(Vec::new())
            }
            FakeBehavior::Panic(message) => panic!("{message}"),
        }
    }

    fn name(&self) -> &str {
        "fake"
    }
}

/// Build the full application router around an optional generator.
///
/// Uses the same [`build_app_router`] as `main.rs` so tests exercise the
/// production middleware stack.
pub fn build_test_app(generator: Option<Arc<dyn ImageGenerator>>) -> Router {
    build_test_app_with_config(test_config(), generator)
}

pub fn build_test_app_with_config(
    config: ServerConfig,
    generator: Option<Arc<dyn ImageGenerator>>,
) -> Router {
    build_app_router(AppState::new(config, generator)).expect("test router should build")
}

/// One part of a multipart body.
pub enum FormPart<'a> {
    Text {
        name: &'a str,
        value: &'a str,
    },
    File {
        name: &'a str,
        filename: &'a str,
        content_type: Option<&'a str>,
        data: &'a [u8],
    },
}

/// Encode parts as a `multipart/form-data` body using [`BOUNDARY`].
pub fn multipart_body(parts: &[FormPart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            FormPart::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            FormPart::File {
                name,
                filename,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
                    )
                    .as_bytes(),
                );
                if let Some(ct) = content_type {
                    body.extend_from_slice(format!("Content-Type: {ct}\r\n").as_bytes());
                }
                body.extend_from_slice(b"\r\n");
                body.extend_from_slice(data);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a multipart form through the router.
pub async fn post_multipart(app: Router, uri: &str, parts: &[FormPart<'_>]) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
