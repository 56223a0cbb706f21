#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use summary_service::config::{CorsConfig, SummaryConfig};
use summary_service::services::providers::gemini::GeminiConfig;
use summary_service::services::providers::mock::MockTextProvider;
use summary_service::services::TextProvider;
use summary_service::{build_router, AppState, Application};
use tower::ServiceExt;

pub const SUMMARY_PATH: &str = "/api/generate-summary";

pub fn test_config() -> SummaryConfig {
    SummaryConfig {
        common: CoreConfig {
            port: 0,
            ..CoreConfig::default()
        },
        gemini: GeminiConfig::new("test-api-key"),
        cors: CorsConfig::default(),
    }
}

/// A router wired to a mock provider, driven in-process with `oneshot`.
pub struct TestApp {
    pub router: Router,
    pub provider: Arc<MockTextProvider>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub fn new(provider: MockTextProvider) -> Self {
        Self::with_config(provider, test_config())
    }

    pub fn with_config(provider: MockTextProvider, config: SummaryConfig) -> Self {
        let provider = Arc::new(provider);
        let text_provider: Arc<dyn TextProvider> = provider.clone();
        let router = build_router(AppState {
            config,
            text_provider,
        });

        Self { router, provider }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Send a JSON body to the summary route with the given method.
    pub async fn summary(&self, method: Method, body: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(SUMMARY_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(request).await
    }
}

/// Spawn the full application on a random port and return its base URL.
pub async fn spawn_app(provider: Arc<MockTextProvider>) -> String {
    let text_provider: Arc<dyn TextProvider> = provider;
    let app = Application::with_provider(test_config(), text_provider)
        .await
        .expect("Failed to build application");

    let address = format!("http://127.0.0.1:{}", app.port());

    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    // Wait for the server to accept connections
    let client = reqwest::Client::new();
    let health_url = format!("{}/health", address);
    for _ in 0..50 {
        if client.get(&health_url).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
    }

    address
}
