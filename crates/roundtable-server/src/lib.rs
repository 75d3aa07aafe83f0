//! Roundtable Server Library
//!
//! Provides the HTTP server for Roundtable's chat endpoint and web interface.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use roundtable_core::{build_client, RoleRegistry, RoundtableConfig, SamplingParams};
use std::sync::Once;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use state::AppState;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber (only once)
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(
                std::env::var("RUST_LOG").unwrap_or_else(|_| {
                    "roundtable_server=debug,roundtable_core=info,tower_http=debug".into()
                }),
            ))
            .with(tracing_subscriber::fmt::layer())
            .init();
    });
}

/// Build the Axum router with all routes
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.static_dir.clone();

    Router::new()
        // API routes
        .route("/chat", post(routes::chat))
        .route("/health", get(routes::health))
        // Web UI
        .route("/", get(routes::index))
        .nest_service("/static", ServeDir::new(static_dir))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Run the Roundtable web server
///
/// Fails before binding if no completion credentials are configured.
pub async fn run_server(config: RoundtableConfig) -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting Roundtable Server...");

    let client = build_client(&config.llm)?;
    let state = AppState::new(
        client,
        RoleRegistry::standard(),
        SamplingParams::from(&config.llm),
    )
    .with_static_dir(config.server.static_dir.clone());

    let app = build_router(state);

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use roundtable_core::{CompletionClient, CompletionRequest, LlmError, Step};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct CountingClient {
        calls: AtomicUsize,
    }

    impl CompletionClient for CountingClient {
        fn id(&self) -> &str {
            "counting"
        }

        fn model(&self) -> &str {
            "counting-1"
        }

        fn complete(&self, _request: &CompletionRequest) -> Result<String, LlmError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(format!("answer {}", n))
        }
    }

    struct DownClient;

    impl CompletionClient for DownClient {
        fn id(&self) -> &str {
            "down"
        }

        fn model(&self) -> &str {
            "none"
        }

        fn complete(&self, _request: &CompletionRequest) -> Result<String, LlmError> {
            Err(LlmError::Connection("connection refused".to_string()))
        }
    }

    fn app(client: Arc<dyn CompletionClient>, static_dir: &str) -> Router {
        let state = AppState::new(client, RoleRegistry::standard(), SamplingParams::default())
            .with_static_dir(static_dir);
        build_router(state)
    }

    fn counting() -> Arc<dyn CompletionClient> {
        Arc::new(CountingClient {
            calls: AtomicUsize::new(0),
        })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn chat_request(message: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::json!({ "message": message }).to_string(),
            ))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(counting(), "static")
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "status": "healthy" }));
    }

    #[tokio::test]
    async fn test_health_ignores_completion_state() {
        let response = app(Arc::new(DownClient), "static")
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_chat_returns_transcript() {
        let response = app(counting(), "static")
            .oneshot(chat_request("test?"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let text = json["response"].as_str().unwrap();

        assert!(text.starts_with("🎯 PROJECT MANAGER - OPENING\n"));
        assert!(text.contains("🏗️ AI ARCHITECT - RESPONSE\n"));
        assert_eq!(
            text.lines().filter(|l| *l == "-".repeat(60)).count(),
            Step::COUNT
        );
        assert!(text.contains(&format!("answer {}", Step::COUNT)));
    }

    #[tokio::test]
    async fn test_chat_with_failing_service_still_answers() {
        let response = app(Arc::new(DownClient), "static")
            .oneshot(chat_request("test?"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let text = json["response"].as_str().unwrap();
        assert_eq!(
            text.matches("Error: Connection error: connection refused").count(),
            Step::COUNT
        );
    }

    #[tokio::test]
    async fn test_chat_rejects_missing_message() {
        let request = Request::builder()
            .method("POST")
            .uri("/chat")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"question": "wrong field"}"#))
            .unwrap();

        let response = app(counting(), "static").oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_index_falls_back_to_builtin_page() {
        let response = app(counting(), "/nonexistent/roundtable-static")
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("<title>Roundtable</title>"));
    }
}
