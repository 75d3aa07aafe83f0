//! API route handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use roundtable_core::Discussion;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Failures that escape a discussion run
///
/// Completion errors never land here; they become `Error: ...` lines inside
/// the transcript.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("discussion task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "chat request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}

// ========== Chat Routes ==========

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Run a full discussion for the posted question
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    tracing::info!(chars = req.message.len(), "chat request");

    // Completion calls block, so the run goes to the blocking pool
    let response = tokio::task::spawn_blocking(move || {
        Discussion::new(state.client.as_ref(), &state.roles)
            .with_sampling(state.sampling)
            .run_rendered(&req.message)
    })
    .await?;

    Ok(Json(ChatResponse { response }))
}

// ========== Health & UI ==========

/// Health check, independent of any discussion
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Serve `index.html` from the static directory, or the built-in page
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let path = state.static_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Html(html),
        Err(_) => Html(FALLBACK_INDEX.to_string()),
    }
}

const FALLBACK_INDEX: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Roundtable</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #1a1a2e;
            color: #eee;
            max-width: 860px;
            margin: 2rem auto;
            padding: 0 1rem;
        }
        h1 { color: #00d4ff; }
        textarea {
            width: 100%;
            min-height: 4rem;
            background: #16213e;
            color: #eee;
            border: 1px solid #0f3460;
            border-radius: 8px;
            padding: 0.5rem;
        }
        button {
            margin-top: 0.5rem;
            background: #0f3460;
            color: #eee;
            border: none;
            border-radius: 4px;
            padding: 0.5rem 1rem;
        }
        pre {
            white-space: pre-wrap;
            background: #16213e;
            padding: 1rem;
            border-radius: 8px;
        }
    </style>
</head>
<body>
    <h1>Roundtable</h1>
    <p>Ask a question and the Project Manager, AI Architect and Domain Expert will discuss it.</p>
    <textarea id="question" placeholder="How do I build a recommendation system?"></textarea>
    <button id="ask">Ask the team</button>
    <pre id="transcript"></pre>
    <script>
        document.getElementById('ask').addEventListener('click', async () => {
            const out = document.getElementById('transcript');
            out.textContent = 'The team is discussing...';
            const res = await fetch('/chat', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ message: document.getElementById('question').value })
            });
            const data = await res.json();
            out.textContent = data.response ?? data.detail;
        });
    </script>
</body>
</html>
"#;
