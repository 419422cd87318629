//! # HTTP Surface
//!
//! A small axum API mirroring the chat contract: one utterance in, one
//! response string out. The assistant holds no mutable state, so concurrent
//! requests are handled independently.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::routing::post;
use axum::{Json, Router};
use jabber_assistant::Assistant;
use jabber_core::config::ensure_url_scheme;
use jabber_core::output::print_info;
use jabber_jira::{JiraUser, create_jira_client};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::info;

/// Response when the request carries no usable input
const NO_INPUT: &str = "No input provided. Please try again.";

#[derive(Clone)]
struct AppState {
  assistant: Arc<Assistant>,
}

#[derive(Deserialize)]
struct ProcessRequest {
  #[serde(default)]
  input: Option<String>,
}

#[derive(Serialize)]
struct ProcessResponse {
  response: String,
}

#[derive(Deserialize)]
struct LoginRequest {
  email: String,
  api_token: String,
  jira_url: String,
}

#[derive(Serialize)]
struct LoginResponse {
  message: String,
  user: JiraUser,
}

#[derive(Serialize)]
struct LoginError {
  error: String,
  details: String,
}

/// Serve the assistant on `bind`, allowing browser calls from `cors_origin`
pub async fn serve(assistant: Assistant, bind: &str, cors_origin: &str) -> Result<()> {
  let app = router(assistant, cors_origin)?;

  let listener = tokio::net::TcpListener::bind(bind)
    .await
    .with_context(|| format!("Failed to bind {bind}"))?;

  print_info(&format!("Jabber is listening on http://{bind}"));
  info!(bind, cors_origin, "HTTP surface up");

  axum::serve(listener, app).await.context("Server error")
}

/// Build the application router; split out so tests can drive it directly
pub fn router(assistant: Assistant, cors_origin: &str) -> Result<Router> {
  let origin: HeaderValue = cors_origin
    .parse()
    .with_context(|| format!("Invalid CORS origin '{cors_origin}'"))?;

  let cors = CorsLayer::new()
    .allow_origin(origin)
    .allow_methods([Method::POST])
    .allow_headers([header::CONTENT_TYPE]);

  Ok(
    Router::new()
      .route("/process-input", post(process_input))
      .route("/login", post(login))
      .layer(cors)
      .with_state(AppState {
        assistant: Arc::new(assistant),
      }),
  )
}

/// POST /process-input: handle one utterance
async fn process_input(State(state): State<AppState>, Json(request): Json<ProcessRequest>) -> Json<ProcessResponse> {
  let input = request.input.unwrap_or_default();

  let response = if input.trim().is_empty() {
    NO_INPUT.to_string()
  } else {
    state.assistant.handle(&input).await
  };

  Json(ProcessResponse { response })
}

/// POST /login: validate Jira credentials by fetching the current user
async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, (StatusCode, Json<LoginError>)> {
  let base_url = ensure_url_scheme(&request.jira_url).map_err(|e| {
    (
      StatusCode::BAD_REQUEST,
      Json(LoginError {
        error: "Invalid Jira URL".to_string(),
        details: format!("{e:#}"),
      }),
    )
  })?;

  let client = create_jira_client(&base_url, &request.email, &request.api_token);

  match client.current_user().await {
    Ok(user) => Ok(Json(LoginResponse {
      message: "Authentication successful".to_string(),
      user,
    })),
    Err(e) => Err((
      StatusCode::UNAUTHORIZED,
      Json(LoginError {
        error: "Authentication failed".to_string(),
        details: format!("{e:#}"),
      }),
    )),
  }
}
