//! End-to-end tests for the HTTP surface: the router is bound to an
//! ephemeral port and driven with a real client against mocked LLM and Jira
//! servers.

use std::net::SocketAddr;

use anyhow::Result;
use jabber_assistant::Assistant;
use jabber_cli::cli::serve::router;
use jabber_llm::CompletionClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mount a chat-completions mock whose every reply is `content`
async fn mock_llm(content: &str) -> MockServer {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/v1/chat/completions"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "choices": [ { "message": { "role": "assistant", "content": content } } ]
    })))
    .mount(&server)
    .await;
  server
}

/// Bind the router on an ephemeral port and return its address
async fn spawn_app(llm: &MockServer, jira: &MockServer) -> Result<SocketAddr> {
  let assistant = Assistant::new(
    CompletionClient::new(&format!("{}/v1/chat/completions", llm.uri()), "test-model", "test-key"),
    jabber_jira::create_jira_client(&jira.uri(), "test@example.com", "test_token"),
  );
  let app = router(assistant, "http://localhost:5173")?;

  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
  let addr = listener.local_addr()?;
  tokio::spawn(async move {
    let _ = axum::serve(listener, app).await;
  });

  Ok(addr)
}

#[tokio::test]
async fn test_process_input_empty_input() -> Result<()> {
  let llm = MockServer::start().await;
  let jira = MockServer::start().await;
  let addr = spawn_app(&llm, &jira).await?;

  let response: serde_json::Value = reqwest::Client::new()
    .post(format!("http://{addr}/process-input"))
    .json(&serde_json::json!({ "input": "" }))
    .send()
    .await?
    .json()
    .await?;

  assert_eq!(response["response"], "No input provided. Please try again.");

  Ok(())
}

#[tokio::test]
async fn test_process_input_exit_round_trip() -> Result<()> {
  let llm = mock_llm("exit").await;
  let jira = MockServer::start().await;
  let addr = spawn_app(&llm, &jira).await?;

  let response: serde_json::Value = reqwest::Client::new()
    .post(format!("http://{addr}/process-input"))
    .json(&serde_json::json!({ "input": "goodbye" }))
    .send()
    .await?
    .json()
    .await?;

  assert_eq!(response["response"], "Thank you for using the Jira Assistant. Goodbye!");

  Ok(())
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() -> Result<()> {
  let llm = MockServer::start().await;
  let jira = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/rest/api/3/myself"))
    .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
        "errorMessages": ["Authentication failed"],
        "errors": {}
    })))
    .mount(&jira)
    .await;

  let addr = spawn_app(&llm, &jira).await?;

  let response = reqwest::Client::new()
    .post(format!("http://{addr}/login"))
    .json(&serde_json::json!({
        "email": "wrong@example.com",
        "api_token": "bad-token",
        "jira_url": jira.uri()
    }))
    .send()
    .await?;

  assert_eq!(response.status(), 401);
  let body: serde_json::Value = response.json().await?;
  assert_eq!(body["error"], "Authentication failed");

  Ok(())
}

#[tokio::test]
async fn test_login_accepts_valid_credentials() -> Result<()> {
  let llm = MockServer::start().await;
  let jira = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/rest/api/3/myself"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "accountId": "5f9b5b5b5b5b5b5b5b5b5b5b",
        "displayName": "Test User",
        "emailAddress": "test@example.com"
    })))
    .mount(&jira)
    .await;

  let addr = spawn_app(&llm, &jira).await?;

  let response = reqwest::Client::new()
    .post(format!("http://{addr}/login"))
    .json(&serde_json::json!({
        "email": "test@example.com",
        "api_token": "test_token",
        "jira_url": jira.uri()
    }))
    .send()
    .await?;

  assert_eq!(response.status(), 200);
  let body: serde_json::Value = response.json().await?;
  assert_eq!(body["message"], "Authentication successful");
  assert_eq!(body["user"]["displayName"], "Test User");

  Ok(())
}
