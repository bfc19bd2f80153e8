// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Test that agent failures surface as a generic internal error
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use server::AppState;
use server::config::ServerConfig;
use tbbot::{AgentError, Message, MessageProcessor, Response};

mod common;

struct FailingAgent(&'static str);

impl MessageProcessor for FailingAgent {
    fn handle(&self, _message: &Message) -> Result<Response, AgentError> {
        Err(AgentError::Internal(self.0.to_owned()))
    }
}

fn spawn_failing_app(reason: &'static str) -> String {
    common::spawn_app(AppState::new(
        ServerConfig::default(),
        Arc::new(FailingAgent(reason)),
    ))
}

#[tokio::test]
async fn agent_failure_returns_500() {
    let addr = spawn_failing_app("Simulated internal error");

    let response = Client::new()
        .post(format!("{addr}/chat"))
        .body(serde_json::json!({ "message": "hello" }).to_string())
        .header("Content-Type", "application/json")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.text().await.expect("Failed to read response body");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "detail": "Internal server error" }));
}

#[tokio::test]
async fn agent_failure_does_not_leak_details() {
    let addr = spawn_failing_app("Database connection failed: password=secret123");

    let response = Client::new()
        .post(format!("{addr}/chat"))
        .body(serde_json::json!({ "message": "hello" }).to_string())
        .header("Content-Type", "application/json")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response
        .text()
        .await
        .expect("Failed to read response body")
        .to_lowercase();
    assert!(!body.contains("password"));
    assert!(!body.contains("secret"));
    assert!(!body.contains("database"));
}

#[tokio::test]
async fn validation_runs_before_agent() {
    // An empty message never reaches the failing agent
    let addr = spawn_failing_app("should not be called");

    let response = Client::new()
        .post(format!("{addr}/chat"))
        .body(serde_json::json!({ "message": "" }).to_string())
        .header("Content-Type", "application/json")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
