use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::interpreter::{AssistantKind, Query, ReplyData};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ReplyData>,
    pub timestamp: String,
}

/// POST /api/chatbot
///
/// Body `{ "query": string, "assistant"?: "pipeline" | "hiring" | "resume" }`.
/// The body is taken as loose JSON so a missing or non-string query is a 400,
/// while an unparseable body is a 500.
pub async fn handle_chat(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(body) = body.map_err(|e| AppError::Chatbot(e.body_text()))?;

    let query = body
        .get("query")
        .and_then(Value::as_str)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::Validation("Query is required".to_string()))?;

    let kind = match body.get("assistant") {
        None | Some(Value::Null) => AssistantKind::default(),
        Some(value) => value
            .as_str()
            .and_then(AssistantKind::parse)
            .ok_or_else(|| AppError::Validation(format!("Unknown assistant: {value}")))?,
    };

    state.chatbot_latency.wait().await;

    let assistant = state.assistants.get(kind);
    let reply = assistant.respond(&Query::new(query));
    info!(assistant = ?assistant.kind(), query, "Answered chatbot query");

    Ok(Json(ChatResponse {
        success: true,
        response: reply.content,
        data: reply.data,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}
