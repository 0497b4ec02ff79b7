use axum::{extract::State, routing::post, Json, Router};
use time::OffsetDateTime;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    assistant::{
        dto::{
            ChatRequest, ChatResponse, CompareRequest, CompareResponse, QuizRequest, QuizResponse,
            SummaryRequest, SummaryResponse,
        },
        gateway::Answer,
    },
    auth::jwt::AuthUser,
    error::ApiError,
    state::AppState,
};

pub fn ai_routes() -> Router<AppState> {
    Router::new()
        .route("/ai/chat", post(chat))
        .route("/ai/summary", post(summary))
        .route("/ai/compare", post(compare))
        .route("/ai/quiz", post(quiz))
}

/// Client-supplied ids are opaque strings; anything that is not a known uuid
/// resolves like an unknown document.
fn parse_document_ids(state: &AppState, ids: &[String]) -> Result<Vec<Uuid>, ApiError> {
    ids.iter()
        .map(|raw| {
            Uuid::parse_str(raw)
                .map_err(|_| ApiError::NotFound(state.messages.document_not_found.into()))
        })
        .collect()
}

#[instrument(skip(state, payload))]
pub async fn chat(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let ids = parse_document_ids(&state, &payload.document_ids)?;
    let answer = state.assistant.ask(user_id, &payload.message, &ids).await?;

    let demo = answer.is_fallback().then_some(true);
    let response = match answer {
        Answer::Provider(text) | Answer::Fallback(text) => text,
    };
    Ok(Json(ChatResponse {
        success: true,
        response,
        demo,
        timestamp: OffsetDateTime::now_utc(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn summary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let m = state.messages;
    let raw_id = payload
        .document_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::Validation(m.document_id_required.into()))?;
    let id = parse_document_ids(&state, std::slice::from_ref(&raw_id))?[0];

    let summary = state.assistant.summarize(user_id, id, payload.kind).await?;
    Ok(Json(SummaryResponse {
        success: true,
        summary,
        demo: true,
    }))
}

#[instrument(skip(state, payload))]
pub async fn compare(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    let m = state.messages;
    if payload.document_ids.len() < 2 {
        return Err(ApiError::Validation(m.compare_needs_two.into()));
    }
    let ids = parse_document_ids(&state, &payload.document_ids)?;

    let comparison = state
        .assistant
        .compare(user_id, &ids, payload.topic)
        .await?;
    Ok(Json(CompareResponse {
        success: true,
        comparison,
        demo: true,
    }))
}

#[instrument(skip(state, payload))]
pub async fn quiz(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let m = state.messages;
    let raw_id = payload
        .document_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::Validation(m.document_id_required.into()))?;
    let id = parse_document_ids(&state, std::slice::from_ref(&raw_id))?[0];

    let quiz = state
        .assistant
        .quiz(user_id, id, payload.difficulty)
        .await?;
    Ok(Json(QuizResponse {
        success: true,
        quiz,
        demo: true,
    }))
}
