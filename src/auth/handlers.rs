use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, MeResponse, PublicUser, PublicUserDetails, RegisterRequest},
        jwt::{AuthUser, JwtKeys},
        password::{hash_password, verify_password},
        store::User,
    },
    error::ApiError,
    state::AppState,
};

const MIN_PASSWORD_LEN: usize = 6;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(get_me))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let m = state.messages;
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::Validation(m.invalid_email.into()));
    }
    if payload.password.len() < MIN_PASSWORD_LEN {
        warn!("password too short");
        return Err(ApiError::Validation(m.password_too_short.into()));
    }
    if payload.name.trim().is_empty() {
        warn!("name missing");
        return Err(ApiError::Validation(m.name_required.into()));
    }

    let hash = hash_password(&payload.password)
        .map_err(|e| ApiError::internal(m.internal_error, e))?;
    let user = User::new(payload.email, hash, payload.name.trim().to_string());

    // The store rejects the duplicate atomically; no pre-check lookup, so two
    // racing registrations cannot both pass.
    if state.users.insert(user.clone()).await.is_err() {
        warn!(email = %user.email, "email already registered");
        return Err(ApiError::Conflict(m.email_taken.into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys
        .sign(user.id)
        .map_err(|e| ApiError::internal(m.internal_error, e))?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            message: m.registered,
            token,
            user: PublicUser::from(&user),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let m = state.messages;
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::Validation(m.invalid_email.into()));
    }
    if payload.password.is_empty() {
        return Err(ApiError::Validation(m.invalid_credentials.into()));
    }

    // Unknown email and wrong password produce the same message, so the
    // endpoint cannot be used to probe which emails are registered.
    let user = match state.users.find_by_email(&payload.email).await {
        Some(u) => u,
        None => {
            warn!(email = %payload.email, "login unknown email");
            return Err(ApiError::InvalidCredentials(m.invalid_credentials.into()));
        }
    };

    let ok = verify_password(&payload.password, &user.password_hash)
        .map_err(|e| ApiError::internal(m.internal_error, e))?;
    if !ok {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials(m.invalid_credentials.into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys
        .sign(user.id)
        .map_err(|e| ApiError::internal(m.internal_error, e))?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(AuthResponse {
        success: true,
        message: m.logged_in,
        token,
        user: PublicUser::from(&user),
    }))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<MeResponse>, ApiError> {
    let m = state.messages;
    let user = state
        .users
        .get(user_id)
        .await
        .ok_or_else(|| ApiError::Auth(m.invalid_token.into()))?;

    Ok(Json(MeResponse {
        success: true,
        user: PublicUserDetails::from(&user),
    }))
}
