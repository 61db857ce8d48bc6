//! Registration and username availability handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use account_service_lib::presentation::{check_availability_interactive, AvailabilityCheck};
use common::AppResult;
use domain::{
    AccountResponse, MessageContext, NewAccount, Password, Rejection, TargetedNotification,
    MAX_USERNAME_LENGTH, MIN_USERNAME_LENGTH,
};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Account registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Login name
    #[validate(length(
        min = MIN_USERNAME_LENGTH,
        max = MAX_USERNAME_LENGTH,
        message = "Username must be 1 to 64 characters"
    ))]
    #[schema(example = "alice")]
    pub username: String,
    /// Password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
}

/// Registration outcome with the notifications raised while handling it
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponse {
    pub created: bool,
    pub account: Option<AccountResponse>,
    pub messages: Vec<TargetedNotification>,
}

/// Username typed into a form field
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AvailabilityRequest {
    /// Client id of the input element the result is reported against
    #[validate(length(min = 1, message = "Client id is required"))]
    #[schema(example = "register:username")]
    pub client_id: String,
    /// Entered username
    #[validate(length(
        min = MIN_USERNAME_LENGTH,
        max = MAX_USERNAME_LENGTH,
        message = "Username must be 1 to 64 characters"
    ))]
    #[schema(example = "alice")]
    pub value: String,
}

/// Availability outcome with the field-level notification
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityResponse {
    pub available: bool,
    pub messages: Vec<TargetedNotification>,
}

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(register))
        .route("/availability", post(check_availability))
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/accounts",
    tag = "Accounts",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = RegistrationResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username not available", body = RegistrationResponse),
        (status = 503, description = "Account could not be stored", body = RegistrationResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegistrationResponse>)> {
    let password = Password::new(&payload.password)?;
    let mut messages = MessageContext::new();

    let outcome = state
        .accounts
        .create_account(
            NewAccount::new(payload.username, password.into_string()),
            &mut messages,
        )
        .await;

    let (status, account) = match outcome {
        Ok(account) => (StatusCode::CREATED, Some(AccountResponse::from(account))),
        Err(Rejection::UsernameUnavailable(_)) => (StatusCode::CONFLICT, None),
        Err(Rejection::Persistence(_)) => (StatusCode::SERVICE_UNAVAILABLE, None),
    };

    Ok((
        status,
        Json(RegistrationResponse {
            created: account.is_some(),
            account,
            messages: messages.into_messages(),
        }),
    ))
}

/// Check whether a username is free and report it against the input field
#[utoipa::path(
    post,
    path = "/accounts/availability",
    tag = "Accounts",
    request_body = AvailabilityRequest,
    responses(
        (status = 200, description = "Availability checked", body = AvailabilityResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn check_availability(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AvailabilityRequest>,
) -> AppResult<Json<AvailabilityResponse>> {
    let event = AvailabilityCheck::new(payload.client_id, payload.value);
    let mut messages = MessageContext::new();

    let available =
        check_availability_interactive(state.accounts.as_ref(), &event, &mut messages).await?;

    Ok(Json(AvailabilityResponse {
        available,
        messages: messages.into_messages(),
    }))
}
