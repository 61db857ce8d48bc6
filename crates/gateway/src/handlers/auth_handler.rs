//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use common::{AppError, AppResult};
use domain::{GrantedAuthority, Password};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Authenticated principal
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PrincipalResponse {
    #[schema(example = "alice")]
    pub username: String,
    pub authorities: Vec<GrantedAuthority>,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Authenticate a username and password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = PrincipalResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<PrincipalResponse>> {
    let found = match state.accounts.load_user_by_username(&payload.username).await {
        Ok(details) => Some(details),
        Err(AppError::AccountNotFound(username)) => {
            tracing::info!(username = %username, "Login for unknown account");
            None
        }
        Err(e) => return Err(e),
    };

    // Unknown usernames still run a full hash verification
    let stored = match &found {
        Some(details) => Password::from_hash(details.password.as_str()),
        None => Password::unknown_account(),
    };
    let verified = stored.verify(&payload.password);

    match found {
        Some(details) if verified => Ok(Json(PrincipalResponse {
            username: details.username,
            authorities: details.authorities,
        })),
        _ => Err(AppError::InvalidCredentials),
    }
}
