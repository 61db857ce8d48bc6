//! View lifecycle handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use account_service_lib::presentation::ViewLoad;
use common::{AppError, AppResult};
use domain::{MessageContext, TargetedNotification};

use crate::state::AppState;

/// Render notification for a view, with the welcome attributes
#[derive(Debug, Deserialize, ToSchema)]
pub struct ViewLoadRequest {
    /// True when the render follows a form submission
    #[serde(default)]
    pub postback: bool,
    #[schema(example = "Ada")]
    pub first_name: Option<String>,
    #[schema(example = "Lovelace")]
    pub last_name: Option<String>,
}

/// Outcome of a view load
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ViewLoadResponse {
    pub greeted: bool,
    pub messages: Vec<TargetedNotification>,
}

/// Create view routes
pub fn view_routes() -> Router<AppState> {
    Router::new()
        .route("/:view_id", delete(discard_view))
        .route("/:view_id/load", post(load_view))
}

/// Notify that a view was rendered; greets once per view instance
#[utoipa::path(
    post,
    path = "/views/{view_id}/load",
    tag = "Views",
    params(
        ("view_id" = String, Path, description = "View instance id")
    ),
    request_body = ViewLoadRequest,
    responses(
        (status = 200, description = "View load handled", body = ViewLoadResponse)
    )
)]
pub async fn load_view(
    State(state): State<AppState>,
    Path(view_id): Path<String>,
    Json(payload): Json<ViewLoadRequest>,
) -> AppResult<Json<ViewLoadResponse>> {
    let event = ViewLoad {
        postback: payload.postback,
        first_name: payload.first_name,
        last_name: payload.last_name,
    };
    let mut messages = MessageContext::new();

    let greeted = state.views.load(&view_id, &event, &mut messages)?;

    Ok(Json(ViewLoadResponse {
        greeted,
        messages: messages.into_messages(),
    }))
}

/// End a view instance; the next load of this id greets again
#[utoipa::path(
    delete,
    path = "/views/{view_id}",
    tag = "Views",
    params(
        ("view_id" = String, Path, description = "View instance id")
    ),
    responses(
        (status = 204, description = "View instance discarded"),
        (status = 404, description = "Unknown view id")
    )
)]
pub async fn discard_view(
    State(state): State<AppState>,
    Path(view_id): Path<String>,
) -> AppResult<StatusCode> {
    if state.views.discard(&view_id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
