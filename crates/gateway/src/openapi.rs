//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::account_handler::{
    AvailabilityRequest, AvailabilityResponse, RegisterRequest, RegistrationResponse,
};
use crate::handlers::auth_handler::{LoginRequest, PrincipalResponse};
use crate::handlers::view_handler::{ViewLoadRequest, ViewLoadResponse};
use domain::{AccountResponse, GrantedAuthority, Notification, Severity, TargetedNotification};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::account_handler::register,
        crate::handlers::account_handler::check_availability,
        crate::handlers::auth_handler::login,
        crate::handlers::view_handler::load_view,
        crate::handlers::view_handler::discard_view,
    ),
    components(
        schemas(
            RegisterRequest,
            RegistrationResponse,
            AvailabilityRequest,
            AvailabilityResponse,
            LoginRequest,
            PrincipalResponse,
            ViewLoadRequest,
            ViewLoadResponse,
            AccountResponse,
            GrantedAuthority,
            Notification,
            Severity,
            TargetedNotification,
        )
    ),
    tags(
        (name = "Accounts", description = "Registration and username availability"),
        (name = "Authentication", description = "Credential checks"),
        (name = "Views", description = "View lifecycle notifications")
    )
)]
pub struct ApiDoc;
