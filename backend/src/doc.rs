//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated specification covering every REST
//! endpoint and the shared error envelope. Swagger UI serves it at `/docs`
//! in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::admin::AnalyticsResponse;
use crate::inbound::http::drivers::{
    EarningsResponse, UpdateStatusRequest, UpdateStatusResponse,
};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::users::{
    LoginRequest, LoginResponse, ProfileResponse, RegisterRequest, RegisterResponse,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kerbside backend API",
        description = "Ride-hailing platform endpoints: registration, login, profiles, driver status and earnings, admin operations."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::users::view_profile,
        crate::inbound::http::drivers::update_driver_status,
        crate::inbound::http::drivers::driver_earnings,
        crate::inbound::http::admin::block_user,
        crate::inbound::http::admin::analytics,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RegisterRequest,
        RegisterResponse,
        LoginRequest,
        LoginResponse,
        ProfileResponse,
        UpdateStatusRequest,
        UpdateStatusResponse,
        EarningsResponse,
        AnalyticsResponse,
        ErrorBody,
    )),
    tags(
        (name = "users", description = "Registration, login, and profiles"),
        (name = "drivers", description = "Driver status and earnings"),
        (name = "admin", description = "User blocking and analytics"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/users",
            "/auth/login",
            "/users/{id}/profile",
            "/drivers/{id}/status",
            "/drivers/{id}/earnings",
            "/admin/users/{id}",
            "/admin/analytics",
            "/health/ready",
            "/health/live",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing OpenAPI entry for {path}"
            );
        }
    }

    #[test]
    fn error_body_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.as_ref().expect("components");
        assert!(components.schemas.contains_key("ErrorBody"));
    }
}
