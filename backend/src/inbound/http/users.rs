//! User API handlers.
//!
//! ```text
//! POST /users               {"username":"ada","password":"pw","email":"ada@example.com"}
//! POST /auth/login          {"username":"ada","password":"pw"}
//! GET  /users/{id}/profile
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::{Credentials, DomainError, NewUser, RecordId, UserProfile};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Registration and login failures share one message on the wire.
const INVALID_USER_DATA: &str = "Invalid user data";
const INVALID_USER_ID: &str = "Bad Request: Invalid user ID";
const USER_NOT_FOUND: &str = "Not Found: User not found";

/// Registration request body for `POST /users`.
///
/// Fields are optional so that a missing field maps onto the contract's 400
/// rather than a framework-shaped deserialisation error.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

/// Response body for a successful registration.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    /// Store-assigned identifier of the new user.
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
}

/// Login request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Response body for a successful login.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Identifier of the first matching user.
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub user_id: String,
}

/// Viewable profile of a stored user. Never includes the password.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<UserProfile> for ProfileResponse {
    fn from(value: UserProfile) -> Self {
        Self {
            id: value.id.to_string(),
            username: value.username,
            email: value.email,
        }
    }
}

fn parse_register_request(payload: RegisterRequest) -> Result<NewUser, DomainError> {
    let RegisterRequest {
        username,
        password,
        email,
    } = payload;
    match (username, password, email) {
        (Some(username), Some(password), Some(email)) => Ok(NewUser {
            username,
            password,
            email,
        }),
        _ => Err(DomainError::invalid_request(INVALID_USER_DATA)),
    }
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = RegisterResponse),
        (status = 400, description = "Missing field or store rejection", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/users")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let new_user = parse_register_request(payload.into_inner())?;
    let id = state.users.create(new_user).await.map_err(|error| {
        warn!(%error, "user insert failed");
        DomainError::invalid_request(INVALID_USER_DATA)
    })?;
    Ok(HttpResponse::Created().json(RegisterResponse { id: id.to_string() }))
}

/// Authenticate a user by credential equality.
///
/// No-match and lookup failure are indistinguishable on the wire; both
/// produce the same 401 body.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 401, description = "No matching user, missing field, or store failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "login"
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    let LoginRequest { username, password } = payload.into_inner();
    let credentials = match (username, password) {
        (Some(username), Some(password)) => Credentials { username, password },
        _ => return Err(DomainError::unauthorized(INVALID_USER_DATA).into()),
    };
    let user_id = match state.users.find_by_credentials(&credentials).await {
        Ok(Some(id)) => id,
        Ok(None) => return Err(DomainError::unauthorized(INVALID_USER_DATA).into()),
        Err(error) => {
            warn!(%error, "login lookup failed");
            return Err(DomainError::unauthorized(INVALID_USER_DATA).into());
        }
    };
    Ok(web::Json(LoginResponse {
        user_id: user_id.to_string(),
    }))
}

/// Fetch a user's profile, password excluded.
#[utoipa::path(
    get,
    path = "/users/{id}/profile",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User profile", body = ProfileResponse),
        (status = 400, description = "Unparsable identifier or store failure", body = ErrorBody),
        (status = 404, description = "No such user", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "viewProfile"
)]
#[get("/users/{id}/profile")]
pub async fn view_profile(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ProfileResponse>> {
    let id: RecordId = path
        .parse()
        .map_err(|_| DomainError::invalid_request(INVALID_USER_ID))?;
    let profile = state
        .users
        .fetch_profile(&id)
        .await
        .map_err(|error| {
            warn!(%error, user_id = %id, "profile lookup failed");
            DomainError::invalid_request(INVALID_USER_ID)
        })?
        .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))?;
    Ok(web::Json(ProfileResponse::from(profile)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    use crate::outbound::persistence::MemoryStore;

    fn test_app(
        store: Arc<MemoryStore>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = HttpState::new(store.clone(), store.clone(), store);
        App::new()
            .app_data(web::Data::new(state))
            .service(register)
            .service(login)
            .service(view_profile)
    }

    #[actix_web::test]
    async fn register_returns_created_with_assigned_id() {
        let app = actix_test::init_service(test_app(Arc::new(MemoryStore::new()))).await;
        let request = actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({
                "username": "ada",
                "password": "pw",
                "email": "ada@example.com",
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(response).await;
        let id = body.get("id").and_then(Value::as_str).unwrap_or_default();
        assert!(!id.is_empty());
    }

    #[rstest]
    #[case(json!({ "password": "pw", "email": "a@b.c" }))]
    #[case(json!({ "username": "ada", "email": "a@b.c" }))]
    #[case(json!({ "username": "ada", "password": "pw" }))]
    #[case(json!({}))]
    #[actix_web::test]
    async fn register_rejects_missing_fields(#[case] payload: Value) {
        let app = actix_test::init_service(test_app(Arc::new(MemoryStore::new()))).await;
        let request = actix_test::TestRequest::post()
            .uri("/users")
            .set_json(payload)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("error").and_then(Value::as_str),
            Some(INVALID_USER_DATA)
        );
    }

    #[actix_web::test]
    async fn login_round_trips_the_stored_identifier() {
        let store = Arc::new(MemoryStore::new());
        let id = store.insert_user(NewUser {
            username: "ada".into(),
            password: "pw".into(),
            email: "ada@example.com".into(),
        });
        let app = actix_test::init_service(test_app(store)).await;
        let request = actix_test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({ "username": "ada", "password": "pw" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("userId").and_then(Value::as_str),
            Some(id.as_str())
        );
    }

    #[rstest]
    #[case(json!({ "username": "ada", "password": "wrong" }))]
    #[case(json!({ "username": "nobody", "password": "pw" }))]
    #[case(json!({ "username": "ada" }))]
    #[case(json!({}))]
    #[actix_web::test]
    async fn login_collapses_all_failures_to_unauthorised(#[case] payload: Value) {
        let store = Arc::new(MemoryStore::new());
        store.insert_user(NewUser {
            username: "ada".into(),
            password: "pw".into(),
            email: "ada@example.com".into(),
        });
        let app = actix_test::init_service(test_app(store)).await;
        let request = actix_test::TestRequest::post()
            .uri("/auth/login")
            .set_json(payload)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("error").and_then(Value::as_str),
            Some(INVALID_USER_DATA)
        );
    }

    #[actix_web::test]
    async fn profile_never_exposes_the_password() {
        let store = Arc::new(MemoryStore::new());
        let id = store.insert_user(NewUser {
            username: "ada".into(),
            password: "super-secret".into(),
            email: "ada@example.com".into(),
        });
        let app = actix_test::init_service(test_app(store)).await;
        let request = actix_test::TestRequest::get()
            .uri(&format!("/users/{id}/profile"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert!(body.get("password").is_none());
        assert_eq!(body.get("username").and_then(Value::as_str), Some("ada"));
        assert_eq!(
            body.get("email").and_then(Value::as_str),
            Some("ada@example.com")
        );
    }

    #[actix_web::test]
    async fn profile_distinguishes_bad_ids_from_missing_users() {
        let app = actix_test::init_service(test_app(Arc::new(MemoryStore::new()))).await;

        let malformed = actix_test::TestRequest::get()
            .uri("/users/not-a-real-id/profile")
            .to_request();
        let response = actix_test::call_service(&app, malformed).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("error").and_then(Value::as_str),
            Some(INVALID_USER_ID)
        );

        let absent = actix_test::TestRequest::get()
            .uri("/users/507f1f77bcf86cd799439011/profile")
            .to_request();
        let response = actix_test::call_service(&app, absent).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("error").and_then(Value::as_str),
            Some(USER_NOT_FOUND)
        );
    }
}
