//! Admin API handlers.
//!
//! ```text
//! DELETE /admin/users/{id}
//! GET    /admin/analytics
//! ```
//!
//! Nothing guards these routes; the wire contract has no authentication
//! anywhere, admin surface included.

use actix_web::{HttpResponse, delete, get, web};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::{DomainError, RecordId, UsageTotals};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

const INVALID_USER_ID: &str = "Invalid user ID";
const USER_NOT_FOUND: &str = "User not found";
const ANALYTICS_FAILED: &str = "Failed to fetch system analytics";

/// Response body for the analytics view.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    #[schema(example = 42)]
    pub total_users: u64,
    #[schema(example = 7)]
    pub total_drivers: u64,
    #[schema(example = 1305)]
    pub total_rides: u64,
}

impl From<UsageTotals> for AnalyticsResponse {
    fn from(value: UsageTotals) -> Self {
        Self {
            total_users: value.total_users,
            total_drivers: value.total_drivers,
            total_rides: value.total_rides,
        }
    }
}

/// Block a user by deleting their record.
#[utoipa::path(
    delete,
    path = "/admin/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Unparsable identifier or store failure", body = ErrorBody),
        (status = 404, description = "Nothing deleted", body = ErrorBody)
    ),
    tags = ["admin"],
    operation_id = "blockUser"
)]
#[delete("/admin/users/{id}")]
pub async fn block_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id: RecordId = path
        .parse()
        .map_err(|_| DomainError::invalid_request(INVALID_USER_ID))?;
    let deleted = state.users.delete(&id).await.map_err(|err| {
        warn!(error = %err, user_id = %id, "user delete failed");
        DomainError::invalid_request(INVALID_USER_ID)
    })?;
    if deleted == 0 {
        return Err(DomainError::not_found(USER_NOT_FOUND).into());
    }
    Ok(HttpResponse::NoContent().finish())
}

/// Report the independent cardinalities of the three collections.
#[utoipa::path(
    get,
    path = "/admin/analytics",
    responses(
        (status = 200, description = "Collection counts", body = AnalyticsResponse),
        (status = 500, description = "A count failed", body = ErrorBody)
    ),
    tags = ["admin"],
    operation_id = "systemAnalytics"
)]
#[get("/admin/analytics")]
pub async fn analytics(state: web::Data<HttpState>) -> ApiResult<web::Json<AnalyticsResponse>> {
    let totals = state.analytics.usage_totals().await.map_err(|err| {
        error!(error = %err, "analytics counts failed");
        DomainError::internal(ANALYTICS_FAILED)
    })?;
    Ok(web::Json(AnalyticsResponse::from(totals)))
}
