//! Driver API handlers.
//!
//! ```text
//! PATCH /drivers/{id}/status    {"status":"active"}
//! GET   /drivers/{id}/earnings
//! ```

use actix_web::{get, patch, web};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::{DomainError, DriverStatus, RecordId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

const MISSING_STATUS: &str = "Bad Request: Missing status in request body";
const INVALID_DRIVER_ID_OR_DATA: &str = "Bad Request: Invalid driver ID or data";
const INVALID_DRIVER_ID: &str = "Bad Request: Invalid driver ID";
const DRIVER_NOT_FOUND_SHORT: &str = "Driver not found";
const DRIVER_NOT_FOUND: &str = "Not Found: Driver not found";

/// Request body for `PATCH /drivers/{id}/status`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

/// Response body for a successful status update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusResponse {
    /// Number of documents the update modified.
    #[schema(example = 1)]
    pub updated: u64,
}

/// Response body for the earnings view.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EarningsResponse {
    /// Accumulated earnings; zero when the stored record has none.
    #[schema(example = 0)]
    pub earnings: f64,
}

/// Update a driver's availability status.
///
/// The status check precedes identifier parsing, so a missing status wins
/// over a malformed id. The 404 keys on the modified count: updating a
/// driver to its current status reports nothing modified and lands there.
#[utoipa::path(
    patch,
    path = "/drivers/{id}/status",
    params(("id" = String, Path, description = "Driver identifier")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = UpdateStatusResponse),
        (status = 400, description = "Missing status, unparsable identifier, or store failure", body = ErrorBody),
        (status = 404, description = "No document modified", body = ErrorBody)
    ),
    tags = ["drivers"],
    operation_id = "updateDriverStatus"
)]
#[patch("/drivers/{id}/status")]
pub async fn update_driver_status(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateStatusRequest>,
) -> ApiResult<web::Json<UpdateStatusResponse>> {
    let status = payload
        .into_inner()
        .status
        .and_then(|raw| DriverStatus::new(raw).ok())
        .ok_or_else(|| DomainError::invalid_request(MISSING_STATUS))?;
    let id: RecordId = path
        .parse()
        .map_err(|_| DomainError::invalid_request(INVALID_DRIVER_ID_OR_DATA))?;
    let updated = state
        .drivers
        .set_status(&id, &status)
        .await
        .map_err(|error| {
            warn!(%error, driver_id = %id, "status update failed");
            DomainError::invalid_request(INVALID_DRIVER_ID_OR_DATA)
        })?;
    if updated == 0 {
        return Err(DomainError::not_found(DRIVER_NOT_FOUND_SHORT).into());
    }
    Ok(web::Json(UpdateStatusResponse { updated }))
}

/// Fetch a driver's earnings, defaulting to zero when unset.
#[utoipa::path(
    get,
    path = "/drivers/{id}/earnings",
    params(("id" = String, Path, description = "Driver identifier")),
    responses(
        (status = 200, description = "Driver earnings", body = EarningsResponse),
        (status = 400, description = "Unparsable identifier or store failure", body = ErrorBody),
        (status = 404, description = "No such driver", body = ErrorBody)
    ),
    tags = ["drivers"],
    operation_id = "driverEarnings"
)]
#[get("/drivers/{id}/earnings")]
pub async fn driver_earnings(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<EarningsResponse>> {
    let id: RecordId = path
        .parse()
        .map_err(|_| DomainError::invalid_request(INVALID_DRIVER_ID))?;
    let earnings = state
        .drivers
        .fetch_earnings(&id)
        .await
        .map_err(|error| {
            warn!(%error, driver_id = %id, "earnings lookup failed");
            DomainError::invalid_request(INVALID_DRIVER_ID)
        })?
        .ok_or_else(|| DomainError::not_found(DRIVER_NOT_FOUND))?;
    Ok(web::Json(EarningsResponse { earnings }))
}
