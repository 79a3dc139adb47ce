use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::enrollment::{EnrollRequest, EnrollResponse},
    models::EventName,
};
use validator::Validate;

use crate::error::WebError;
use crate::state::Store;

use super::services;

#[utoipa::path(
    post,
    path = "/api/enrollments",
    request_body = EnrollRequest,
    responses(
        (status = 201, description = "Bowler placed in the event", body = EnrollResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Bowler or event not found")
    ),
    tag = "enrollments"
)]
pub async fn enroll_bowler(
    State(store): State<Store>,
    Json(req): Json<EnrollRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event_name: EventName = req.event_name.parse().map_err(storage::StorageError::from)?;

    let participation_id = services::enroll(
        store.as_ref(),
        &req.bowler_name,
        event_name,
        req.division,
        req.lane,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(EnrollResponse { participation_id })).into_response())
}
