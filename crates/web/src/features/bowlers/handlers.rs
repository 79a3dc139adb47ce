use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::dto::bowler::{BowlerDetail, BowlerQuery, BowlerSummary, UpsertBowlerRequest};
use validator::Validate;

use crate::error::WebError;
use crate::state::Store;

use super::services;

#[utoipa::path(
    get,
    path = "/api/bowlers",
    params(BowlerQuery),
    responses(
        (status = 200, description = "All bowlers for `id=all` (the default), otherwise the bowler detail or null", body = Vec<BowlerSummary>),
        (status = 400, description = "Id is neither `all` nor a number")
    ),
    tag = "bowlers"
)]
pub async fn show_bowlers(
    State(store): State<Store>,
    Query(query): Query<BowlerQuery>,
) -> Result<Response, WebError> {
    match query.id.as_deref().unwrap_or("all") {
        "all" => {
            let bowlers = services::list_bowlers(store.as_ref()).await?;
            let response: Vec<BowlerSummary> =
                bowlers.into_iter().map(BowlerSummary::from).collect();

            Ok(Json(response).into_response())
        }
        raw => {
            let id: i32 = raw
                .parse()
                .map_err(|_| WebError::BadRequest(format!("Invalid bowler id: {raw}")))?;
            let bowler = services::get_bowler(store.as_ref(), id).await?;

            Ok(Json(bowler.map(BowlerDetail::from)).into_response())
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/bowlers",
    request_body = UpsertBowlerRequest,
    responses(
        (status = 200, description = "Bowler created or replaced", body = BowlerDetail),
        (status = 400, description = "Validation error")
    ),
    tag = "bowlers"
)]
pub async fn upsert_bowler(
    State(store): State<Store>,
    Json(req): Json<UpsertBowlerRequest>,
) -> Result<Json<BowlerDetail>, WebError> {
    req.validate()?;

    let bowler = services::upsert_bowler(store.as_ref(), &req).await?;

    Ok(Json(BowlerDetail::from(bowler)))
}
