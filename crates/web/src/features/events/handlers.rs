use axum::{Json, extract::State};
use axum_extra::extract::Query;
use storage::dto::{
    event::EventResponse,
    roster::{RosterEntry, RosterQuery},
};

use crate::error::WebError;
use crate::state::Store;

use super::services;

#[utoipa::path(
    get,
    path = "/api/event",
    params(RosterQuery),
    responses(
        (status = 200, description = "Roster of the event, sorted by lane", body = Vec<RosterEntry>),
        (status = 400, description = "Unknown event name or gender")
    ),
    tag = "events"
)]
pub async fn show_event_roster(
    State(store): State<Store>,
    Query(query): Query<RosterQuery>,
) -> Result<Json<Vec<RosterEntry>>, WebError> {
    let roster = services::roster_for(
        store.as_ref(),
        &query.event,
        &query.div,
        query.gender.as_deref(),
    )
    .await?;

    Ok(Json(roster))
}

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List all events", body = Vec<EventResponse>)
    ),
    tag = "events"
)]
pub async fn list_events(State(store): State<Store>) -> Result<Json<Vec<EventResponse>>, WebError> {
    let events = services::list_events(store.as_ref()).await?;

    let response: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();

    Ok(Json(response))
}
