use axum::{Router, routing::get};

use super::handlers::{list_events, show_event_roster};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/event", get(show_event_roster))
        .route("/events", get(list_events))
}
