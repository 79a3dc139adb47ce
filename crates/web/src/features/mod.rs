use axum::Router;

use crate::state::AppState;

pub mod bowlers;
pub mod contact;
pub mod enrollments;
pub mod events;

/// Every `/api` route
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(bowlers::routes::routes())
        .merge(events::routes::routes())
        .merge(enrollments::routes::routes())
        .merge(contact::routes::routes())
}
