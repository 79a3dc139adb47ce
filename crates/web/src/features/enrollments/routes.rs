use axum::{Router, routing::post};

use super::handlers::enroll_bowler;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/enrollments", post(enroll_bowler))
}
