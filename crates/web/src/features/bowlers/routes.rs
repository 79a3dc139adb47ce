use axum::{Router, routing::get};

use super::handlers::{show_bowlers, upsert_bowler};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/bowlers", get(show_bowlers).put(upsert_bowler))
}
