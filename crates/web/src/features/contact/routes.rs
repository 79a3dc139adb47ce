use axum::{Router, routing::post};

use super::handlers::send_mail;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/mail", post(send_mail))
}
