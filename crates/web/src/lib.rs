use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;
pub mod mail;
pub mod state;

pub use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::bowlers::handlers::show_bowlers,
        features::bowlers::handlers::upsert_bowler,
        features::events::handlers::show_event_roster,
        features::events::handlers::list_events,
        features::enrollments::handlers::enroll_bowler,
        features::contact::handlers::send_mail,
    ),
    components(
        schemas(
            storage::dto::bowler::BowlerSummary,
            storage::dto::bowler::BowlerDetail,
            storage::dto::bowler::UpsertBowlerRequest,
            storage::dto::event::EventResponse,
            storage::dto::roster::RosterEntry,
            storage::dto::enrollment::EnrollRequest,
            storage::dto::enrollment::EnrollResponse,
            storage::models::Gender,
            storage::models::EventName,
            features::contact::dto::ContactRequest,
            features::contact::dto::MailResponse,
        )
    ),
    tags(
        (name = "bowlers", description = "Bowler listing and registration"),
        (name = "events", description = "Events and their rosters"),
        (name = "enrollments", description = "Lane assignments"),
        (name = "contact", description = "Contact form"),
    )
)]
pub struct ApiDoc;

async fn hello() -> &'static str {
    "Bowling tournament API"
}

/// Full application router, CORS open to every origin
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .nest("/api", features::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
