use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::error::WebError;
use crate::state::Mailer;

use super::dto::{ContactRequest, MailResponse};
use super::services;

/// Transport failures are reported in the payload instead of as an error
#[utoipa::path(
    post,
    path = "/api/mail",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Email sent", body = MailResponse),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Mail transport failed", body = MailResponse)
    ),
    tag = "contact"
)]
pub async fn send_mail(
    State(mailer): State<Mailer>,
    Json(req): Json<ContactRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    match services::send_contact_message(mailer.as_ref(), req).await {
        Ok(()) => Ok(Json(MailResponse::sent()).into_response()),
        Err(e) => {
            tracing::error!("An error occurred: {}", e);
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MailResponse::failed(e.to_string())),
            )
                .into_response())
        }
    }
}
