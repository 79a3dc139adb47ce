use crate::mail::{ContactMessage, MailError, MailSender};

use super::dto::ContactRequest;

/// Forward a contact form submission to the operator
pub async fn send_contact_message(
    mailer: &dyn MailSender,
    request: ContactRequest,
) -> Result<(), MailError> {
    let message = ContactMessage {
        name: request.name,
        email: request.email,
        phone: request.phone,
        subject: request.subject,
        message: request.message,
    };

    mailer.send(&message).await?;

    tracing::info!(subject = %message.subject, "Contact message sent");

    Ok(())
}
