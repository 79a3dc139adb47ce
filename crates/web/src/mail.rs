use async_trait::async_trait;
use lettre::{
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    address::AddressError, message::Mailbox, transport::smtp::authentication::Credentials,
};
use thiserror::Error;

use crate::config::MailConfig;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid address {address:?}: {source}")]
    Address {
        address: String,
        #[source]
        source: AddressError,
    },

    #[error("Failed to build email: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("Failed to send email: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// A contact form submission addressed to the tournament operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nPhone: {}\nMessage: {}",
            self.name,
            self.email,
            self.phone.as_deref().unwrap_or(""),
            self.message
        )
    }
}

#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError>;
}

fn parse_address(address: &str) -> Result<Address, MailError> {
    address.parse().map_err(|source| MailError::Address {
        address: address.to_string(),
        source,
    })
}

/// Sends contact messages through an SMTP relay using STARTTLS
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    recipient: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.server)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: Mailbox::new(None, parse_address(&config.from)?),
            recipient: Mailbox::new(None, parse_address(&config.recipient)?),
        })
    }

    fn build(&self, message: &ContactMessage) -> Result<Message, MailError> {
        let reply_to = Mailbox::new(Some(message.name.clone()), parse_address(&message.email)?);

        let email = Message::builder()
            .from(self.from.clone())
            .reply_to(reply_to)
            .to(self.recipient.clone())
            .subject(message.subject.clone())
            .body(message.body())?;

        Ok(email)
    }
}

#[async_trait]
impl MailSender for SmtpMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        let email = self.build(message)?;
        self.transport.send(email).await?;
        Ok(())
    }
}
