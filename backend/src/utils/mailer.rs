use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;

use crate::config::app_config::SmtpSettings;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("smtp transport failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// A fully formatted inquiry, ready for whichever transport is configured.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactEmail {
    pub sender_name: String,
    pub sender_email: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: ContactEmail) -> Result<(), MailError>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();
        let from = settings.from.parse::<Mailbox>()?;

        Ok(SmtpMailer { transport, from })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, email: ContactEmail) -> Result<(), MailError> {
        // Relays reject a spoofed From, the submitter goes into Reply-To instead
        let reply_to = Mailbox::new(
            Some(email.sender_name.clone()),
            email.sender_email.parse::<Address>()?,
        );

        let message = Message::builder()
            .from(self.from.clone())
            .reply_to(reply_to)
            .to(email.recipient.parse::<Mailbox>()?)
            .subject(email.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(email.body)?;

        self.transport.send(message).await?;
        tracing::info!("Contact email delivered to SMTP relay for {}", email.recipient);
        Ok(())
    }
}

/// Development transport: writes the email to the log and reports success.
pub struct LogMailer;

#[async_trait]
impl MailTransport for LogMailer {
    async fn send(&self, email: ContactEmail) -> Result<(), MailError> {
        tracing::info!(
            "Not sending mail in development. To: {} Reply-To: {} <{}> Subject: {}\n{}",
            email.recipient,
            email.sender_name,
            email.sender_email,
            email.subject,
            email.body
        );
        Ok(())
    }
}
