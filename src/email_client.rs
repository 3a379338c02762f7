use crate::domain::OutboundEmail;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};

#[derive(thiserror::Error, Debug)]
pub enum MailError {
    #[error("Failed to reach the email provider")]
    Transport(#[from] reqwest::Error),
    #[error("The email provider rejected the message with {status}: {detail}")]
    Rejected { status: StatusCode, detail: String },
}

/// The one thing we need from an email provider: accept a message or say why not.
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send_email(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

/// Client for a JSON transactional-email API (Postmark's `/email` endpoint shape).
#[derive(Debug)]
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
            authorization_token,
        })
    }
}

#[async_trait]
impl MailSender for EmailClient {
    #[tracing::instrument(name = "Sending email through the provider", skip(self, email))]
    async fn send_email(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let url = format!("{}/email", self.base_url.trim_end_matches('/'));
        let request_body = SendEmailRequest {
            from: &email.sender,
            to: &email.recipient,
            reply_to: &email.reply_to,
            subject: &email.subject,
            text_body: &email.text_body,
        };

        let response = self
            .http_client
            .post(&url)
            .header(
                "X-Postmark-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        // Keep whatever the provider told us: it only ever reaches the logs.
        let detail = response.text().await.unwrap_or_default();
        Err(MailError::Rejected { status, detail })
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    reply_to: &'a str,
    subject: &'a str,
    text_body: &'a str,
}
