use crate::domain::{MailRoute, OutboundEmail, ValidatedSubmission};
use crate::email_client::MailSender;

/// The send failed. What went wrong has already been logged; callers only learn that it did.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Failed to send email")]
pub struct ProviderError;

/// Turns a validated submission into an email and hands it to the provider, once.
#[derive(Debug)]
pub struct MailDispatcher<M> {
    mail_sender: M,
    route: MailRoute,
}

impl<M: MailSender> MailDispatcher<M> {
    pub fn new(mail_sender: M, route: MailRoute) -> Self {
        Self { mail_sender, route }
    }

    #[cfg(test)]
    pub(crate) fn mail_sender(&self) -> &M {
        &self.mail_sender
    }

    #[tracing::instrument(
        name = "Dispatching contact email",
        skip(self, submission),
        fields(reply_to = %submission.email())
    )]
    pub async fn dispatch(&self, submission: &ValidatedSubmission) -> Result<(), ProviderError> {
        let email = OutboundEmail::compose(submission, &self.route);
        self.mail_sender.send_email(&email).await.map_err(|e| {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to send contact email"
            );
            ProviderError
        })
    }
}
