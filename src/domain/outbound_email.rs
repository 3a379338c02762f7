use crate::domain::{EmailAddress, ValidatedSubmission};

/// Where contact emails come from and where they go. Both ends are fixed by configuration; a
/// submission can only influence the reply-to address.
#[derive(Debug, Clone)]
pub struct MailRoute {
    pub sender: EmailAddress,
    pub recipient: EmailAddress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub sender: String,
    pub recipient: String,
    pub reply_to: String,
    pub subject: String,
    pub text_body: String,
}

impl OutboundEmail {
    pub fn compose(submission: &ValidatedSubmission, route: &MailRoute) -> Self {
        let subject = format!("Contact form submission from {}", submission.name());
        let text_body = format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}\n",
            submission.name(),
            submission.email(),
            submission.message()
        );
        Self {
            sender: route.sender.as_ref().to_owned(),
            recipient: route.recipient.as_ref().to_owned(),
            reply_to: submission.email().to_owned(),
            subject,
            text_body,
        }
    }
}
