use crate::domain::OutboundEmail;
use crate::email_client::{MailError, MailSender};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Mutex;

pub(crate) const PROVIDER_DETAIL: &str = "MessageRejected: Email address is not verified";

/// Stands in for the provider: remembers every email it was asked to send and either accepts or
/// rejects all of them.
#[derive(Debug)]
pub(crate) struct RecordingMailSender {
    sent: Mutex<Vec<OutboundEmail>>,
    fail: bool,
}

impl RecordingMailSender {
    pub(crate) fn succeeding() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub(crate) fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailSender for RecordingMailSender {
    async fn send_email(&self, email: &OutboundEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email.clone());
        if self.fail {
            Err(MailError::Rejected {
                status: StatusCode::BAD_REQUEST,
                detail: PROVIDER_DETAIL.into(),
            })
        } else {
            Ok(())
        }
    }
}
