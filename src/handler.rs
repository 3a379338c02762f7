use crate::dispatcher::MailDispatcher;
use crate::domain::{RawRequest, SubmissionRecord, ValidatedSubmission, ValidationError};
use crate::email_client::MailSender;
use crate::response::{ResponseBuilder, TransportResponse};
use actix_web::http::StatusCode;
use serde_json::json;

/// How a single submission ended. Every variant maps to exactly one status and one body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResult {
    Sent,
    ParseError,
    ValidationError(ValidationError),
    ProviderError,
}

impl HandlerResult {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HandlerResult::Sent => StatusCode::OK,
            HandlerResult::ParseError | HandlerResult::ValidationError(_) => {
                StatusCode::BAD_REQUEST
            }
            HandlerResult::ProviderError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> serde_json::Value {
        match self {
            HandlerResult::Sent => json!({ "message": "Email sent" }),
            HandlerResult::ParseError => json!({ "error": "Invalid JSON body" }),
            HandlerResult::ValidationError(e) => json!({ "error": e.to_string() }),
            HandlerResult::ProviderError => json!({ "error": "Failed to send email" }),
        }
    }
}

/// Receives a contact form submission and answers it: parse, validate, send, respond.
///
/// Every path ends in a single call to the `ResponseBuilder`, so failures carry the same CORS
/// headers as successes.
#[derive(Debug)]
pub struct ContactHandler<M> {
    dispatcher: MailDispatcher<M>,
    responses: ResponseBuilder,
}

impl<M: MailSender> ContactHandler<M> {
    pub fn new(dispatcher: MailDispatcher<M>, responses: ResponseBuilder) -> Self {
        Self {
            dispatcher,
            responses,
        }
    }

    #[cfg(test)]
    pub(crate) fn dispatcher(&self) -> &MailDispatcher<M> {
        &self.dispatcher
    }

    pub async fn handle(&self, request: RawRequest) -> TransportResponse {
        let outcome = self.process(request).await;
        self.respond(outcome)
    }

    /// Builds the response for an outcome decided outside `handle`, e.g. a body that could not be
    /// read off the wire.
    pub fn respond(&self, outcome: HandlerResult) -> TransportResponse {
        self.responses.build(outcome.status_code(), outcome.body())
    }

    pub fn preflight(&self) -> TransportResponse {
        self.responses.preflight()
    }

    #[tracing::instrument(
        name = "Handling a contact form submission",
        skip(self, request),
        fields(body_bytes = request.body().len())
    )]
    async fn process(&self, request: RawRequest) -> HandlerResult {
        let record = match SubmissionRecord::parse(&request) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, error.message = %e, "Rejected an undecodable body");
                return HandlerResult::ParseError;
            }
        };

        let submission = match ValidatedSubmission::try_from(record) {
            Ok(submission) => submission,
            Err(e) => {
                tracing::warn!(error.message = %e, "Rejected an incomplete submission");
                return HandlerResult::ValidationError(e);
            }
        };

        match self.dispatcher.dispatch(&submission).await {
            Ok(()) => {
                tracing::info!("Contact email sent");
                HandlerResult::Sent
            }
            Err(_) => HandlerResult::ProviderError,
        }
    }
}
