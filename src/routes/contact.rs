use crate::domain::{ParseError, RawRequest};
use crate::email_client::EmailClient;
use crate::handler::{ContactHandler, HandlerResult};
use actix_web::{web, HttpResponse};
use futures::StreamExt;

/// Upper bound on the size of a submission body, in bytes.
#[derive(Debug, Clone, Copy)]
pub struct MaxBodyBytes(pub usize);

/// `POST /contact`
///
/// The payload is read by hand instead of through `web::Json` or `web::Bytes`: extractor failures
/// are answered by actix-web itself, without our CORS headers. Here an oversized or broken body
/// goes through the handler like any other undecodable body.
#[tracing::instrument(name = "Contact form submission", skip(payload, handler, max_body_bytes))]
pub async fn submit_contact_form(
    payload: web::Payload,
    handler: web::Data<ContactHandler<EmailClient>>,
    max_body_bytes: web::Data<MaxBodyBytes>,
) -> HttpResponse {
    match read_body(payload, max_body_bytes.0).await {
        Ok(request) => handler.handle(request).await.into(),
        Err(e) => {
            tracing::warn!(error.cause_chain = ?e, error.message = %e, "Failed to read the request body");
            handler.respond(HandlerResult::ParseError).into()
        }
    }
}

/// `OPTIONS /contact`
pub async fn contact_preflight(handler: web::Data<ContactHandler<EmailClient>>) -> HttpResponse {
    handler.preflight().into()
}

async fn read_body(mut payload: web::Payload, limit: usize) -> Result<RawRequest, ParseError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(ParseError::Unreadable)?;
        if body.len() + chunk.len() > limit {
            return Err(ParseError::TooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(RawRequest::new(body.freeze()))
}
