use actix_web::web::Bytes;
use serde_json::Value;

/// The request body exactly as it came off the wire.
#[derive(Debug)]
pub struct RawRequest {
    body: Bytes,
}

impl RawRequest {
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self { body: body.into() }
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("The request body is not valid JSON")]
    Malformed(#[source] serde_json::Error),
    #[error("The request body is not a JSON object")]
    NotAnObject,
    #[error("The request body fields must be strings")]
    InvalidField(#[source] serde_json::Error),
    #[error("The request body could not be read")]
    Unreadable(#[source] actix_web::error::PayloadError),
    #[error("The request body exceeds {limit} bytes")]
    TooLarge { limit: usize },
}

/// The decoded submission, before any validation has taken place.
///
/// A missing field and a `null` one both decode to an empty string, so the validator sees a single
/// representation of "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(serde::Deserialize)]
struct SubmissionFields {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl SubmissionRecord {
    pub fn parse(raw: &RawRequest) -> Result<SubmissionRecord, ParseError> {
        let value: Value = serde_json::from_slice(raw.body()).map_err(ParseError::Malformed)?;
        // `serde` happily deserializes a struct from a JSON array too, so the shape is checked
        // before handing the value over.
        if !value.is_object() {
            return Err(ParseError::NotAnObject);
        }
        let fields: SubmissionFields =
            serde_json::from_value(value).map_err(ParseError::InvalidField)?;

        Ok(Self {
            name: fields.name.unwrap_or_default(),
            email: fields.email.unwrap_or_default(),
            message: fields.message.unwrap_or_default(),
        })
    }
}
