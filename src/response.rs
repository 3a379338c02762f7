use crate::domain::AllowedOrigin;
use actix_web::http::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
};
use actix_web::http::StatusCode;
use actix_web::HttpResponse;

pub const ALLOWED_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
pub const ALLOWED_METHODS: &str = "OPTIONS,POST";

/// A finished response: status, headers and an already encoded body.
#[derive(Debug)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl From<TransportResponse> for HttpResponse {
    fn from(response: TransportResponse) -> Self {
        let mut builder = HttpResponse::build(response.status);
        for (name, value) in response.headers.iter() {
            builder.insert_header((name.clone(), value.clone()));
        }
        builder.body(response.body)
    }
}

/// Wraps every outcome of the contact handler with the same cross-origin headers.
///
/// A browser treats an error response without `Access-Control-Allow-Origin` like a network failure,
/// so there is no way to produce a `TransportResponse` that skips them.
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    allowed_origin: AllowedOrigin,
}

impl ResponseBuilder {
    pub fn new(allowed_origin: AllowedOrigin) -> Self {
        Self { allowed_origin }
    }

    pub fn build(&self, status: StatusCode, body: serde_json::Value) -> TransportResponse {
        TransportResponse {
            status,
            headers: self.headers(),
            body: body.to_string(),
        }
    }

    /// Answer to an `OPTIONS` pre-flight: the usual headers and an empty body.
    pub fn preflight(&self) -> TransportResponse {
        TransportResponse {
            status: StatusCode::NO_CONTENT,
            headers: self.headers(),
            body: String::new(),
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            self.allowed_origin.header_value().clone(),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers
    }
}
