use actix_web::http::header::HeaderValue;

/// The single site origin allowed to read our responses.
///
/// Browsers compare `Access-Control-Allow-Origin` with the page origin byte for byte, so the value
/// must be a bare `scheme://host[:port]` with no trailing slash. A wildcard is refused.
#[derive(Debug, Clone)]
pub struct AllowedOrigin(HeaderValue);

impl AllowedOrigin {
    pub fn parse(s: String) -> Result<AllowedOrigin, String> {
        let origin = s.trim();
        if origin.is_empty() {
            return Err("The allowed origin cannot be empty.".into());
        }
        if origin == "*" {
            return Err("A wildcard is not accepted as the allowed origin.".into());
        }
        let authority = match origin
            .strip_prefix("https://")
            .or_else(|| origin.strip_prefix("http://"))
        {
            Some(authority) => authority,
            None => return Err(format!("{origin} is not an http(s) origin.")),
        };
        if authority.is_empty() {
            return Err(format!("{origin} has no host."));
        }
        // An origin stops at the authority: no path, query or fragment, not even a lone `/`.
        if authority.contains(|c: char| matches!(c, '/' | '?' | '#')) {
            return Err(format!(
                "{origin} must be a bare scheme://host[:port], without path, query or fragment."
            ));
        }
        HeaderValue::from_str(origin)
            .map(Self)
            .map_err(|_| format!("{origin} is not a valid header value."))
    }

    pub fn header_value(&self) -> &HeaderValue {
        &self.0
    }
}
