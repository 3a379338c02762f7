use validator::validate_email;

/// A mailbox address taken from configuration: the sender we send from and the inbox we deliver to.
///
/// A malformed address here is a misconfiguration, so it is rejected at startup rather than surfacing
/// as a provider error on the first submission. The submitter's own address is *not* an
/// `EmailAddress`: it is only checked for presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(s: String) -> Result<EmailAddress, String> {
        if validate_email(&s) {
            Ok(Self(s))
        } else {
            Err(format!("{s} is not a valid email address."))
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
