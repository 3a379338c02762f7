mod allowed_origin;
mod email_address;
mod outbound_email;
mod submission;
mod validated_submission;

pub use allowed_origin::AllowedOrigin;
pub use email_address::EmailAddress;
pub use outbound_email::{MailRoute, OutboundEmail};
pub use submission::{ParseError, RawRequest, SubmissionRecord};
pub use validated_submission::{ValidatedSubmission, ValidationError};
