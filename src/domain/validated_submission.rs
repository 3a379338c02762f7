use crate::domain::SubmissionRecord;

/// Returned when any of the three fields is blank. The message is shared by all of them: callers are
/// not told which field was missing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("name, email and message are required")]
pub struct ValidationError;

/// A submission whose `name`, `email` and `message` are all non-empty once surrounding whitespace
/// is removed. The trimmed values are the ones kept.
///
/// The fields are private and the only constructor is `TryFrom<SubmissionRecord>`, so holding a
/// `ValidatedSubmission` is proof that validation ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    name: String,
    email: String,
    message: String,
}

impl ValidatedSubmission {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The submitter's address, used as reply-to. Only presence is checked.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl TryFrom<SubmissionRecord> for ValidatedSubmission {
    type Error = ValidationError;

    fn try_from(record: SubmissionRecord) -> Result<Self, Self::Error> {
        let name = required(record.name)?;
        let email = required(record.email)?;
        let message = required(record.message)?;
        Ok(Self {
            name,
            email,
            message,
        })
    }
}

fn required(s: String) -> Result<String, ValidationError> {
    match s.trim() {
        "" => Err(ValidationError),
        trimmed => Ok(trimmed.to_string()),
    }
}
