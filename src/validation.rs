// Structural validation of caller-supplied records, applied before any
// hashing happens. This is the engine-side guard mirroring the submission
// form's required fields; it is not a chain invariant.

use crate::record::PatentRecord;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Reject a record that is missing any of the required text fields.
/// Whitespace-only values are accepted, matching the reference form checks.
pub fn validate_record(record: &PatentRecord) -> Result<(), ValidationError> {
    if record.title.is_empty() {
        return Err(ValidationError::MissingField("title"));
    }
    if record.description.is_empty() {
        return Err(ValidationError::MissingField("description"));
    }
    if record.inventor.is_empty() {
        return Err(ValidationError::MissingField("inventor"));
    }
    Ok(())
}
