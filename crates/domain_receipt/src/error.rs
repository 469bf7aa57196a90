//! Receipt domain errors

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur in the receipt domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReceiptError {
    /// The draft broke one or more validation rules
    #[error("Receipt rejected: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// No receipt at this position
    #[error("No receipt at position {index} (book holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

impl ReceiptError {
    /// Returns the validation messages, if this is a validation failure
    pub fn messages(&self) -> Vec<String> {
        match self {
            ReceiptError::Validation(errors) => errors.iter().map(|e| e.to_string()).collect(),
            other => vec![other.to_string()],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
