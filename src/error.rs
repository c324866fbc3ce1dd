use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::controller::FieldId;
use crate::domain::Category;

/// A validation message attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: FieldId,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: FieldId, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(FieldIssue::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that can occur while filling in or submitting an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Invalid field {0}")]
    InvalidField(FieldIssue),
    #[error("Order validation failed: {}", join_issues(.0))]
    ValidationFailed(Vec<FieldIssue>),
    #[error("You can select up to {max} {category}")]
    SelectionLimit { category: Category, max: usize },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
