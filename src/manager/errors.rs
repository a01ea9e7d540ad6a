//! Error types for roster operations
//!
//! Both kinds are recoverable: the caller reports the message and the
//! roster is left exactly as it was before the call.

use crate::record::StudentId;
use thiserror::Error;

/// A field value that failed its predicate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid name. Use only letters and spaces, min 2 characters.")]
    Name,

    #[error("Invalid email format.")]
    Email,

    #[error("Age must be between 16 and 100.")]
    Age { age: i32 },

    #[error("Course cannot be empty.")]
    Course,

    #[error("GPA must be between 0.0 and 4.0.")]
    Gpa { gpa: f64 },
}

impl ValidationError {
    /// Name of the offending field, for log lines
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Name => "name",
            ValidationError::Email => "email",
            ValidationError::Age { .. } => "age",
            ValidationError::Course => "course",
            ValidationError::Gpa { .. } => "gpa",
        }
    }
}

/// Errors returned by [`Roster`](super::Roster) operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Student with ID {id} not found.")]
    NotFound { id: StudentId },
}
