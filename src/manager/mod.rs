//! The roster: an ordered collection of student records
//!
//! - [`errors`]: [`ValidationError`] and [`RosterError`]
//! - [`stats`]: [`Statistics`] computed on demand
//!
//! # Identifiers
//!
//! The roster owns an id counter starting at 1. Every successful add takes
//! the current value and advances it; deletes never give an id back, so ids
//! are unique and strictly increasing in insertion order.
//!
//! # Lookups
//!
//! Records are kept in insertion order and every lookup is a linear scan.
//! Each operation either completes fully or leaves the roster untouched.

pub mod errors;
pub mod stats;

pub use errors::{RosterError, ValidationError};
pub use stats::Statistics;

use crate::record::{NewStudent, Student, StudentId, StudentUpdate};
use crate::validation::{self, is_valid_course, is_valid_email, is_valid_name};

/// First identifier handed out by a fresh roster
pub const FIRST_ID: StudentId = 1;

/// Owns the student records and the identifier counter
#[derive(Debug, Clone)]
pub struct Roster {
    students: Vec<Student>,
    next_id: StudentId,
}

impl Roster {
    pub fn new() -> Self {
        Roster {
            students: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    /// Roster seeded with the two demo records (ids 1 and 2)
    pub fn with_sample_data() -> Self {
        let mut roster = Roster::new();
        let samples = [
            NewStudent::new("John Doe", "john@email.com", 20, "Computer Science", 3.5),
            NewStudent::new("Jane Smith", "jane@email.com", 19, "Mathematics", 3.8),
        ];
        for sample in samples {
            if let Err(e) = roster.add(sample) {
                log::warn!("Sample record rejected: {}", e);
            }
        }
        roster
    }

    /// Validate and append a new record under the next identifier
    pub fn add(&mut self, fields: NewStudent) -> Result<&Student, RosterError> {
        let fields = fields.trimmed();
        if let Err(e) = validation::check_new_student(&fields) {
            log::debug!("Add rejected on field '{}': {}", e.field(), e);
            return Err(e.into());
        }

        let id = self.next_id;
        self.next_id += 1;
        self.students.push(Student::new(id, fields));
        log::info!("Added student {}", id);

        Ok(&self.students[self.students.len() - 1])
    }

    /// All records in insertion order
    pub fn list(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Identifier the next successful add will receive
    pub fn next_id(&self) -> StudentId {
        self.next_id
    }

    pub fn find_by_id(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    /// Like [`find_by_id`](Self::find_by_id) but reports a miss as an error
    pub fn get(&self, id: StudentId) -> Result<&Student, RosterError> {
        self.find_by_id(id).ok_or(RosterError::NotFound { id })
    }

    /// Apply the supplied fields that are non-empty and valid
    ///
    /// Fields that are omitted, blank or fail validation keep their current
    /// value; none of these is an error. Only an unknown id fails.
    pub fn update(
        &mut self,
        id: StudentId,
        update: StudentUpdate,
    ) -> Result<&Student, RosterError> {
        let Some(student) = self.students.iter_mut().find(|s| s.id() == id) else {
            log::debug!("Update failed: no student {}", id);
            return Err(RosterError::NotFound { id });
        };

        let mut changed = Vec::new();

        if let Some(name) = accepted(update.name, is_valid_name) {
            student.set_name(name);
            changed.push("name");
        }
        if let Some(email) = accepted(update.email, is_valid_email) {
            student.set_email(email);
            changed.push("email");
        }
        if let Some(course) = accepted(update.course, is_valid_course) {
            student.set_course(course);
            changed.push("course");
        }

        if changed.is_empty() {
            log::info!("Updated student {} (no changes)", id);
        } else {
            log::info!("Updated student {} ({})", id, changed.join(", "));
        }

        Ok(&*student)
    }

    /// Remove a record immediately. Its identifier is not reused.
    pub fn delete(&mut self, id: StudentId) -> Result<Student, RosterError> {
        let Some(index) = self.students.iter().position(|s| s.id() == id) else {
            log::debug!("Delete failed: no student {}", id);
            return Err(RosterError::NotFound { id });
        };

        let removed = self.students.remove(index);
        log::info!("Deleted student {}", id);
        Ok(removed)
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::from_students(&self.students)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

/// Trimmed value if present, non-empty and passing `is_valid`
fn accepted(value: Option<String>, is_valid: fn(&str) -> bool) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() || !is_valid(value) {
        return None;
    }
    Some(value.to_string())
}
