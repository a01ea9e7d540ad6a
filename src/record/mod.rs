//! Student record types
//!
//! - [`Student`]: a stored record, identifier assigned by the roster
//! - [`NewStudent`]: the five caller-supplied fields for an add
//! - [`StudentUpdate`]: optional replacements for the updatable fields
//!
//! Only the roster hands out identifiers, so [`Student`] has no public
//! constructor and its fields are read through accessors.

use std::fmt;

/// Identifier assigned by the roster. Never reused within a run.
pub type StudentId = u32;

/// A student record held by the roster
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: StudentId,
    name: String,
    email: String,
    age: i32,
    course: String,
    gpa: f64,
}

impl Student {
    pub(crate) fn new(id: StudentId, fields: NewStudent) -> Self {
        Student {
            id,
            name: fields.name,
            email: fields.email,
            age: fields.age,
            course: fields.course,
            gpa: fields.gpa,
        }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub(crate) fn set_course(&mut self, course: String) {
        self.course = course;
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Email: {} | Age: {} | Course: {} | GPA: {:.2}",
            self.id, self.name, self.email, self.age, self.course, self.gpa
        )
    }
}

/// Fields for a record that has not been added yet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub course: String,
    pub gpa: f64,
}

impl NewStudent {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: i32,
        course: impl Into<String>,
        gpa: f64,
    ) -> Self {
        NewStudent {
            name: name.into(),
            email: email.into(),
            age,
            course: course.into(),
            gpa,
        }
    }

    /// Copy with surrounding whitespace removed from the text fields
    pub(crate) fn trimmed(&self) -> Self {
        NewStudent {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            age: self.age,
            course: self.course.trim().to_string(),
            gpa: self.gpa,
        }
    }
}

/// Replacement values for an update. `None` keeps the current value.
///
/// Age and GPA are fixed once a record is added.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub course: Option<String>,
}

impl StudentUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.course.is_none()
    }
}
