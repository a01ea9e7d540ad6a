//! Per-field validation for student records
//!
//! Each predicate takes one value and answers pass/fail. Text values are
//! checked after trimming surrounding whitespace; nothing is mutated.
//!
//! [`check_new_student`] runs every predicate over a [`NewStudent`] and
//! reports the first failing field as a [`ValidationError`].

pub mod constants;

use crate::manager::errors::ValidationError;
use crate::record::NewStudent;
use constants::{EMAIL_PATTERN, MAX_AGE, MAX_GPA, MIN_AGE, MIN_GPA, MIN_NAME_LEN};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).unwrap());

/// Letters and whitespace only, at least two characters once trimmed
pub fn is_valid_name(name: &str) -> bool {
    let name = name.trim();
    name.chars().count() >= MIN_NAME_LEN
        && name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_ascii_whitespace())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

pub fn is_valid_age(age: i32) -> bool {
    (MIN_AGE..=MAX_AGE).contains(&age)
}

/// NaN is never in range
pub fn is_valid_gpa(gpa: f64) -> bool {
    (MIN_GPA..=MAX_GPA).contains(&gpa)
}

pub fn is_valid_course(course: &str) -> bool {
    !course.trim().is_empty()
}

/// Check all five fields in entry order
pub fn check_new_student(fields: &NewStudent) -> Result<(), ValidationError> {
    if !is_valid_name(&fields.name) {
        return Err(ValidationError::Name);
    }
    if !is_valid_email(&fields.email) {
        return Err(ValidationError::Email);
    }
    if !is_valid_age(fields.age) {
        return Err(ValidationError::Age { age: fields.age });
    }
    if !is_valid_course(&fields.course) {
        return Err(ValidationError::Course);
    }
    if !is_valid_gpa(fields.gpa) {
        return Err(ValidationError::Gpa { gpa: fields.gpa });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rules() {
        assert!(is_valid_name("John Doe"));
        assert!(is_valid_name("  Al  "));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("   "));
        assert!(!is_valid_name("J"));
        assert!(!is_valid_name(" J "));
        assert!(!is_valid_name("R2D2"));
        assert!(!is_valid_name("O'Brien"));
    }

    #[test]
    fn test_email_must_match_whole_string() {
        assert!(is_valid_email("john@email.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(is_valid_email("a&b-c_d@sub-domain.co"));
        assert!(!is_valid_email("john@email"));
        assert!(!is_valid_email("john.email.com"));
        assert!(!is_valid_email("john@email.c"));
        assert!(!is_valid_email("john@email.toolongtld"));
        assert!(!is_valid_email("john@email.com extra"));
        assert!(!is_valid_email(".john@email.com"));
        assert!(!is_valid_email("john@@email.com"));
    }

    #[test]
    fn test_age_bounds_inclusive() {
        assert!(!is_valid_age(15));
        assert!(is_valid_age(16));
        assert!(is_valid_age(100));
        assert!(!is_valid_age(101));
        assert!(!is_valid_age(-20));
    }

    #[test]
    fn test_gpa_bounds_inclusive() {
        assert!(is_valid_gpa(0.0));
        assert!(is_valid_gpa(4.0));
        assert!(is_valid_gpa(3.65));
        assert!(!is_valid_gpa(-0.01));
        assert!(!is_valid_gpa(4.01));
        assert!(!is_valid_gpa(f64::NAN));
    }

    #[test]
    fn test_check_reports_first_failing_field() {
        let mut fields = NewStudent::new("John Doe", "john@email.com", 20, "Physics", 3.0);
        assert_eq!(check_new_student(&fields), Ok(()));

        fields.age = 15;
        fields.gpa = 9.0;
        assert_eq!(
            check_new_student(&fields),
            Err(ValidationError::Age { age: 15 })
        );

        fields.course = "  ".to_string();
        fields.age = 30;
        assert_eq!(check_new_student(&fields), Err(ValidationError::Course));
    }
}
