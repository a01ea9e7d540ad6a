// Field limits for student records

/// Youngest accepted age (inclusive)
pub const MIN_AGE: i32 = 16;

/// Oldest accepted age (inclusive)
pub const MAX_AGE: i32 = 100;

/// Lowest accepted GPA (inclusive)
pub const MIN_GPA: f64 = 0.0;

/// Highest accepted GPA (inclusive)
pub const MAX_GPA: f64 = 4.0;

/// Minimum name length after trimming
pub const MIN_NAME_LEN: usize = 2;

/// Whole-string email shape: `local@label.label.tld`, tld of 2-7 letters
pub const EMAIL_PATTERN: &str =
    r"^[a-zA-Z0-9_+&-]+(?:\.[a-zA-Z0-9_+&-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,7}$";
