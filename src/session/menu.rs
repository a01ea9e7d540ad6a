//! The numbered main menu

use thiserror::Error;

/// Errors from reading a line of user input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input. Please enter a number.")]
    NotANumber,

    #[error("Choice must be between 1 and {max}")]
    ChoiceOutOfRange { choice: i64, max: usize },

    #[error("Please enter valid numbers for age and GPA.")]
    InvalidNumber,

    #[error("Please enter a valid ID number.")]
    InvalidId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Search,
    Update,
    Delete,
    Statistics,
    Exit,
}

impl MenuChoice {
    /// All entries in menu order
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Add,
        MenuChoice::List,
        MenuChoice::Search,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Statistics,
        MenuChoice::Exit,
    ];

    /// Parse a menu line such as `"3"`
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let choice: i64 = input.trim().parse().map_err(|_| InputError::NotANumber)?;
        let max = Self::ALL.len();
        if choice < 1 || choice > max as i64 {
            return Err(InputError::ChoiceOutOfRange { choice, max });
        }
        Ok(Self::ALL[(choice - 1) as usize])
    }

    /// 1-based position in the menu
    pub fn number(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0) + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add New Student",
            MenuChoice::List => "View All Students",
            MenuChoice::Search => "Search Student by ID",
            MenuChoice::Update => "Update Student Information",
            MenuChoice::Delete => "Delete Student",
            MenuChoice::Statistics => "Display Statistics",
            MenuChoice::Exit => "Exit System",
        }
    }

    /// Banner printed when the entry is chosen. Exit has its own farewell.
    pub fn heading(self) -> Option<&'static str> {
        match self {
            MenuChoice::Add => Some("--- ADD NEW STUDENT ---"),
            MenuChoice::List => Some("--- ALL STUDENTS ---"),
            MenuChoice::Search => Some("--- SEARCH STUDENT ---"),
            MenuChoice::Update => Some("--- UPDATE STUDENT ---"),
            MenuChoice::Delete => Some("--- DELETE STUDENT ---"),
            MenuChoice::Statistics => Some("--- SYSTEM STATISTICS ---"),
            MenuChoice::Exit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!(MenuChoice::parse("1"), Ok(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 7 "), Ok(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("abc"), Err(InputError::NotANumber));
        assert_eq!(
            MenuChoice::parse("8"),
            Err(InputError::ChoiceOutOfRange { choice: 8, max: 7 })
        );
        assert_eq!(
            MenuChoice::parse("0").unwrap_err().to_string(),
            "Choice must be between 1 and 7"
        );
    }

    #[test]
    fn test_numbers_follow_menu_order() {
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            assert_eq!(choice.number(), i + 1);
        }
    }
}
