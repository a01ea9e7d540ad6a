//! Menu-driven session over a [`Roster`]
//!
//! The session is independent of any terminal: a front end shows
//! [`Session::prompt`], reads one line, passes it to [`Session::submit`] and
//! displays the returned [`OutputLine`]s. Both the TUI and the plain console
//! drive the same session.
//!
//! # Operations
//!
//! Choosing a menu entry either completes immediately (list, statistics,
//! exit) or starts a multi-prompt operation (add, search, update, delete).
//! A bad value or unknown id aborts only the current operation and the
//! session returns to the menu. [`Session::cancel`] does the same on request.
//!
//! Nothing touches the roster until the last prompt of an operation is
//! answered, so an aborted operation never leaves a partial change.

pub mod menu;
pub mod output;

pub use menu::{InputError, MenuChoice};
pub use output::{LineKind, OutputLine};

use crate::manager::{Roster, ValidationError};
use crate::record::{NewStudent, StudentId, StudentUpdate};
use crate::validation::{is_valid_age, is_valid_email, is_valid_gpa, is_valid_name};
use output::Output;
use std::fmt;

const BANNER_WIDTH: usize = 50;
const LIST_RULE_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddStep {
    Name,
    Email,
    Age,
    Course,
    Gpa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpdateStep {
    Name,
    Email,
    Course,
}

/// Where the session is waiting for input
#[derive(Debug, Clone)]
enum Stage {
    Menu,
    Add { step: AddStep, draft: NewStudent },
    Search,
    UpdateId,
    Update {
        id: StudentId,
        step: UpdateStep,
        draft: StudentUpdate,
    },
    DeleteId,
    DeleteConfirm { id: StudentId },
    Finished,
}

/// Interactive state machine wrapping the roster
#[derive(Debug, Clone)]
pub struct Session {
    roster: Roster,
    stage: Stage,
}

impl Session {
    pub fn new(roster: Roster) -> Self {
        Session {
            roster,
            stage: Stage::Menu,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// True once Exit has been chosen
    pub fn is_finished(&self) -> bool {
        matches!(self.stage, Stage::Finished)
    }

    /// True when waiting for a menu choice
    pub fn at_menu(&self) -> bool {
        matches!(self.stage, Stage::Menu)
    }

    /// Menu entry whose operation is in progress, if any
    pub fn active_choice(&self) -> Option<MenuChoice> {
        match self.stage {
            Stage::Add { .. } => Some(MenuChoice::Add),
            Stage::Search => Some(MenuChoice::Search),
            Stage::UpdateId | Stage::Update { .. } => Some(MenuChoice::Update),
            Stage::DeleteId | Stage::DeleteConfirm { .. } => Some(MenuChoice::Delete),
            Stage::Menu | Stage::Finished => None,
        }
    }

    /// Welcome banner shown once at startup
    pub fn greeting() -> Vec<OutputLine> {
        let mut out = Output::new();
        out.heading("=== STUDENT MANAGEMENT SYSTEM ===");
        out.text("Welcome to the comprehensive student management portal!");
        out.into_lines()
    }

    /// The numbered main menu
    pub fn menu_lines() -> Vec<OutputLine> {
        let mut out = Output::new();
        out.push(LineKind::Rule, "=".repeat(BANNER_WIDTH));
        out.heading("STUDENT MANAGEMENT SYSTEM - MAIN MENU");
        out.push(LineKind::Rule, "=".repeat(BANNER_WIDTH));
        for choice in MenuChoice::ALL {
            out.text(format!("{}. {}", choice.number(), choice.label()));
        }
        out.push(LineKind::Rule, "=".repeat(BANNER_WIDTH));
        out.into_lines()
    }

    /// Text to show before reading the next line
    pub fn prompt(&self) -> String {
        match &self.stage {
            Stage::Menu => format!("Enter your choice (1-{}): ", MenuChoice::ALL.len()),
            Stage::Add { step, .. } => match step {
                AddStep::Name => "Enter student name: ",
                AddStep::Email => "Enter email: ",
                AddStep::Age => "Enter age: ",
                AddStep::Course => "Enter course: ",
                AddStep::Gpa => "Enter GPA (0.0-4.0): ",
            }
            .to_string(),
            Stage::Search => "Enter student ID: ".to_string(),
            Stage::UpdateId => "Enter student ID to update: ".to_string(),
            Stage::Update { id, step, .. } => {
                let current = self.roster.find_by_id(*id);
                let (field, value) = match step {
                    UpdateStep::Name => ("name", current.map(|s| s.name())),
                    UpdateStep::Email => ("email", current.map(|s| s.email())),
                    UpdateStep::Course => ("course", current.map(|s| s.course())),
                };
                format!("New {} [{}]: ", field, value.unwrap_or_default())
            }
            Stage::DeleteId => "Enter student ID to delete: ".to_string(),
            Stage::DeleteConfirm { .. } => "Are you sure? (yes/no): ".to_string(),
            Stage::Finished => String::new(),
        }
    }

    /// Feed one line of input to the current stage
    pub fn submit(&mut self, input: &str) -> Vec<OutputLine> {
        let mut out = Output::new();
        let stage = std::mem::replace(&mut self.stage, Stage::Menu);

        self.stage = match stage {
            Stage::Menu => self.choose(input, &mut out),
            Stage::Add { step, draft } => self.add_step(step, draft, input, &mut out),
            Stage::Search => {
                self.search(input, &mut out);
                Stage::Menu
            }
            Stage::UpdateId => self.update_lookup(input, &mut out),
            Stage::Update { id, step, draft } => {
                self.update_step(id, step, draft, input, &mut out)
            }
            Stage::DeleteId => self.delete_lookup(input, &mut out),
            Stage::DeleteConfirm { id } => {
                self.delete_confirm(id, input, &mut out);
                Stage::Menu
            }
            Stage::Finished => Stage::Finished,
        };

        out.into_lines()
    }

    /// Abandon the operation in progress without touching the roster
    pub fn cancel(&mut self) -> Vec<OutputLine> {
        let mut out = Output::new();
        if let Some(choice) = self.active_choice() {
            log::debug!("Cancelled '{}'", choice.label());
            self.stage = Stage::Menu;
            out.text("Operation cancelled.");
        }
        out.into_lines()
    }

    fn choose(&mut self, input: &str, out: &mut Output) -> Stage {
        let choice = match MenuChoice::parse(input) {
            Ok(choice) => choice,
            Err(e) => {
                log::debug!("Rejected menu input {:?}: {}", input, e);
                out.error(format!("Error: {}", e));
                out.text("Please try again.");
                return Stage::Menu;
            }
        };

        if let Some(heading) = choice.heading() {
            out.heading(heading);
        }

        match choice {
            MenuChoice::Add => Stage::Add {
                step: AddStep::Name,
                draft: NewStudent::default(),
            },
            MenuChoice::List => {
                self.list(out);
                Stage::Menu
            }
            MenuChoice::Search => Stage::Search,
            MenuChoice::Update => Stage::UpdateId,
            MenuChoice::Delete => Stage::DeleteId,
            MenuChoice::Statistics => {
                self.statistics(out);
                Stage::Menu
            }
            MenuChoice::Exit => {
                farewell(out);
                Stage::Finished
            }
        }
    }

    fn add_step(
        &mut self,
        step: AddStep,
        mut draft: NewStudent,
        input: &str,
        out: &mut Output,
    ) -> Stage {
        let input = input.trim();

        let next = match step {
            AddStep::Name => {
                if !is_valid_name(input) {
                    return reject(out, ValidationError::Name);
                }
                draft.name = input.to_string();
                AddStep::Email
            }
            AddStep::Email => {
                if !is_valid_email(input) {
                    return reject(out, ValidationError::Email);
                }
                draft.email = input.to_string();
                AddStep::Age
            }
            AddStep::Age => {
                let Ok(age) = input.parse::<i32>() else {
                    return reject(out, InputError::InvalidNumber);
                };
                if !is_valid_age(age) {
                    return reject(out, ValidationError::Age { age });
                }
                draft.age = age;
                AddStep::Course
            }
            AddStep::Course => {
                if input.is_empty() {
                    return reject(out, ValidationError::Course);
                }
                draft.course = input.to_string();
                AddStep::Gpa
            }
            AddStep::Gpa => {
                let Ok(gpa) = input.parse::<f64>() else {
                    return reject(out, InputError::InvalidNumber);
                };
                if !is_valid_gpa(gpa) {
                    return reject(out, ValidationError::Gpa { gpa });
                }
                draft.gpa = gpa;

                match self.roster.add(draft) {
                    Ok(student) => out.success(format!(
                        "✓ Student added successfully! ID: {}",
                        student.id()
                    )),
                    Err(e) => out.error(format!("✗ Error: {}", e)),
                }
                return Stage::Menu;
            }
        };

        Stage::Add { step: next, draft }
    }

    fn search(&self, input: &str, out: &mut Output) {
        let id = match parse_id(input) {
            Ok(id) => id,
            Err(e) => {
                out.error(format!("✗ Error: {}", e));
                return;
            }
        };

        match self.roster.get(id) {
            Ok(student) => {
                out.text("Student Found:");
                out.rule(BANNER_WIDTH);
                out.record(student.to_string());
                out.rule(BANNER_WIDTH);
            }
            Err(e) => out.error(format!("✗ {}", e)),
        }
    }

    fn update_lookup(&self, input: &str, out: &mut Output) -> Stage {
        let id = match parse_id(input) {
            Ok(id) => id,
            Err(e) => return reject(out, e),
        };

        match self.roster.get(id) {
            Ok(student) => {
                out.record(format!("Current Information: {}", student));
                out.text("Enter new information (press Enter to keep current value):");
                Stage::Update {
                    id,
                    step: UpdateStep::Name,
                    draft: StudentUpdate::new(),
                }
            }
            Err(e) => {
                out.error(format!("✗ {}", e));
                Stage::Menu
            }
        }
    }

    fn update_step(
        &mut self,
        id: StudentId,
        step: UpdateStep,
        mut draft: StudentUpdate,
        input: &str,
        out: &mut Output,
    ) -> Stage {
        let input = input.trim();

        let next = match step {
            UpdateStep::Name => {
                if !input.is_empty() {
                    if !is_valid_name(input) {
                        out.text("Invalid name ignored; keeping current value.");
                    }
                    draft.name = Some(input.to_string());
                }
                Some(UpdateStep::Email)
            }
            UpdateStep::Email => {
                if !input.is_empty() {
                    if !is_valid_email(input) {
                        out.text("Invalid email ignored; keeping current value.");
                    }
                    draft.email = Some(input.to_string());
                }
                Some(UpdateStep::Course)
            }
            UpdateStep::Course => {
                if !input.is_empty() {
                    draft.course = Some(input.to_string());
                }
                None
            }
        };

        if let Some(step) = next {
            return Stage::Update { id, step, draft };
        }

        match self.roster.update(id, draft) {
            Ok(student) => {
                out.success("✓ Student updated successfully!");
                out.record(format!("Updated Information: {}", student));
            }
            Err(e) => out.error(format!("✗ {}", e)),
        }
        Stage::Menu
    }

    fn delete_lookup(&self, input: &str, out: &mut Output) -> Stage {
        let id = match parse_id(input) {
            Ok(id) => id,
            Err(e) => return reject(out, e),
        };

        match self.roster.get(id) {
            Ok(student) => {
                out.record(format!("Student to delete: {}", student));
                Stage::DeleteConfirm { id }
            }
            Err(e) => {
                out.error(format!("✗ {}", e));
                Stage::Menu
            }
        }
    }

    fn delete_confirm(&mut self, id: StudentId, input: &str, out: &mut Output) {
        let answer = input.trim().to_lowercase();
        if answer != "yes" && answer != "y" {
            out.text("Delete operation cancelled.");
            return;
        }

        match self.roster.delete(id) {
            Ok(_) => out.success("✓ Student deleted successfully!"),
            Err(e) => out.error(format!("✗ {}", e)),
        }
    }

    fn list(&self, out: &mut Output) {
        let students = self.roster.list();
        if students.is_empty() {
            out.text("No students found in the system.");
            return;
        }

        out.text(format!("Total Students: {}", students.len()));
        out.rule(LIST_RULE_WIDTH);
        for student in students {
            out.record(student.to_string());
        }
        out.rule(LIST_RULE_WIDTH);
    }

    fn statistics(&self, out: &mut Output) {
        let stats = self.roster.statistics();
        let Some(average) = stats.average_gpa else {
            out.text("No data available.");
            return;
        };

        out.text(format!("Total Students: {}", stats.count));
        out.text(format!("Average GPA: {:.2}", average));
        out.text("Course Distribution:");
        for (course, count) in stats.course_distribution() {
            out.text(format!("  {}: {} students", course, count));
        }
    }
}

fn farewell(out: &mut Output) {
    out.push(LineKind::Rule, "=".repeat(BANNER_WIDTH));
    out.text("Thank you for using Student Management System!");
    out.text("System shutting down safely...");
    out.push(LineKind::Rule, "=".repeat(BANNER_WIDTH));
}

/// Report a bad field value and fall back to the menu
fn reject(out: &mut Output, error: impl fmt::Display) -> Stage {
    log::debug!("Operation aborted: {}", error);
    out.error(format!("✗ Error: {}", error));
    Stage::Menu
}

fn parse_id(input: &str) -> Result<StudentId, InputError> {
    input.trim().parse().map_err(|_| InputError::InvalidId)
}
