//! # Introduction
//!
//! rostty keeps a roster of student records in memory for the length of one
//! run and drives it from a numbered text menu, either full-screen through a
//! [ratatui](https://docs.rs/ratatui) interface or as a plain line console.
//!
//! ## Layers
//!
//! ```text
//! Terminal → ui / console → Session → Roster → Student
//! ```
//!
//! 1. [`record`] — the [`record::Student`] type plus add and update drafts.
//! 2. [`validation`] — stateless per-field predicates (name, email, age, GPA).
//! 3. [`manager`] — the [`manager::Roster`]: ordered records, id counter,
//!    add/list/find/update/delete and [`manager::Statistics`].
//! 4. [`session`] — terminal-independent menu driver turning input lines
//!    into roster calls and output lines.
//! 5. [`ui`] and [`console`] — the two front ends over a session.
//!
//! Nothing is persisted; all records are dropped when the process exits.

pub mod config;
pub mod console;
pub mod logging;
pub mod manager;
pub mod record;
pub mod session;
pub mod ui;
pub mod validation;
