//! In-memory task list with a terminal front end.
//!
//! [`todo::store::TaskStore`] owns the tasks and the draft of the next one;
//! [`todo::App`] drives it from key presses and [`todo::ui`] renders it.

pub mod config;
pub mod error;
pub mod logging;
pub mod terminal;
pub mod todo;
