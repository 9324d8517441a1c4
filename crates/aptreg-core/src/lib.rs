//! aptreg-core — Student model, eligibility rules, aptitude quiz, and record store.
//!
//! This crate holds everything the `aptreg` binary drives: the pure grading
//! rules, the quiz engine, the CSV-backed record store, and the interactive
//! registration session that ties them together.

pub mod config;
pub mod error;
pub mod model;
pub mod prompt;
pub mod quiz;
pub mod rules;
pub mod session;
pub mod store;
pub mod summary;
