//! CSV front end: pricing actions in, checkout summary out.

pub mod action_reader;
pub mod summary_writer;
