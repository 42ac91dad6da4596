//! Unit test summary library.
//!
//! Reduces parsed test case records into run statistics, compares them
//! against a reference run and renders short and long Markdown summaries.

pub mod config;
pub mod error;
pub mod locale;
pub mod models;
pub mod services;
