//! `rg16` library crate.
//!
//! Turns questionnaire answers into category scores, an answer-quality index, a
//! personality-type classification, and an evidence-backed narrative report.
//! The `rg16-api` binary wraps this crate with an HTTP service and a CLI.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
