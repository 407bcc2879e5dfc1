//! Multi-criterion quality scoring for open JSON datasets.
//!
//! [`evaluation::evaluate`] loads a dataset from a URL or file and scores it
//! against eighteen criteria; [`evaluation::Evaluation`] exposes the same pass
//! as an explicit state machine.

pub mod analyze;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod load;
pub mod report;
pub mod types;
