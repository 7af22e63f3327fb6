//! Outbound HTTP calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `upload` posts staged files to the analysis service, `assistant` answers
//! chat messages through one of three backends, and `types` defines the
//! shared wire schema and error type.

pub mod assistant;
pub mod types;
pub mod upload;
