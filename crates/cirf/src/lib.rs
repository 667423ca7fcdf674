//! Assessment backend for the Cultural Innovation Resilience Framework (CIRF).
//!
//! The [`assessments`] module holds the question bank, the pure scoring and
//! unlock rules, and the service/router pair that persists submissions.

pub mod assessments;
pub mod config;
pub mod error;
pub mod rate_limit;
pub mod telemetry;
