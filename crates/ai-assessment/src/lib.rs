//! Scoring engine behind the AI maturity and EU AI Act compliance questionnaires.
//!
//! The engine is a set of pure, synchronous functions over a static catalog and a
//! caller-owned answer set. HTTP routers and configuration live alongside so the
//! service binary can expose the same operations over JSON.

pub mod assessments;
pub mod config;
pub mod error;
pub mod telemetry;
