//! HTTP handlers for employee-service.

pub mod employees;
pub mod extract;
pub mod health;

pub use health::{health_check, metrics, readiness_check};
