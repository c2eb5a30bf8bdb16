//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations, organized by domain.

pub mod user;
