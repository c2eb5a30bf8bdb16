//! Database fixtures for tests.

pub mod user;
