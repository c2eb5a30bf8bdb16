//! Server application models and type definitions.
//!
//! Application state shared by the handlers, database model type aliases, and the session data
//! structures used to decide whether a request is signed in.

pub mod app;
pub mod db;
pub mod session;
