//! Session data models and utilities.
//!
//! Type-safe wrappers for session data stored with tower-sessions, and the
//! [`SessionResolver`](current::SessionResolver) capability pages use to check whether a
//! request is signed in.

pub mod current;
pub mod user;
