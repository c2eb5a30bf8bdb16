//! Business logic services.
//!
//! Services sit between the HTTP controllers and the repositories: page services decide whether
//! a request is admitted and what it renders, user services wrap lookups with failure reporting.

pub mod page;
pub mod user;
