//! Server application core modules.
//!
//! HTTP routing, session handling, page composition, and user lookups for the Taxdesk portal.
//! Pages are rendered on the server; signed-in state lives in a Redis-backed tower-sessions
//! store and user records in Postgres through SeaORM.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
