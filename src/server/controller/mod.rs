//! HTTP controller endpoints.
//!
//! Axum handlers for the rendered pages and the authentication API. Page handlers delegate the
//! session gate to the page service and return the resulting view; API handlers return JSON and
//! are documented with utoipa.

pub mod auth;
pub mod page;
pub mod util;
