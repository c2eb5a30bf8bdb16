//! Types shared between the server handlers and the page renderer.

pub mod api;
pub mod page;
pub mod user;
