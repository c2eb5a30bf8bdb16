//! Server-rendered page components.
//!
//! Pages are Dioxus components rendered to HTML on the server with `dioxus-ssr`. The server
//! decides which [`PageBody`](crate::model::page::PageBody) to render and [`app`] turns it into
//! a full HTML document.

pub mod app;
pub mod components;

pub use app::{render_document, AppShell};
