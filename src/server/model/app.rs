//! Shared state handed to every Axum handler.

use sea_orm::DatabaseConnection;

/// Application state shared by all routes.
#[derive(Clone)]
pub struct AppState {
    /// Connection to the user store.
    pub db: DatabaseConnection,
    /// Identity provider sign-in URL rendered on the login page.
    pub login_url: String,
}
