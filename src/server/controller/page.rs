//! Handlers for the server-rendered pages.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::{
    client::render_document,
    model::page::PageView,
    server::{
        error::Error,
        model::app::AppState,
        service::page::{login_page, not_found_page, PageService},
    },
};

/// Redirects become 307 responses, rendered bodies a full HTML document.
impl IntoResponse for PageView {
    fn into_response(self) -> Response {
        match self {
            PageView::Redirect(to) => Redirect::temporary(to).into_response(),
            PageView::Render(body) => Html(render_document(&body)).into_response(),
        }
    }
}

/// Client information form, requires a session
pub async fn client_info(session: Session) -> Result<PageView, Error> {
    PageService::new(&session).client_info_page().await
}

/// Document upload form, requires a session
pub async fn upload(session: Session) -> Result<PageView, Error> {
    PageService::new(&session).upload_page().await
}

/// Report generator for the fixed analysis, public
pub async fn reports(session: Session) -> Result<PageView, Error> {
    PageService::new(&session).reports_page().await
}

/// Tax calculator demo, public
pub async fn tax_calculator_demo(session: Session) -> Result<PageView, Error> {
    PageService::new(&session).tax_calculator_demo_page().await
}

/// Sign-in page linking to the identity provider, public
pub async fn login(State(state): State<AppState>) -> PageView {
    login_page(&state.login_url)
}

/// Fallback for unmatched paths, rendered with a 404 status
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, not_found_page())
}
