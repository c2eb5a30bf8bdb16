//! HTTP routing and OpenAPI documentation configuration.
//!
//! Page routes render HTML through the page controllers. API routes are registered with their
//! utoipa specifications and documented with Swagger UI at `/api/docs`.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::page::LOGIN_ROUTE,
    server::{controller, model::app::AppState, service::page::AppPage},
};

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `GET /client-info` - Client information form (session required)
/// - `GET /upload` - Document upload form (session required)
/// - `GET /reports` - Report generator
/// - `GET /tax-calculator-demo` - Tax calculator demo
/// - `GET /login` - Sign-in page
/// - `GET /api/auth/user` - Get current user information
/// - `GET /api/auth/logout` - Logout current user
///
/// Unmatched paths render the not found page with a 404 status.
///
/// # Returns
/// An Axum `Router<AppState>`, the session layer is applied by the caller.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Taxdesk", description = "Taxdesk API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::auth::logout))
        .split_for_parts();

    let pages = Router::new()
        .route(AppPage::ClientInfo.path(), get(controller::page::client_info))
        .route(AppPage::Upload.path(), get(controller::page::upload))
        .route(AppPage::Reports.path(), get(controller::page::reports))
        .route(
            AppPage::TaxCalculatorDemo.path(),
            get(controller::page::tax_calculator_demo),
        )
        .route(LOGIN_ROUTE, get(controller::page::login));

    routes
        .merge(pages)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(controller::page::not_found)
}
