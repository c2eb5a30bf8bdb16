//! Shared helpers for driving the router in HTTP-level tests.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use taxdesk::server::{
    model::{
        app::AppState,
        session::user::{SessionUserId, SESSION_USER_ID_KEY},
    },
    router::routes,
};
use taxdesk_test_utils::{TestError, TestSetup};
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;

pub static TEST_LOGIN_URL: &str = "https://id.example.com/sign-in";

/// Build the application router over the test database and session store.
pub fn app(test: &TestSetup) -> Router {
    routes()
        .with_state(AppState {
            db: test.state.db.clone(),
            login_url: TEST_LOGIN_URL.to_string(),
        })
        .layer(SessionManagerLayer::new(test.store.clone()))
}

/// Store a signed-in session for `user_id` and return its cookie header value.
pub async fn signed_in_cookie(test: &TestSetup, user_id: &str) -> Result<String, TestError> {
    let id = test
        .persisted_session(SESSION_USER_ID_KEY, SessionUserId(user_id.to_string()))
        .await?;

    Ok(format!("id={}", id))
}

/// Send a GET request for `uri`, with the session cookie when provided.
pub async fn get(test: &TestSetup, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }

    app(test)
        .oneshot(request.body(Body::empty()).expect("valid request"))
        .await
        .expect("router is infallible")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");

    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
