//! Tests for the authentication API routes.

use axum::http::{header, StatusCode};
use taxdesk::model::user::UserDto;
use taxdesk_test_utils::prelude::*;

use crate::util::{body_text, get, signed_in_cookie};

/// Expect 200 with the signed-in user's details
#[tokio::test]
async fn get_user_returns_session_user() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    test.insert_mock_user("u1", "a@x.com").await?;
    let cookie = signed_in_cookie(&test, "u1").await?;

    let response = get(&test, "/api/auth/user", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let user: UserDto = serde_json::from_str(&body_text(response).await)?;
    assert_eq!(user.id, "u1");
    assert_eq!(user.email, "a@x.com");

    Ok(())
}

/// Expect 404 without a session
#[tokio::test]
async fn get_user_not_found_without_session() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let response = get(&test, "/api/auth/user", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 when the session's user no longer exists
#[tokio::test]
async fn get_user_not_found_for_deleted_user() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let cookie = signed_in_cookie(&test, "u1").await?;

    let response = get(&test, "/api/auth/user", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 when the user lookup fails
#[tokio::test]
async fn get_user_internal_error_when_lookup_fails() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let cookie = signed_in_cookie(&test, "u1").await?;

    let response = get(&test, "/api/auth/user", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect logout to redirect to /login and end the session
#[tokio::test]
async fn logout_redirects_to_login() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let cookie = signed_in_cookie(&test, "u1").await?;

    let response = get(&test, "/api/auth/logout", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/login");

    let response = get(&test, "/client-info", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
