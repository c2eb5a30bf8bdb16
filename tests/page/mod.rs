//! Tests for the rendered pages and their session gate.

use axum::http::{header, StatusCode};
use taxdesk_test_utils::prelude::*;

use crate::util::{body_text, get, signed_in_cookie, TEST_LOGIN_URL};

/// Expect a redirect to /login and no form when visiting client info without a session
#[tokio::test]
async fn client_info_redirects_without_session() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let response = get(&test, "/client-info", None).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/login");
    let body = body_text(response).await;
    assert!(!body.contains("ClientInfoForm"));

    Ok(())
}

/// Expect the client info form under a single heading with a session
#[tokio::test]
async fn client_info_renders_with_session() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let cookie = signed_in_cookie(&test, "u1").await?;

    let response = get(&test, "/client-info", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert_eq!(body.matches("<h1").count(), 1);
    assert_eq!(body.matches("data-component=").count(), 1);
    assert!(body.contains("data-component=\"ClientInfoForm\""));

    Ok(())
}

/// Expect the upload form and no redirect with a session
#[tokio::test]
async fn upload_renders_with_session() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let cookie = signed_in_cookie(&test, "u1").await?;

    let response = get(&test, "/upload", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::LOCATION).is_none());
    let body = body_text(response).await;
    assert!(body.contains("data-component=\"FileUploadForm\""));

    Ok(())
}

/// Expect the upload page to redirect without a session
#[tokio::test]
async fn upload_redirects_without_session() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let response = get(&test, "/upload", None).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/login");

    Ok(())
}

/// Expect the report generator for analysis A-1234 with and without a session
#[tokio::test]
async fn reports_render_regardless_of_session() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let cookie = signed_in_cookie(&test, "u1").await?;

    for cookie in [None, Some(cookie.as_str())] {
        let response = get(&test, "/reports", cookie).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("data-component=\"ReportGenerator\""));
        assert!(body.contains("data-analysis-id=\"A-1234\""));
    }

    Ok(())
}

/// Expect the demo experience without a session
#[tokio::test]
async fn tax_calculator_demo_renders_without_session() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let response = get(&test, "/tax-calculator-demo", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("data-component=\"TaxCalculatorDemoExperience\""));

    Ok(())
}

/// Expect the login page to link to the configured identity provider
#[tokio::test]
async fn login_links_to_identity_provider() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let response = get(&test, "/login", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("data-component=\"LoginPrompt\""));
    assert!(body.contains(TEST_LOGIN_URL));

    Ok(())
}

/// Expect a 404 page for unknown paths
#[tokio::test]
async fn unknown_path_renders_not_found() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let response = get(&test, "/does-not-exist", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_text(response).await;
    assert!(body.contains("data-component=\"NotFound\""));

    Ok(())
}
