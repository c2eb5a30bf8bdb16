//! Page composition and the session gate.
//!
//! Each page is described by an [`AppPage`] entry: its path, whether it requires a session, and
//! the body it renders. [`PageService`] resolves the session through an injected
//! [`SessionResolver`] and builds the body only once the gate has admitted the request.

use dioxus_logger::tracing;

use crate::{
    model::page::{PageBody, PageContent, PageView, LOGIN_ROUTE, REPORT_ANALYSIS_ID},
    server::{error::Error, model::session::current::SessionResolver},
};

/// Whether a page requires a signed-in session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAccess {
    /// Redirect to the login route when no session is present.
    Gated,
    /// Render regardless of session state.
    Public,
}

/// The application's content pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppPage {
    /// Client information intake form.
    ClientInfo,
    /// Document upload form.
    Upload,
    /// Report generator for the fixed analysis.
    Reports,
    /// Interactive tax calculator demo.
    TaxCalculatorDemo,
}

impl AppPage {
    /// Every content page, in navigation order.
    pub const ALL: [AppPage; 4] = [
        AppPage::ClientInfo,
        AppPage::Upload,
        AppPage::Reports,
        AppPage::TaxCalculatorDemo,
    ];

    /// Route the page is served on.
    pub fn path(&self) -> &'static str {
        match self {
            Self::ClientInfo => "/client-info",
            Self::Upload => "/upload",
            Self::Reports => "/reports",
            Self::TaxCalculatorDemo => "/tax-calculator-demo",
        }
    }

    /// Whether the page sits behind the session gate.
    pub fn access(&self) -> PageAccess {
        match self {
            Self::ClientInfo | Self::Upload => PageAccess::Gated,
            // Reports and the demo have always been reachable without signing in.
            Self::Reports | Self::TaxCalculatorDemo => PageAccess::Public,
        }
    }

    fn body(&self) -> PageBody {
        match self {
            Self::ClientInfo => PageBody {
                title: "Client Information",
                heading: "Client Information",
                content: PageContent::ClientInfoForm,
            },
            Self::Upload => PageBody {
                title: "Upload Documents",
                heading: "Upload Documents",
                content: PageContent::FileUploadForm,
            },
            Self::Reports => PageBody {
                title: "Reports",
                heading: "Reports",
                content: PageContent::ReportGenerator {
                    analysis_id: REPORT_ANALYSIS_ID.to_string(),
                },
            },
            Self::TaxCalculatorDemo => PageBody {
                title: "Tax Calculator Demo",
                heading: "Tax Calculator Demo",
                content: PageContent::TaxCalculatorDemoExperience,
            },
        }
    }
}

/// Resolves the session for a request and renders `body` only if one is present.
///
/// Session absence is not an error: it produces a redirect to [`LOGIN_ROUTE`]. Errors from the
/// resolver are returned unchanged.
pub async fn gate<R, F>(sessions: &R, body: F) -> Result<PageView, Error>
where
    R: SessionResolver + ?Sized,
    F: FnOnce() -> PageBody,
{
    match sessions.resolve().await? {
        None => Ok(PageView::Redirect(LOGIN_ROUTE)),
        Some(session) => {
            tracing::debug!(user_id = %session.user_id, "Session admitted to gated page");

            Ok(PageView::Render(body()))
        }
    }
}

/// Service rendering pages for a single request.
pub struct PageService<'a, R: SessionResolver + ?Sized> {
    sessions: &'a R,
}

impl<'a, R: SessionResolver + ?Sized> PageService<'a, R> {
    /// Creates a new instance of [`PageService`] for the request's session resolver
    pub fn new(sessions: &'a R) -> Self {
        Self { sessions }
    }

    /// Renders `page`, applying the session gate when the page requires it.
    pub async fn render(&self, page: AppPage) -> Result<PageView, Error> {
        match page.access() {
            PageAccess::Gated => {
                let view = gate(self.sessions, || page.body()).await?;

                if let PageView::Redirect(to) = view {
                    tracing::debug!(path = page.path(), to, "Redirecting request without session");
                }

                Ok(view)
            }
            PageAccess::Public => Ok(PageView::Render(page.body())),
        }
    }

    /// Client information form, gated.
    pub async fn client_info_page(&self) -> Result<PageView, Error> {
        self.render(AppPage::ClientInfo).await
    }

    /// Document upload form, gated.
    pub async fn upload_page(&self) -> Result<PageView, Error> {
        self.render(AppPage::Upload).await
    }

    /// Report generator for [`REPORT_ANALYSIS_ID`], public.
    pub async fn reports_page(&self) -> Result<PageView, Error> {
        self.render(AppPage::Reports).await
    }

    /// Tax calculator demo, public.
    pub async fn tax_calculator_demo_page(&self) -> Result<PageView, Error> {
        self.render(AppPage::TaxCalculatorDemo).await
    }
}

/// Sign-in page pointing visitors at the identity provider.
pub fn login_page(login_url: &str) -> PageView {
    PageView::Render(PageBody {
        title: "Sign In",
        heading: "Sign In",
        content: PageContent::LoginPrompt {
            login_url: login_url.to_string(),
        },
    })
}

/// Page shown for paths no route matches.
pub fn not_found_page() -> PageView {
    PageView::Render(PageBody {
        title: "Page Not Found",
        heading: "Page Not Found",
        content: PageContent::NotFound,
    })
}
