//! Page composition types.
//!
//! A page request resolves to a [`PageView`]: either a redirect, or a [`PageBody`] holding one
//! heading and exactly one [`PageContent`] component. The server decides which view applies and
//! the client renderer turns a body into HTML.

/// Route unauthenticated visitors are sent to from gated pages.
pub const LOGIN_ROUTE: &str = "/login";

/// Analysis the reports page configures its report generator with.
pub const REPORT_ANALYSIS_ID: &str = "A-1234";

/// The single content component placed in a page body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageContent {
    /// Client information intake form.
    ClientInfoForm,
    /// Document upload form.
    FileUploadForm,
    /// Report generator bound to an analysis.
    ReportGenerator { analysis_id: String },
    /// Self-contained tax calculator demo.
    TaxCalculatorDemoExperience,
    /// Sign-in prompt pointing at the identity provider.
    LoginPrompt { login_url: String },
    /// Message shown for unknown paths.
    NotFound,
}

impl PageContent {
    /// Component name emitted in the rendered markup as `data-component`.
    pub fn component_name(&self) -> &'static str {
        match self {
            Self::ClientInfoForm => "ClientInfoForm",
            Self::FileUploadForm => "FileUploadForm",
            Self::ReportGenerator { .. } => "ReportGenerator",
            Self::TaxCalculatorDemoExperience => "TaxCalculatorDemoExperience",
            Self::LoginPrompt { .. } => "LoginPrompt",
            Self::NotFound => "NotFound",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageBody {
    /// Document title, suffixed with the application name when rendered.
    pub title: &'static str,
    pub heading: &'static str,
    pub content: PageContent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageView {
    /// Stop rendering and send the browser to the given path.
    Redirect(&'static str),
    Render(PageBody),
}

impl PageView {
    /// Returns the rendered body, or `None` for redirects.
    pub fn body(&self) -> Option<&PageBody> {
        match self {
            Self::Redirect(_) => None,
            Self::Render(body) => Some(body),
        }
    }
}
