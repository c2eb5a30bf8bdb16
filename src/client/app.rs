use dioxus::prelude::*;

use crate::{
    client::components::{
        ClientInfoForm, FileUploadForm, LoginPrompt, Navbar, NotFoundNotice, Page,
        ReportGenerator, TaxCalculatorDemoExperience,
    },
    model::page::{PageBody, PageContent},
};

#[derive(Props, Clone, PartialEq)]
pub struct AppShellProps {
    body: PageBody,
}

/// Root component: navigation bar plus the page frame with its single content component.
pub fn AppShell(props: AppShellProps) -> Element {
    let PageBody {
        heading, content, ..
    } = props.body;

    let content = match content {
        PageContent::ClientInfoForm => rsx!(ClientInfoForm {}),
        PageContent::FileUploadForm => rsx!(FileUploadForm {}),
        PageContent::ReportGenerator { analysis_id } => rsx!(ReportGenerator { analysis_id }),
        PageContent::TaxCalculatorDemoExperience => rsx!(TaxCalculatorDemoExperience {}),
        PageContent::LoginPrompt { login_url } => rsx!(LoginPrompt { login_url }),
        PageContent::NotFound => rsx!(NotFoundNotice {}),
    };

    rsx!(
        Navbar {}
        Page { heading,
            {content}
        }
    )
}

/// Renders `body` into a complete HTML document.
pub fn render_document(body: &PageBody) -> String {
    let markup = dioxus_ssr::render_element(rsx!(AppShell { body: body.clone() }));

    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"/>\
        <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\
        <title>{} | Taxdesk</title></head><body>{}</body></html>",
        body.title, markup
    )
}

#[cfg(test)]
mod tests {
    use crate::{
        client::app::render_document,
        model::page::{PageBody, PageContent, REPORT_ANALYSIS_ID},
    };

    fn body(content: PageContent) -> PageBody {
        PageBody {
            title: "Client Information",
            heading: "Client Information",
            content,
        }
    }

    /// Expect one heading and one content component in the rendered document
    #[test]
    fn renders_single_heading_and_component() {
        let html = render_document(&body(PageContent::ClientInfoForm));

        assert_eq!(html.matches("<h1").count(), 1);
        assert_eq!(html.matches("data-component=").count(), 1);
        assert!(html.contains("data-component=\"ClientInfoForm\""));
        assert!(html.contains("<title>Client Information | Taxdesk</title>"));
    }

    /// Expect the report generator to carry its analysis id into the markup
    #[test]
    fn renders_report_generator_with_analysis_id() {
        let html = render_document(&body(PageContent::ReportGenerator {
            analysis_id: REPORT_ANALYSIS_ID.to_string(),
        }));

        assert!(html.contains("data-component=\"ReportGenerator\""));
        assert!(html.contains("data-analysis-id=\"A-1234\""));
    }

    /// Expect every content variant to render its own component marker
    #[test]
    fn renders_component_marker_for_each_content() {
        let contents = [
            PageContent::ClientInfoForm,
            PageContent::FileUploadForm,
            PageContent::ReportGenerator {
                analysis_id: "A-1".to_string(),
            },
            PageContent::TaxCalculatorDemoExperience,
            PageContent::LoginPrompt {
                login_url: "https://id.example.com".to_string(),
            },
            PageContent::NotFound,
        ];

        for content in contents {
            let marker = format!("data-component=\"{}\"", content.component_name());

            let html = render_document(&body(content));

            assert_eq!(html.matches(&marker).count(), 1, "missing {marker}");
        }
    }
}
