use dioxus::prelude::*;

/// Report generation panel bound to a single analysis.
#[component]
pub fn ReportGenerator(analysis_id: String) -> Element {
    rsx!(
        section {
            class: "card shadow-sm p-6 flex flex-col gap-4",
            "data-component": "ReportGenerator",
            "data-analysis-id": "{analysis_id}",
            h2 { class: "card-title",
                "Analysis {analysis_id}"
            }
            p { "Generate a summary of deductions, credits, and estimated liability for this analysis." }
            div { class: "flex gap-2",
                button { class: "btn btn-primary", r#type: "button", "Generate report" }
                button { class: "btn btn-outline", r#type: "button", "Download PDF" }
            }
        }
    )
}
