use dioxus::prelude::*;

/// Intake form collecting the client's contact and filing details.
#[component]
pub fn ClientInfoForm() -> Element {
    rsx!(
        form {
            class: "card shadow-sm p-6 flex flex-col gap-4",
            "data-component": "ClientInfoForm",
            fieldset { class: "fieldset",
                label { class: "label", r#for: "client-name", "Full name" }
                input { class: "input w-full", id: "client-name", name: "name", r#type: "text", required: true }
            }
            fieldset { class: "fieldset",
                label { class: "label", r#for: "client-email", "Email" }
                input { class: "input w-full", id: "client-email", name: "email", r#type: "email", required: true }
            }
            fieldset { class: "fieldset",
                label { class: "label", r#for: "client-tax-id", "Tax ID" }
                input { class: "input w-full", id: "client-tax-id", name: "tax_id", r#type: "text" }
            }
            fieldset { class: "fieldset",
                label { class: "label", r#for: "client-filing-status", "Filing status" }
                select { class: "select w-full", id: "client-filing-status", name: "filing_status",
                    option { value: "single", "Single" }
                    option { value: "married_joint", "Married filing jointly" }
                    option { value: "married_separate", "Married filing separately" }
                    option { value: "head_of_household", "Head of household" }
                }
            }
            button { class: "btn btn-primary", r#type: "submit", "Save client information" }
        }
    )
}
