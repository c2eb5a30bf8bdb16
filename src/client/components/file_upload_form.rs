use dioxus::prelude::*;

#[component]
pub fn FileUploadForm() -> Element {
    rsx!(
        form {
            class: "card shadow-sm p-6 flex flex-col gap-4",
            enctype: "multipart/form-data",
            "data-component": "FileUploadForm",
            p { "Upload W-2s, 1099s, receipts, and any other documents for this tax year." }
            input {
                class: "file-input w-full",
                name: "documents",
                r#type: "file",
                accept: ".pdf,.png,.jpg,.jpeg,.csv",
                multiple: true,
            }
            button { class: "btn btn-primary", r#type: "submit", "Upload documents" }
        }
    )
}
