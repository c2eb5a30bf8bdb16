use dioxus::prelude::*;

#[component]
pub fn NotFoundNotice() -> Element {
    rsx!(
        div { "data-component": "NotFound",
            p { "The page you were looking for does not exist." }
            a { class: "link", href: "/client-info", "Back to client information" }
        }
    )
}
