use dioxus::prelude::*;

#[component]
pub fn LoginPrompt(login_url: String) -> Element {
    rsx!(
        div {
            class: "card shadow-sm p-6 flex flex-col items-center gap-4",
            "data-component": "LoginPrompt",
            p { "You need to sign in to view this page." }
            a { href: "{login_url}",
                button { class: "btn btn-primary w-42", "Sign in" }
            }
        }
    )
}
