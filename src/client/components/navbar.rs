use dioxus::prelude::*;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                a { href: "/client-info",
                    p { class: "text-xl",
                        "Taxdesk"
                    }
                }
            }
            div {
                class: "navbar-center",
                ul { class: "menu menu-horizontal gap-2",
                    li { a { href: "/client-info", "Client Info" } }
                    li { a { href: "/upload", "Upload" } }
                    li { a { href: "/reports", "Reports" } }
                    li { a { href: "/tax-calculator-demo", "Calculator Demo" } }
                }
            }
            div {
                class: "navbar-end",
                a { href: "/api/auth/logout",
                    button {
                        class: "btn btn-outline",
                        "Logout"
                    }
                }
            }
        }
    }
}
