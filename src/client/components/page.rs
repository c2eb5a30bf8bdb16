use dioxus::prelude::*;

/// Page frame holding the page heading above its content.
#[component]
pub fn Page(class: Option<&'static str>, heading: &'static str, children: Element) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        main {
            class: "min-h-screen pt-[64px] p-4 flex flex-col items-center {class}",
            div { class: "w-full max-w-[960px] flex flex-col gap-4",
                h1 { class: "text-2xl font-semibold",
                    "{heading}"
                }
                {children}
            }
        }
    )
}
