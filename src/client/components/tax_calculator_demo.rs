use dioxus::prelude::*;

/// Example brackets shown in the demo table as (rate, upper bound of the bracket).
const DEMO_BRACKETS: [(&str, &str); 4] = [
    ("10%", "$11,600"),
    ("12%", "$47,150"),
    ("22%", "$100,525"),
    ("24%", "$191,950"),
];

#[component]
pub fn TaxCalculatorDemoExperience() -> Element {
    rsx!(
        section {
            class: "card shadow-sm p-6 flex flex-col gap-4",
            "data-component": "TaxCalculatorDemoExperience",
            p { "Try the calculator with sample figures. Nothing you enter here is saved." }
            fieldset { class: "fieldset",
                label { class: "label", r#for: "demo-income", "Annual income" }
                input { class: "input w-full", id: "demo-income", name: "income", r#type: "number", min: "0" }
            }
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Rate" }
                        th { "Income up to" }
                    }
                }
                tbody {
                    {DEMO_BRACKETS.iter().map(|(rate, bound)| rsx! {
                        tr {
                            td { "{rate}" }
                            td { "{bound}" }
                        }
                    })}
                }
            }
        }
    )
}
