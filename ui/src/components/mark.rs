use dioxus::prelude::*;

/// Text drawn at the center of the emblem.
pub const WORDMARK: &str = "PRXM";

/// Site emblem: two overlapping outlined circles with the wordmark centered
/// between them. `class` is appended to the base `mark` class.
#[component]
pub fn Mark(class: Option<String>) -> Element {
    let class = match class.as_deref().map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("mark {extra}"),
        _ => "mark".to_string(),
    };

    rsx! {
        div { class: "{class}",
            svg {
                class: "mark__svg",
                view_box: "0 0 1000 1000",
                "aria-hidden": "true",
                circle {
                    cx: "400",
                    cy: "500",
                    r: "300",
                    fill: "none",
                    stroke: "black",
                    stroke_width: "2",
                }
                circle {
                    cx: "600",
                    cy: "500",
                    r: "300",
                    fill: "none",
                    stroke: "black",
                    stroke_width: "2",
                }
                text {
                    class: "mark__wordmark",
                    x: "500",
                    y: "525",
                    text_anchor: "middle",
                    font_family: "serif",
                    {WORDMARK}
                }
            }
        }
    }
}
