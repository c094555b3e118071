use dioxus::prelude::*;

use crate::catalog::LinkRecord;
use crate::i18n;
use crate::t;

/// Bordered panel with a heading, a one-line description and one external
/// link row per record, in input order.
///
/// Records are rendered verbatim: no sorting, dedup or target validation.
#[component]
pub fn GroupCard(
    title: String,
    description: String,
    links: &'static [LinkRecord],
) -> Element {
    i18n::init();
    let hint = t!("link-external-hint");

    rsx! {
        section { class: "group-card",
            h2 { class: "group-card__title", "{title}" }
            p { class: "group-card__description", "{description}" }
            div { class: "group-card__links",
                for (index, link) in links.iter().enumerate() {
                    a { key: "{index}", class: "link-row", href: link.target,
                        div { class: "link-row__body",
                            div { class: "link-row__text",
                                h3 { class: "link-row__title", {link.title} }
                                p { class: "link-row__description", {link.description} }
                            }
                            {external_icon()}
                            span { class: "visually-hidden", "{hint}" }
                        }
                    }
                }
            }
        }
    }
}

// Arrow pointing up and to the right.
fn external_icon() -> Element {
    rsx! {
        svg {
            class: "link-row__icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: "M7 7h10v10" }
            path { d: "M7 17 17 7" }
        }
    }
}
