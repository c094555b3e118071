use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::catalog;
use crate::components::{Frame, GroupCard};
use crate::i18n;
use crate::t;

/// Landing page: the [`Frame`] around a responsive grid with one
/// [`GroupCard`] per catalog group, in catalog order.
#[component]
pub fn Home() -> Element {
    i18n::init();

    let groups = catalog::groups();
    debug!(groups = groups.len(), "home render");

    let title = t!("page-title");
    let heading = t!("page-heading");

    rsx! {
        document::Title { "{title}" }
        Frame {
            section { class: "page page-home",
                h1 { class: "visually-hidden", "{heading}" }
                div { class: "catalog-grid",
                    for (index, group) in groups.iter().enumerate() {
                        GroupCard {
                            key: "{index}",
                            title: group.title.to_string(),
                            description: group.description.to_string(),
                            links: group.links,
                        }
                    }
                }
            }
        }
    }
}
