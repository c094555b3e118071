use dioxus::prelude::*;

use crate::components::Mark;
use crate::i18n;
use crate::t;

// Shared theme. Native shells that cannot serve assets inline it themselves.
const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Page chrome: a fixed navigation bar holding the [`Mark`] as a link to the
/// site root, above a padded content region that renders `children` as-is.
///
/// The nav bar does not depend on the payload in any way.
#[component]
pub fn Frame(children: Element) -> Element {
    i18n::init();
    let home_label = t!("nav-home-label");

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        div { class: "frame",
            nav { id: "navbar", class: "frame__nav",
                div { class: "frame__nav-inner",
                    a { class: "frame__home", href: "/", aria_label: "{home_label}",
                        Mark {}
                    }
                }
            }
            main { class: "frame__content", {children} }
        }
    }
}
