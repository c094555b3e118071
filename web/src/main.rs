use dioxus::prelude::*;

use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    // `launch` installs the platform tracing subscriber.
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        Router::<Route> {}
    }
}
