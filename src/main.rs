use canopy_nav::{NavConfig, NavEntry, SideNav};
use dioxus::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/:..segments")]
    Page { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

static NAV_CONFIG: &str = include_str!("../assets/nav.json");

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::DEBUG) {
        eprintln!("failed to initialise logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

fn load_entries() -> Vec<NavEntry> {
    match NavConfig::from_json_str(NAV_CONFIG) {
        Ok(config) => config.entries,
        Err(err) => {
            tracing::error!("navigation config rejected: {}", err);
            Vec::new()
        }
    }
}

#[component]
fn Page(segments: Vec<String>) -> Element {
    let entries = use_hook(load_entries);
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "layout display-flex flexDirection-row",

            SideNav { entries }

            main {
                class: "content padding-m",
                h1 { "{path}" }
            }
        }
    }
}
