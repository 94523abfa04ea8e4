use dioxus::prelude::*;

use super::styles::{label_class, link_item_class};

#[component]
pub fn NavItem(route: String, name: String) -> Element {
    rsx! {
        li {
            class: link_item_class(),

            Link {
                to: route,
                class: label_class(),
                aria_label: name.clone(),
                "{name}"
            }
        }
    }
}
