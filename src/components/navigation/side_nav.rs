use dioxus::prelude::*;

use super::nav_item::NavItem;
use super::nav_item_expandable::NavItemExpandable;
use super::styles::{SIDE_NAV_CLASS, SIDE_NAV_LIST_CLASS};
use crate::types::NavEntry;

/// Side navigation built from a list of entries.
///
/// Each expandable entry owns its own open state, so opening one does not
/// affect the others.
#[component]
pub fn SideNav(entries: Vec<NavEntry>) -> Element {
    rsx! {
        nav {
            class: SIDE_NAV_CLASS,

            ul {
                class: SIDE_NAV_LIST_CLASS,

                for (idx, entry) in entries.into_iter().enumerate() {
                    {
                        match entry {
                            NavEntry::Link { route, name } => rsx! {
                                NavItem { key: "{idx}", route, name }
                            },
                            NavEntry::Expandable { label, nested } => rsx! {
                                NavItemExpandable { key: "{idx}", nested, "{label}" }
                            },
                        }
                    }
                }
            }
        }
    }
}
