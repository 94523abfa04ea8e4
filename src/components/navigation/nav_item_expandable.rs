use dioxus::prelude::*;

use super::expand_state::{is_activation_key, ExpandState};
use super::styles::{arrow_class, item_class, label_class, nested_list_class, NESTED_LINK_CLASS};
use crate::types::NavChild;

/// One rendered entry of the nested list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NestedLink {
    pub key: String,
    pub route: String,
    pub text: String,
    pub aria_label: String,
    pub class: &'static str,
}

/// Map `nested` one-to-one onto rendered links, keeping their order.
pub fn nested_links(nested: &[NavChild]) -> Vec<NestedLink> {
    nested
        .iter()
        .map(|child| NestedLink {
            key: child.name.clone(),
            route: child.route.clone(),
            text: child.name.clone(),
            aria_label: child.name.clone(),
            class: NESTED_LINK_CLASS,
        })
        .collect()
}

/// Navigation list item whose label row shows or hides a list of nested links.
///
/// Clicking the label row, or pressing Enter while it has focus, flips the item
/// between collapsed and expanded. The nested list stays in the tree either way;
/// only its display class changes. Must be rendered under a `Router`.
#[component]
pub fn NavItemExpandable(
    #[props(default)] nested: Vec<NavChild>,
    #[props(default)] default_open: bool,
    children: Element,
) -> Element {
    let mut state = use_signal(|| ExpandState::from_open(default_open));

    let current = state();
    let links = nested_links(&nested);
    let nested_count = links.len();

    rsx! {
        li {
            class: item_class(current),

            div {
                class: label_class(),
                role: "button",
                tabindex: "0",
                aria_expanded: current.aria_expanded(),
                onclick: move |_| {
                    state.write().toggle();
                    tracing::debug!(state = ?state(), nested = nested_count, "nav item toggled by click");
                },
                onkeydown: move |evt: KeyboardEvent| {
                    // only Enter touches the signal, so other keys never re-render
                    if is_activation_key(&evt.key()) {
                        state.write().toggle();
                        tracing::debug!(state = ?state(), nested = nested_count, "nav item toggled by key");
                    }
                },

                {children}
                div { class: arrow_class(current) }
            }

            ul {
                class: nested_list_class(current),

                for link in links {
                    li {
                        key: "{link.key}",
                        Link {
                            to: link.route,
                            class: link.class.to_string(),
                            aria_label: link.aria_label,
                            "{link.text}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_links_keep_length_and_order() {
        let nested = vec![
            NavChild::new("/a", "Alpha"),
            NavChild::new("/b", "Beta"),
            NavChild::new("/c", "Gamma"),
        ];
        let links = nested_links(&nested);

        assert_eq!(links.len(), nested.len());
        for (link, child) in links.iter().zip(&nested) {
            assert_eq!(link.route, child.route);
            assert_eq!(link.text, child.name);
            assert_eq!(link.aria_label, child.name);
            assert_eq!(link.key, child.name);
            assert_eq!(link.class, "padding-s paddingLeft-l");
        }
    }

    #[test]
    fn test_nested_links_do_not_dedupe() {
        let nested = vec![NavChild::new("/x", "Same"), NavChild::new("/y", "Same")];
        let routes: Vec<String> = nested_links(&nested).into_iter().map(|l| l.route).collect();
        assert_eq!(routes, vec!["/x", "/y"]);
    }

    #[test]
    fn test_empty_nested_renders_no_links() {
        assert!(nested_links(&[]).is_empty());
    }

    #[test]
    fn test_menu_scenario() {
        let nested = vec![NavChild::new("/a", "Alpha"), NavChild::new("/b", "Beta")];
        let mut state = ExpandState::default();
        assert_eq!(nested_list_class(state).split(' ').nth(1), Some("display-none"));

        state.toggle();
        assert_eq!(nested_list_class(state).split(' ').nth(1), Some("display-flex"));
        let visible: Vec<(String, String)> = nested_links(&nested)
            .into_iter()
            .map(|l| (l.text, l.route))
            .collect();
        assert_eq!(
            visible,
            vec![
                ("Alpha".to_string(), "/a".to_string()),
                ("Beta".to_string(), "/b".to_string()),
            ]
        );

        state.toggle();
        assert_eq!(nested_list_class(state).split(' ').nth(1), Some("display-none"));
        assert_eq!(nested, vec![NavChild::new("/a", "Alpha"), NavChild::new("/b", "Beta")]);
    }
}
