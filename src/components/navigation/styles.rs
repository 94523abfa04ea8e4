//! Class names for the navigation components.
//!
//! Everything here is a pure function of the expand state so the markup can be
//! recomputed on every render.

use super::expand_state::ExpandState;

const ITEM_LAYOUT: &str = "display-flex flexDirection-column justifyContent-center alignItems-flexStart";
const ROW_LAYOUT: &str = "padding-m display-flex flexDirection-row justifyContent-spaceBetween alignItems-center";
const BOTTOM_RULE: &str = "borderWidth-0 borderBottom-1 borderStyle-solid borderColor-smoke";

pub const NESTED_LINK_CLASS: &str = "padding-s paddingLeft-l";
pub const SIDE_NAV_CLASS: &str = "side-nav display-flex flexDirection-column";
pub const SIDE_NAV_LIST_CLASS: &str = "nav-list display-flex flexDirection-column";

/// Join non-empty tokens with single spaces
pub fn classes<'a>(tokens: impl IntoIterator<Item = &'a str>) -> String {
    tokens
        .into_iter()
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn item_class(state: ExpandState) -> String {
    let open = if state.is_open() { "open" } else { "" };
    classes(["nav-item", "nav-item-expandable", open, ITEM_LAYOUT])
}

pub fn label_class() -> String {
    classes(["label", ROW_LAYOUT, BOTTOM_RULE])
}

pub fn arrow_class(state: ExpandState) -> &'static str {
    if state.is_open() {
        "arrow arrow-up"
    } else {
        "arrow arrow-down"
    }
}

pub fn nested_list_class(state: ExpandState) -> String {
    let display = if state.is_open() {
        "display-flex"
    } else {
        "display-none"
    };
    classes(["nested", display, "flexDirection-column", BOTTOM_RULE])
}

/// Row class for a plain, non-expandable item
pub fn link_item_class() -> String {
    classes(["nav-item", ITEM_LAYOUT])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(class: &str) -> Vec<&str> {
        class.split(' ').collect()
    }

    #[test]
    fn test_classes_skips_empty_tokens() {
        assert_eq!(classes(["a", "", "b"]), "a b");
        assert_eq!(classes(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_item_class_open_token() {
        let collapsed = item_class(ExpandState::Collapsed);
        assert!(!tokens(&collapsed).contains(&"open"));
        assert!(!collapsed.contains("false"));
        assert!(!collapsed.contains("  "));

        let expanded = item_class(ExpandState::Expanded);
        assert_eq!(
            expanded,
            "nav-item nav-item-expandable open display-flex flexDirection-column justifyContent-center alignItems-flexStart"
        );
    }

    #[test]
    fn test_arrow_direction() {
        assert_eq!(arrow_class(ExpandState::Collapsed), "arrow arrow-down");
        assert_eq!(arrow_class(ExpandState::Expanded), "arrow arrow-up");
    }

    #[test]
    fn test_nested_list_visibility() {
        let hidden = nested_list_class(ExpandState::Collapsed);
        assert!(tokens(&hidden).contains(&"display-none"));
        assert!(!tokens(&hidden).contains(&"display-flex"));

        let shown = nested_list_class(ExpandState::Expanded);
        assert_eq!(
            shown,
            "nested display-flex flexDirection-column borderWidth-0 borderBottom-1 borderStyle-solid borderColor-smoke"
        );
    }

    #[test]
    fn test_label_class_is_state_independent() {
        assert_eq!(
            label_class(),
            "label padding-m display-flex flexDirection-row justifyContent-spaceBetween alignItems-center borderWidth-0 borderBottom-1 borderStyle-solid borderColor-smoke"
        );
    }
}
