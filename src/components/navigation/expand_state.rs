use dioxus::prelude::Key;

/// Open/closed state of an expandable navigation item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExpandState {
    #[default]
    Collapsed,
    Expanded,
}

impl ExpandState {
    pub fn from_open(open: bool) -> Self {
        if open {
            ExpandState::Expanded
        } else {
            ExpandState::Collapsed
        }
    }

    pub fn is_open(self) -> bool {
        self == ExpandState::Expanded
    }

    pub fn toggled(self) -> Self {
        match self {
            ExpandState::Collapsed => ExpandState::Expanded,
            ExpandState::Expanded => ExpandState::Collapsed,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Value for the label row's `aria-expanded` attribute
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}

/// Only Enter activates the label row from the keyboard.
pub fn is_activation_key(key: &Key) -> bool {
    matches!(key, Key::Enter)
}
