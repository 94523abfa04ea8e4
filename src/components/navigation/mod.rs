pub mod expand_state;
pub mod nav_item;
pub mod nav_item_expandable;
pub mod side_nav;
pub mod styles;

pub use expand_state::ExpandState;
pub use nav_item::NavItem;
pub use nav_item_expandable::NavItemExpandable;
pub use side_nav::SideNav;
