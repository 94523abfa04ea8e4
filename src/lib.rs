//! Navigation components for the Canopy design system.
//!
//! The centrepiece is [`NavItemExpandable`], a list item whose label row toggles
//! a nested list of router links. [`SideNav`] renders a whole tree of items,
//! usually loaded through [`NavConfig`].

pub mod components;
pub mod config;
pub mod error;
pub mod types;

pub use components::navigation::{ExpandState, NavItem, NavItemExpandable, SideNav};
pub use config::NavConfig;
pub use error::{NavError, NavResult};
pub use types::{NavChild, NavEntry};
