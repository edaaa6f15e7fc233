//! `ratatui-sandbox-core` holds the pieces a component tutorial needs, without any terminal I/O.
//!
//! - [`node::Node`]: the description a unit produces.
//! - [`component::Component`]: the unit trait; stateful units also handle button actions.
//! - [`state::State`]: a single owned value with one mutation method.
//! - [`paint::paint`]: lays a description out into a ratatui buffer and reports button hit regions.
//! - [`components`]: `Header`, `NameList` and the stateful `HomePage`.
//!
//! Mounting and the event loop live in the `ratatui-sandbox` crate.

pub mod theme;

pub mod component;
pub mod node;
pub mod state;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod input;
pub mod keymap;
pub mod paint;

pub mod components;
