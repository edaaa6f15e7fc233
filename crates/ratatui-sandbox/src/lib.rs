//! `ratatui-sandbox` is a small component-rendering sandbox on top of ratatui.
//!
//! Units ([`component::Component`]) describe what they want on screen as a [`node::Node`]. A
//! [`root::Root`] is bootstrapped once against a named target of a [`document::Document`], paints
//! the root unit's description and forwards input to it. When a stateful unit asks for it, the root
//! describes the unit again and lets `ratatui::Terminal::draw` reconcile the new frame with the
//! previous one.
//!
//! ```no_run
//! use ratatui::Terminal;
//! use ratatui::backend::TestBackend;
//! use ratatui_sandbox::components::HomePage;
//! use ratatui_sandbox::components::NameList;
//! use ratatui_sandbox::document::Document;
//! use ratatui_sandbox::document::TargetArea;
//! use ratatui_sandbox::root::Root;
//! use ratatui_sandbox::root::RootOptions;
//!
//! # fn main() -> ratatui_sandbox::Result<()> {
//! let terminal = Terminal::new(TestBackend::new(40, 10))?;
//! let document = Document::new(terminal).with_target("app", TargetArea::Full);
//! let mut root = Root::create(document, &RootOptions::default())?;
//! root.render(HomePage::new(NameList::new(["Ada Lovelace", "Grace Hopper"])))?;
//! # Ok(())
//! # }
//! ```

pub use ratatui_sandbox_core::component;
pub use ratatui_sandbox_core::components;
pub use ratatui_sandbox_core::input;
pub use ratatui_sandbox_core::keymap;
pub use ratatui_sandbox_core::node;
pub use ratatui_sandbox_core::paint;
pub use ratatui_sandbox_core::state;
pub use ratatui_sandbox_core::theme;

#[cfg(feature = "crossterm")]
pub use ratatui_sandbox_core::crossterm_input;

pub mod document;
pub mod error;
pub mod root;

pub use error::Error;
pub use error::Result;
