//! The tutorial's units: a header, a list of names and the page that owns the like counter.

pub mod header;
pub mod home;
pub mod names;

pub use header::Header;
pub use header::HeaderProps;
pub use home::HomePage;
pub use names::NameList;
