// view-state for the portfolio page
//
// everything in this crate is platform-independent: the web front end supplies a
// HostDocument backed by the browser, while tests use the in-memory document
pub mod config;
pub mod content;
pub mod controller;
pub mod document;
pub mod icon;
pub mod nav;
pub mod section;
pub mod theme;

pub use controller::{PageController, PageSnapshot};
pub use document::{HostDocument, MemoryDocument};
pub use section::Section;
pub use theme::Theme;
