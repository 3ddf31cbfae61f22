//! Tab content
//!
//! - `page`: TabPage, shows or hides the content of one open page
//! - `registry`: Page → view, the single place pages are wired to screens

pub mod page;
pub mod registry;

pub use page::TabPage;
