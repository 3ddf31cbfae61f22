//! Menu composer
//!
//! - view_model.rs: MenuDraft state and save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::MenuDetails;
pub use view_model::MenuDetailsViewModel;
