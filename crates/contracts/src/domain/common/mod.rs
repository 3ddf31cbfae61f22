//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod aggregate_root;
pub mod catalog;
pub mod text;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
pub use catalog::{CatalogForm, CatalogKind, CatalogRow};
pub use text::normalize_text;
