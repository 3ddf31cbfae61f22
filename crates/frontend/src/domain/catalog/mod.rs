//! Data management screen for the ward catalogs
pub mod ui;
