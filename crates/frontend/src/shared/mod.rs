pub mod api_client;
pub mod api_error;
pub mod api_utils;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod ui_mode;
