//! UIコンポーネント

pub mod csv_upload;
pub mod error_banner;
pub mod header;
pub mod loader;
pub mod name_form;
pub mod result_panel;
pub mod result_table;
