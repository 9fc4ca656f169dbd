pub mod footer;
pub mod form_panel;
pub mod header;
pub mod logs;
pub mod result_panel;
