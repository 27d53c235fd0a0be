pub mod list_view;
pub mod notice;
pub mod validation;
