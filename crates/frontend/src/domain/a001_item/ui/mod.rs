pub mod catalog;
pub mod details;
pub mod form;
pub mod list;
