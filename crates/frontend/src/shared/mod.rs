pub mod api_utils;
pub mod date_utils;
pub mod http;
pub mod messages;
pub mod number_format;
