//! Thin HTTP layer in front of the `/v1` API.
//!
//! Every request goes through [`ApiClient`], which composes the URL from the
//! configured base, attaches the bearer token when asked to, and always sends
//! cookies. HTTP error statuses come back as ordinary [`ApiResponse`] values;
//! only local and network failures are [`ApiError`]s.

pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;

#[cfg(test)]
pub mod mock;

pub use client::ApiClient;
pub use error::ApiError;
pub use request::{ApiRequest, Method, PreparedRequest};
pub use response::ApiResponse;
pub use transport::{BrowserTransport, Transport};
