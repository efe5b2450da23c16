//! Wire types shared between the storefront frontend and the `/v1` API.

pub mod domain;
pub mod system;
