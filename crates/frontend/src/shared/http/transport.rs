use gloo_net::http::{Method as GlooMethod, RequestBuilder};
use web_sys::RequestCredentials;

use super::error::ApiError;
use super::request::{Method, PreparedRequest};
use super::response::ApiResponse;

/// Sends a [`PreparedRequest`] and buffers the reply.
///
/// Implementations must return `Ok` for every status code and reserve `Err`
/// for cases where no response was obtained.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: PreparedRequest) -> Result<ApiResponse, ApiError>;
}

/// `fetch` through `gloo-net`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

fn gloo_method(method: Method) -> GlooMethod {
    match method {
        Method::Get => GlooMethod::GET,
        Method::Post => GlooMethod::POST,
        Method::Put => GlooMethod::PUT,
        Method::Delete => GlooMethod::DELETE,
    }
}

impl Transport for BrowserTransport {
    async fn send(&self, request: PreparedRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = RequestBuilder::new(&request.url).method(gloo_method(request.method));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if request.include_credentials {
            builder = builder.credentials(RequestCredentials::Include);
        }

        let sent = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| {
            log::warn!("{} {} failed: {}", request.method.as_str(), request.url, e);
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        // A body that cannot be read still leaves the status usable.
        let body = response.text().await.unwrap_or_default();
        log::debug!("{} {} -> {}", request.method.as_str(), request.url, status);
        Ok(ApiResponse::new(status, body))
    }
}
