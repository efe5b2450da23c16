use serde::Serialize;

use super::error::ApiError;
use super::request::{bearer, ApiRequest, PreparedRequest, AUTHORIZATION, CONTENT_TYPE, JSON_MIME};
use super::response::ApiResponse;
use super::transport::{BrowserTransport, Transport};
use crate::shared::api_utils::{api_base, is_api_path, join_url, API_PREFIX};
use crate::system::auth::storage::{BrowserTokenStore, TokenStore};

/// Client used by the running app
pub type AppClient = ApiClient<BrowserTransport, BrowserTokenStore>;

/// Request pipeline: base URL composition, bearer injection, credentials.
///
/// The token is read from `store` at send time, so a login or logout is
/// picked up by the very next request without rebuilding the client.
#[derive(Debug, Clone)]
pub struct ApiClient<T, S> {
    base_url: String,
    transport: T,
    store: S,
}

impl AppClient {
    pub fn browser() -> Self {
        ApiClient::new(api_base(), BrowserTransport, BrowserTokenStore)
    }
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub fn new(base_url: impl Into<String>, transport: T, store: S) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            store,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve URL and headers without sending anything.
    pub fn prepare(&self, request: ApiRequest) -> Result<PreparedRequest, ApiError> {
        if !is_api_path(&request.endpoint) {
            return Err(ApiError::InvalidEndpoint {
                endpoint: request.endpoint,
                prefix: API_PREFIX,
            });
        }

        let mut headers = Vec::new();
        if request.body.is_some() {
            headers.push((CONTENT_TYPE.to_string(), JSON_MIME.to_string()));
        }
        if request.requires_auth {
            match self.store.load() {
                Some(token) => headers.push((AUTHORIZATION.to_string(), bearer(&token))),
                None => log::debug!("no stored token for {}", request.endpoint),
            }
        }

        Ok(PreparedRequest {
            method: request.method,
            url: join_url(&self.base_url, &request.endpoint),
            headers,
            body: request.body,
            include_credentials: true,
        })
    }

    /// Send `request`. 4xx/5xx replies are `Ok`; inspect [`ApiResponse::ok`].
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let prepared = self.prepare(request)?;
        self.transport.send(prepared).await
    }

    pub async fn get(&self, endpoint: &str, requires_auth: bool) -> Result<ApiResponse, ApiError> {
        self.send(ApiRequest::get(endpoint).requires_auth(requires_auth))
            .await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
        requires_auth: bool,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::post(endpoint)
            .json(body)?
            .requires_auth(requires_auth);
        self.send(request).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
        requires_auth: bool,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::put(endpoint)
            .json(body)?
            .requires_auth(requires_auth);
        self.send(request).await
    }

    pub async fn delete(&self, endpoint: &str, requires_auth: bool) -> Result<ApiResponse, ApiError> {
        self.send(ApiRequest::delete(endpoint).requires_auth(requires_auth))
            .await
    }
}
