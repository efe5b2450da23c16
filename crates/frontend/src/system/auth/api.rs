use contracts::system::auth::{LoginRequest, LoginResponse, SignupRequest};

use super::session::{CheckKind, CheckOutcome};
use super::storage::TokenStore;
use crate::shared::http::{ApiClient, ApiRequest, Transport};
use crate::shared::messages::{server_text_or, NETWORK_ERROR};

pub const LOGIN_ENDPOINT: &str = "/v1/login";
pub const SIGNUP_ENDPOINT: &str = "/v1/signup";
pub const LOGOUT_ENDPOINT: &str = "/v1/logout";

/// Login with email and password
pub async fn login<T: Transport, S: TokenStore>(
    client: &ApiClient<T, S>,
    email: String,
    password: String,
) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };

    let response = client
        .post(LOGIN_ENDPOINT, &request, false)
        .await
        .map_err(|e| {
            log::warn!("login request failed: {}", e);
            NETWORK_ERROR.to_string()
        })?;

    if !response.ok() {
        return Err(format!(
            "ログインに失敗しました: {}",
            server_text_or(response.text(), &response.status().to_string())
        ));
    }

    response
        .json::<LoginResponse>()
        .map_err(|e| format!("ログインに失敗しました: {}", e))
}

/// Register a new account. Does not log in.
pub async fn signup<T: Transport, S: TokenStore>(
    client: &ApiClient<T, S>,
    request: &SignupRequest,
) -> Result<(), String> {
    let response = client
        .post(SIGNUP_ENDPOINT, request, false)
        .await
        .map_err(|e| {
            log::warn!("signup request failed: {}", e);
            NETWORK_ERROR.to_string()
        })?;

    if !response.ok() {
        return Err(format!(
            "登録に失敗しました: {}",
            server_text_or(response.text(), &response.status().to_string())
        ));
    }

    Ok(())
}

/// Ask the server to drop its side of the session. Best effort.
pub async fn logout<T: Transport, S: TokenStore>(client: &ApiClient<T, S>) -> Result<(), String> {
    let response = client
        .send(ApiRequest::post(LOGOUT_ENDPOINT).authenticated())
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }

    Ok(())
}

/// Run one status check. Never fails; errors become [`CheckOutcome::Unreachable`].
pub async fn check_status<T: Transport, S: TokenStore>(
    client: &ApiClient<T, S>,
    kind: CheckKind,
) -> CheckOutcome {
    let result = client.get(kind.endpoint(), true).await;
    if let Err(e) = &result {
        log::warn!("{:?} check failed: {}", kind, e);
    }
    CheckOutcome::from_result(&result)
}
