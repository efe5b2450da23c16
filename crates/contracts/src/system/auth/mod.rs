use serde::{Deserialize, Serialize};

/// Body of `POST /v1/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful `POST /v1/login` reply. The token is opaque to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body of `POST /v1/signup`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_ignores_extra_fields() {
        let parsed: LoginResponse =
            serde_json::from_str(r#"{"token":"abc","expires_in":3600}"#).unwrap();
        assert_eq!(parsed.token, "abc");
    }

    #[test]
    fn test_signup_request_field_names() {
        let body = serde_json::to_value(SignupRequest {
            name: "Hanako".to_string(),
            email: "hanako@example.com".to_string(),
            password: "secret1".to_string(),
        })
        .unwrap();
        assert_eq!(body["name"], "Hanako");
        assert_eq!(body["email"], "hanako@example.com");
        assert_eq!(body["password"], "secret1");
    }
}
