//! User-facing strings shared by several views.

pub const NETWORK_ERROR: &str = "ネットワークエラーが発生しました";
pub const LOADING: &str = "読み込み中...";
pub const IN_STOCK: &str = "在庫あり";
pub const OUT_OF_STOCK: &str = "在庫なし";
pub const NO_DESCRIPTION: &str = "説明なし";

/// Message for a failed call: the network text when there was no response,
/// otherwise `fallback`.
pub fn describe_error(err: &crate::shared::http::ApiError, fallback: &str) -> String {
    if err.is_network() {
        NETWORK_ERROR.to_string()
    } else {
        fallback.to_string()
    }
}

/// Prefer the server's own explanation when it sent one.
pub fn server_text_or(body: &str, fallback: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        fallback.to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::ApiError;

    #[test]
    fn test_describe_error() {
        let net = ApiError::Network("refused".to_string());
        assert_eq!(describe_error(&net, "x"), NETWORK_ERROR);
        let decode = ApiError::Decode("eof".to_string());
        assert_eq!(describe_error(&decode, "商品の取得に失敗しました"), "商品の取得に失敗しました");
    }

    #[test]
    fn test_server_text_or() {
        assert_eq!(server_text_or("  ", "fallback"), "fallback");
        assert_eq!(server_text_or("item_name is required\n", "fallback"), "item_name is required");
    }
}
