//! Legacy reading tracker. None of these calls carry the bearer token.

use contracts::domain::a002_book::aggregate::{Book, BookDto};

use crate::shared::http::{ApiClient, ApiError, ApiResponse, Transport};
use crate::system::auth::storage::TokenStore;

pub const BOOKS_ENDPOINT: &str = "/v1/books";

pub const FETCH_FAILED: &str = "書籍の取得に失敗しました。";
pub const CREATE_FAILED: &str = "書籍の登録に失敗しました。";
pub const UPDATE_FAILED: &str = "書籍の編集登録に失敗しました。";
pub const DELETE_FAILED: &str = "書籍の削除に失敗しました。";

pub fn book_endpoint(id: &str) -> String {
    format!("{}/{}", BOOKS_ENDPOINT, urlencoding::encode(id))
}

fn expect_ok(result: Result<ApiResponse, ApiError>, message: &str) -> Result<ApiResponse, String> {
    match result {
        Ok(response) if response.ok() => Ok(response),
        Ok(response) => {
            log::warn!("{} (status {})", message, response.status());
            Err(message.to_string())
        }
        Err(e) => {
            log::warn!("{}: {}", message, e);
            Err(message.to_string())
        }
    }
}

pub async fn fetch_books<T: Transport, S: TokenStore>(
    client: &ApiClient<T, S>,
) -> Result<Vec<Book>, String> {
    expect_ok(client.get(BOOKS_ENDPOINT, false).await, FETCH_FAILED)?
        .json::<Vec<Book>>()
        .map_err(|_| FETCH_FAILED.to_string())
}

pub async fn create_book<T: Transport, S: TokenStore>(
    client: &ApiClient<T, S>,
    dto: &BookDto,
) -> Result<(), String> {
    expect_ok(client.post(BOOKS_ENDPOINT, dto, false).await, CREATE_FAILED).map(|_| ())
}

pub async fn update_book<T: Transport, S: TokenStore>(
    client: &ApiClient<T, S>,
    id: &str,
    dto: &BookDto,
) -> Result<(), String> {
    expect_ok(client.put(&book_endpoint(id), dto, false).await, UPDATE_FAILED).map(|_| ())
}

pub async fn delete_book<T: Transport, S: TokenStore>(
    client: &ApiClient<T, S>,
    id: &str,
) -> Result<(), String> {
    expect_ok(client.delete(&book_endpoint(id), false).await, DELETE_FAILED).map(|_| ())
}
