use serde::{Deserialize, Serialize};

/// Entry of the legacy reading tracker served by `/v1/books`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub genre: String,
    pub total_page: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_percentage: Option<i64>,
    pub author: String,
    pub publisher: String,
    /// Publication year
    pub published_at: i64,
    pub price: i64,
}

/// Body of `POST /v1/books` and `PUT /v1/books/:id`. The server assigns ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub title: String,
    pub genre: String,
    pub total_page: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_page: Option<i64>,
    pub author: String,
    pub publisher: String,
    pub published_at: i64,
    pub price: i64,
}
