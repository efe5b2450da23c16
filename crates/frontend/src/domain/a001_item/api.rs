use contracts::domain::a001_item::aggregate::{Item, ItemDto};

use crate::shared::http::{ApiClient, ApiError, ApiResponse, Transport};
use crate::shared::messages::{describe_error, server_text_or};
use crate::system::auth::storage::TokenStore;

pub const ITEMS_ENDPOINT: &str = "/v1/items";
pub const ADMIN_ITEMS_ENDPOINT: &str = "/v1/admin/items";

const FETCH_FAILED: &str = "商品の取得に失敗しました";
const CREATE_FAILED: &str = "商品の登録に失敗しました";
const UPDATE_FAILED: &str = "商品の更新に失敗しました";
const DELETE_FAILED: &str = "削除に失敗しました";
const DELETE_ERROR: &str = "削除中にエラーが発生しました";

pub fn admin_item_endpoint(id: &str) -> String {
    format!("{}/{}", ADMIN_ITEMS_ENDPOINT, urlencoding::encode(id))
}

fn read_json<T: serde::de::DeserializeOwned>(
    result: Result<ApiResponse, ApiError>,
    fallback: &str,
) -> Result<T, String> {
    let response = result.map_err(|e| {
        log::warn!("item request failed: {}", e);
        describe_error(&e, fallback)
    })?;
    if !response.ok() {
        return Err(fallback.to_string());
    }
    response.json::<T>().map_err(|e| {
        log::warn!("item response unreadable: {}", e);
        fallback.to_string()
    })
}

/// Public catalog
pub async fn fetch_items<T: Transport, S: TokenStore>(
    client: &ApiClient<T, S>,
) -> Result<Vec<Item>, String> {
    read_json(client.get(ITEMS_ENDPOINT, false).await, FETCH_FAILED)
}

pub async fn fetch_admin_items<T: Transport, S: TokenStore>(
    client: &ApiClient<T, S>,
) -> Result<Vec<Item>, String> {
    read_json(client.get(ADMIN_ITEMS_ENDPOINT, true).await, FETCH_FAILED)
}

pub async fn fetch_admin_item<T: Transport, S: TokenStore>(
    client: &ApiClient<T, S>,
    id: &str,
) -> Result<Item, String> {
    read_json(client.get(&admin_item_endpoint(id), true).await, FETCH_FAILED)
}

pub async fn create_item<T: Transport, S: TokenStore>(
    client: &ApiClient<T, S>,
    dto: &ItemDto,
) -> Result<(), String> {
    let response = client
        .post(ADMIN_ITEMS_ENDPOINT, dto, true)
        .await
        .map_err(|e| describe_error(&e, CREATE_FAILED))?;
    if !response.ok() {
        return Err(server_text_or(response.text(), CREATE_FAILED));
    }
    Ok(())
}

pub async fn update_item<T: Transport, S: TokenStore>(
    client: &ApiClient<T, S>,
    id: &str,
    dto: &ItemDto,
) -> Result<(), String> {
    let response = client
        .put(&admin_item_endpoint(id), dto, true)
        .await
        .map_err(|e| describe_error(&e, UPDATE_FAILED))?;
    if !response.ok() {
        return Err(server_text_or(response.text(), UPDATE_FAILED));
    }
    Ok(())
}

pub async fn delete_item<T: Transport, S: TokenStore>(
    client: &ApiClient<T, S>,
    id: &str,
) -> Result<(), String> {
    let response = client
        .delete(&admin_item_endpoint(id), true)
        .await
        .map_err(|e| {
            log::warn!("delete item {} failed: {}", id, e);
            DELETE_ERROR.to_string()
        })?;
    if !response.ok() {
        return Err(DELETE_FAILED.to_string());
    }
    Ok(())
}
