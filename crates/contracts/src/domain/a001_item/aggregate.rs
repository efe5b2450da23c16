use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default tax rate (percent) applied when the server has none on record
pub const DEFAULT_TAX_RATE: f64 = 10.0;

/// Default currency code for item prices
pub const DEFAULT_CURRENCY: &str = "JPY";

// ============================================================================
// Item as returned by the API
// ============================================================================

/// Catalog item as returned by `/v1/items` and `/v1/admin/items[/:id]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub item_name: String,
    pub stock: bool,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub price_with_tax: Option<i64>,
    #[serde(default)]
    pub price_without_tax: Option<i64>,
    #[serde(default)]
    pub tax_rate: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

// ============================================================================
// Write DTO
// ============================================================================

/// Body of `POST /v1/admin/items` and `PUT /v1/admin/items/:id`
///
/// Price fields are only sent on update; creation posts name, stock and
/// description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    pub item_name: String,
    pub stock: bool,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_without_tax: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Default for ItemDto {
    fn default() -> Self {
        Self {
            item_name: String::new(),
            stock: true,
            description: String::new(),
            price_without_tax: None,
            tax_rate: None,
            currency: None,
        }
    }
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            item_name: item.item_name,
            stock: item.stock,
            description: item.description,
            price_without_tax: item.price_without_tax,
            tax_rate: Some(item.tax_rate.unwrap_or(DEFAULT_TAX_RATE)),
            currency: Some(
                item.currency
                    .filter(|c| !c.is_empty())
                    .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEM_JSON: &str = r#"{
        "item_id": "it-1",
        "user_id": "u-1",
        "item_name": "Wool yarn",
        "stock": true,
        "description": "Merino",
        "created_at": "2024-03-15T14:02:26Z",
        "updated_at": "2024-03-16T09:00:00Z"
    }"#;

    #[test]
    fn test_item_parses_without_price_fields() {
        let item: Item = serde_json::from_str(ITEM_JSON).unwrap();
        assert_eq!(item.item_id, "it-1");
        assert!(item.stock);
        assert!(item.price_without_tax.is_none());
        assert!(item.image_url.is_none());
    }

    #[test]
    fn test_dto_from_item_fills_price_defaults() {
        let item: Item = serde_json::from_str(ITEM_JSON).unwrap();
        let dto = ItemDto::from(item);
        assert_eq!(dto.tax_rate, Some(DEFAULT_TAX_RATE));
        assert_eq!(dto.currency.as_deref(), Some(DEFAULT_CURRENCY));
    }

    #[test]
    fn test_create_dto_omits_price_fields() {
        let dto = ItemDto {
            item_name: "Needles".to_string(),
            ..ItemDto::default()
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["stock"], true);
        assert!(value.get("tax_rate").is_none());
        assert!(value.get("currency").is_none());
    }
}
