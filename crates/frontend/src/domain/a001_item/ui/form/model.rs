use contracts::domain::a001_item::aggregate::{Item, ItemDto, DEFAULT_CURRENCY, DEFAULT_TAX_RATE};

pub const NAME_REQUIRED: &str = "商品名を入力してください";
pub const PRICE_INVALID: &str = "税抜き価格は整数で入力してください";
pub const TAX_RATE_INVALID: &str = "税率は数値で入力してください";

/// Raw form contents as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemForm {
    pub item_name: String,
    pub stock: bool,
    pub description: String,
    pub price_without_tax: String,
    pub tax_rate: String,
    pub currency: String,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            item_name: String::new(),
            stock: true,
            description: String::new(),
            price_without_tax: String::new(),
            tax_rate: DEFAULT_TAX_RATE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl From<Item> for ItemForm {
    fn from(item: Item) -> Self {
        let dto = ItemDto::from(item);
        Self {
            item_name: dto.item_name,
            stock: dto.stock,
            description: dto.description,
            price_without_tax: dto
                .price_without_tax
                .map(|p| p.to_string())
                .unwrap_or_default(),
            tax_rate: dto.tax_rate.unwrap_or(DEFAULT_TAX_RATE).to_string(),
            currency: dto
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        }
    }
}

impl ItemForm {
    fn validate_name(&self) -> Result<String, String> {
        let name = self.item_name.trim();
        if name.is_empty() {
            return Err(NAME_REQUIRED.to_string());
        }
        Ok(name.to_string())
    }

    /// Body for creation: name, stock and description only.
    pub fn to_create_dto(&self) -> Result<ItemDto, String> {
        Ok(ItemDto {
            item_name: self.validate_name()?,
            stock: self.stock,
            description: self.description.clone(),
            ..ItemDto::default()
        })
    }

    /// Body for update. Blank price is omitted, blank tax rate and currency
    /// fall back to the defaults.
    pub fn to_update_dto(&self) -> Result<ItemDto, String> {
        let item_name = self.validate_name()?;

        let price = self.price_without_tax.trim();
        let price_without_tax = if price.is_empty() {
            None
        } else {
            Some(price.parse::<i64>().map_err(|_| PRICE_INVALID.to_string())?)
        };

        let rate = self.tax_rate.trim();
        let tax_rate = if rate.is_empty() {
            DEFAULT_TAX_RATE
        } else {
            rate.parse::<f64>().map_err(|_| TAX_RATE_INVALID.to_string())?
        };

        let currency = match self.currency.trim() {
            "" => DEFAULT_CURRENCY.to_string(),
            c => c.to_string(),
        };

        Ok(ItemDto {
            item_name,
            stock: self.stock,
            description: self.description.clone(),
            price_without_tax,
            tax_rate: Some(tax_rate),
            currency: Some(currency),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_is_rejected_for_both_modes() {
        let form = ItemForm {
            item_name: "   ".to_string(),
            ..ItemForm::default()
        };
        assert_eq!(form.to_create_dto().unwrap_err(), NAME_REQUIRED);
        assert_eq!(form.to_update_dto().unwrap_err(), NAME_REQUIRED);
    }

    #[test]
    fn test_create_dto_trims_name_and_skips_prices() {
        let form = ItemForm {
            item_name: "  Wool  ".to_string(),
            price_without_tax: "1200".to_string(),
            ..ItemForm::default()
        };
        let dto = form.to_create_dto().unwrap();
        assert_eq!(dto.item_name, "Wool");
        assert!(dto.stock);
        assert_eq!(dto.price_without_tax, None);
        assert_eq!(dto.tax_rate, None);
    }

    #[test]
    fn test_update_dto_parses_prices() {
        let form = ItemForm {
            item_name: "Wool".to_string(),
            price_without_tax: "1200".to_string(),
            tax_rate: "8".to_string(),
            currency: String::new(),
            ..ItemForm::default()
        };
        let dto = form.to_update_dto().unwrap();
        assert_eq!(dto.price_without_tax, Some(1200));
        assert_eq!(dto.tax_rate, Some(8.0));
        assert_eq!(dto.currency.as_deref(), Some(DEFAULT_CURRENCY));
    }

    #[test]
    fn test_update_dto_rejects_bad_numbers() {
        let form = ItemForm {
            item_name: "Wool".to_string(),
            price_without_tax: "12.5".to_string(),
            ..ItemForm::default()
        };
        assert_eq!(form.to_update_dto().unwrap_err(), PRICE_INVALID);

        let form = ItemForm {
            item_name: "Wool".to_string(),
            tax_rate: "ten".to_string(),
            ..ItemForm::default()
        };
        assert_eq!(form.to_update_dto().unwrap_err(), TAX_RATE_INVALID);
    }

    #[test]
    fn test_form_from_item_applies_defaults() {
        let item: Item = serde_json::from_str(
            r#"{
                "item_id": "it-1",
                "item_name": "Wool",
                "stock": false,
                "description": "d",
                "created_at": "2024-03-15T14:02:26Z",
                "updated_at": "2024-03-15T14:02:26Z",
                "price_without_tax": 500
            }"#,
        )
        .unwrap();
        let form = ItemForm::from(item);
        assert!(!form.stock);
        assert_eq!(form.price_without_tax, "500");
        assert_eq!(form.tax_rate, "10");
        assert_eq!(form.currency, "JPY");
    }
}
