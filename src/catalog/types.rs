//! Item types for the catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ValidationError;

/// A stored catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Store-assigned identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 29.99)]
    pub price: Decimal,
    /// Category label, matched case-insensitively.
    pub category: String,
    /// Units in stock.
    pub quantity: u32,
}

/// An item as submitted by a client, before validation and id assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemDraft {
    /// Ignored; ids are always assigned by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Display name (required, non-blank).
    #[serde(default)]
    pub name: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Unit price (non-negative).
    #[serde(default, with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 150.0)]
    pub price: Decimal,
    /// Category label.
    #[serde(default)]
    pub category: String,
    /// Units in stock (non-negative).
    #[serde(default)]
    pub quantity: i64,
}

impl ItemDraft {
    /// Create a draft with the given name, price, category and quantity.
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            description: String::new(),
            price,
            category: category.into(),
            quantity,
        }
    }

    /// Check the draft's fields without consuming it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => {}
            _ => return Err(ValidationError::BlankName),
        }

        if self.price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice(self.price));
        }

        if self.quantity < 0 {
            return Err(ValidationError::NegativeQuantity(self.quantity));
        }

        if u32::try_from(self.quantity).is_err() {
            return Err(ValidationError::QuantityTooLarge(self.quantity));
        }

        Ok(())
    }

    /// Validate the draft and turn it into a stored item with the given id.
    /// Any id carried by the draft is discarded.
    pub fn into_item(self, id: u64) -> Result<Item, ValidationError> {
        self.validate()?;

        let quantity = u32::try_from(self.quantity)
            .map_err(|_| ValidationError::QuantityTooLarge(self.quantity))?;

        Ok(Item {
            id,
            name: self.name.unwrap_or_default(),
            description: self.description,
            price: self.price,
            category: self.category,
            quantity,
        })
    }
}

impl Item {
    /// Case-insensitive exact match on category.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Case-insensitive substring match on name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
