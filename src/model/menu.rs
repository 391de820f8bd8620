use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for MenuItems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_{}", self.0)
    }
}

/// A dish or drink on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Decimal,
    /// Free-text category such as "Mains" or "Beverages". Empty when uncategorised.
    pub category: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub available: bool,
}

impl MenuItem {
    pub fn new(id: MenuItemId, params: MenuItemCreate) -> Self {
        Self {
            id,
            name: params.name.trim().to_string(),
            price: params.price,
            category: params.category.trim().to_string(),
            description: params.description,
            image_url: params.image_url,
            available: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl MenuItemCreate {
    pub fn new(name: impl Into<String>, price: Decimal, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
            description: None,
            image_url: None,
        }
    }
}

/// Field-level edit; `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub available: Option<bool>,
}
