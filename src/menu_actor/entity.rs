//! [`ActorEntity`] implementation for [`MenuItem`].

use super::error::MenuError;
use crate::framework::ActorEntity;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Menu items are edited field by field; there are no custom actions.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = MenuAction;
    type ActionResult = ();
    type Context = ();
    type Error = MenuError;

    fn from_create_params(
        id: MenuItemId,
        params: MenuItemCreate,
        _created_at: DateTime<Utc>,
    ) -> Result<Self, MenuError> {
        check_name(&params.name)?;
        check_price(params.price)?;
        Ok(MenuItem::new(id, params))
    }

    /// Handles updates to the MenuItem entity.
    ///
    /// Every field is optional; the same rules as on create apply to those that are set.
    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), MenuError> {
        if let Some(name) = update.name {
            check_name(&name)?;
            self.name = name.trim().to_string();
        }
        if let Some(price) = update.price {
            check_price(price)?;
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = Some(description).filter(|d| !d.trim().is_empty());
        }
        if let Some(image_url) = update.image_url {
            self.image_url = Some(image_url).filter(|u| !u.trim().is_empty());
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: MenuAction, _ctx: &()) -> Result<(), MenuError> {
        match action {}
    }
}

fn check_name(name: &str) -> Result<(), MenuError> {
    if name.trim().is_empty() {
        return Err(MenuError::Validation("Please enter a name".to_string()));
    }
    Ok(())
}

fn check_price(price: Decimal) -> Result<(), MenuError> {
    if price < Decimal::ZERO {
        return Err(MenuError::Validation("Price must not be negative".to_string()));
    }
    Ok(())
}
