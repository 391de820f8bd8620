//! # Menu Client
//!
//! Provides a high‑level API for interacting with the `MenuItem` actor.

use crate::clients::actor_client::ActorClient;
use crate::menu_actor::MenuError;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use tracing::{debug, instrument};

domain_client!(Menu => MenuItem);

impl MenuClient {
    #[instrument(skip(self))]
    pub async fn add_item(&self, params: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Applies a field-level edit and returns the item as stored.
    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Items matching a name search and an optional category, in id order.
    ///
    /// `"All"` or `None` disables the category filter.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        query: &str,
        category: Option<&str>,
    ) -> Result<Vec<MenuItem>, MenuError> {
        let query = query.trim().to_lowercase();
        let category = category.filter(|c| !c.eq_ignore_ascii_case("all"));
        let items = self.list().await?;
        Ok(items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&query))
            .filter(|item| category.map_or(true, |c| item.category == c))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn item(id: u32, name: &str, category: &str) -> MenuItem {
        MenuItem::new(
            MenuItemId(id),
            MenuItemCreate::new(name, Decimal::from(500), category),
        )
    }

    #[tokio::test]
    async fn test_search_filters_by_name_and_category() {
        let mut menu = MockClient::<MenuItem>::new();
        let catalog = Arc::new(vec![
            item(1, "Chicken Kottu", "Mains"),
            item(2, "Egg Kottu", "Mains"),
            item(3, "Iced Kottu Latte", "Beverages"),
        ]);
        menu.expect_list().return_ok(catalog.clone());
        menu.expect_list().return_ok(catalog);

        let client = MenuClient::new(menu.client());
        let mains = client.search("kottu", Some("Mains")).await.unwrap();
        assert_eq!(mains.len(), 2);

        let all = client.search("KOTTU", Some("All")).await.unwrap();
        assert_eq!(all.len(), 3);
        menu.verify();
    }
}
