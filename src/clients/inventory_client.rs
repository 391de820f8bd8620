//! # Inventory Client
//!
//! Stock items, quantity adjustments and the stock list with its header figures.

use crate::clients::actor_client::ActorClient;
use crate::inventory_actor::{InventoryAction, InventoryActionResult, InventoryError};
use crate::model::{
    InventoryItem, InventoryItemCreate, InventoryItemId, InventoryItemUpdate, StockFilter,
    StockStatus, StockSummary,
};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

domain_client!(Inventory => InventoryItem);

impl InventoryClient {
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn add_item(
        &self,
        params: InventoryItemCreate,
    ) -> Result<InventoryItemId, InventoryError> {
        debug!(?params, "add_item called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: InventoryItemId,
        update: InventoryItemUpdate,
    ) -> Result<InventoryItem, InventoryError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Returns the new quantity and stock status.
    #[instrument(skip(self))]
    pub async fn adjust_quantity(
        &self,
        id: InventoryItemId,
        delta: Decimal,
    ) -> Result<(Decimal, StockStatus), InventoryError> {
        debug!("Adjusting {} by {}", id, delta);
        match self
            .inner
            .perform_action(id, InventoryAction::AdjustQuantity(delta))
            .await
        {
            Ok(InventoryActionResult::AdjustQuantity { quantity, status }) => Ok((quantity, status)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Items passing `filter`, sorted by name.
    #[instrument(skip(self))]
    pub async fn stock_list(
        &self,
        filter: StockFilter,
    ) -> Result<Vec<InventoryItem>, InventoryError> {
        let items = self.list().await?;
        let mut found: Vec<InventoryItem> = items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(found)
    }

    /// Item, low and out counts plus the total stock value, over every item.
    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<StockSummary, InventoryError> {
        let items = self.list().await?;
        Ok(StockSummary::of(items.iter()))
    }
}
