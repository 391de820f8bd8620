use crate::clients::actor_client::ActorClient;
use crate::customer_actor::{CustomerAction, CustomerActionResult, CustomerError};
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerTier, CustomerUpdate};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

domain_client!(Customer => Customer);

impl CustomerClient {
    #[instrument(skip(self))]
    pub async fn register(&self, params: CustomerCreate) -> Result<CustomerId, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_contact(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Returns the new points balance and tier.
    #[instrument(skip(self))]
    pub async fn add_loyalty_points(
        &self,
        id: CustomerId,
        points: u32,
    ) -> Result<(u32, CustomerTier), CustomerError> {
        debug!("Adding {} points to customer {}", points, id);
        match self
            .inner
            .perform_action(id, CustomerAction::AddLoyaltyPoints(points))
            .await
        {
            Ok(CustomerActionResult::AddLoyaltyPoints { points, tier }) => Ok((points, tier)),
            Ok(_) => unreachable!("AddLoyaltyPoints action must return AddLoyaltyPoints result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Returns the new visit count and tier.
    #[instrument(skip(self))]
    pub async fn record_visit(
        &self,
        id: CustomerId,
        amount: Decimal,
    ) -> Result<(u32, CustomerTier), CustomerError> {
        debug!("Recording visit of {} for customer {}", amount, id);
        match self
            .inner
            .perform_action(id, CustomerAction::RecordVisit(amount))
            .await
        {
            Ok(CustomerActionResult::RecordVisit { total_orders, tier }) => Ok((total_orders, tier)),
            Ok(_) => unreachable!("RecordVisit action must return RecordVisit result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Customers matching a name/phone search and optional tier, highest spend first.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        query: &str,
        tier: Option<CustomerTier>,
    ) -> Result<Vec<Customer>, CustomerError> {
        let customers = self.list().await?;
        let mut found: Vec<Customer> = customers
            .iter()
            .filter(|c| c.matches(query))
            .filter(|c| tier.map_or(true, |t| c.tier == t))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.total_spent.cmp(&a.total_spent).then(a.id.cmp(&b.id)));
        Ok(found)
    }
}
