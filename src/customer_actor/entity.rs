//! [`ActorEntity`] implementation for [`Customer`].

use super::actions::{CustomerAction, CustomerActionResult};
use super::error::CustomerError;
use crate::framework::ActorEntity;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Spend credited per loyalty point.
const SPEND_PER_POINT: u32 = 10;

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = CustomerAction;
    type ActionResult = CustomerActionResult;
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(
        id: CustomerId,
        params: CustomerCreate,
        created_at: DateTime<Utc>,
    ) -> Result<Self, CustomerError> {
        if params.name.trim().is_empty() || params.phone.trim().is_empty() {
            return Err(required());
        }
        Ok(Customer::new(id, params, created_at))
    }

    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), CustomerError> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(required());
            }
            self.name = name.trim().to_string();
        }
        if let Some(phone) = update.phone {
            if phone.trim().is_empty() {
                return Err(required());
            }
            self.phone = phone.trim().to_string();
        }
        if let Some(email) = update.email {
            self.email = Some(email).filter(|e| !e.trim().is_empty());
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CustomerAction,
        _ctx: &(),
    ) -> Result<CustomerActionResult, CustomerError> {
        match action {
            CustomerAction::AddLoyaltyPoints(points) => {
                if points == 0 {
                    return Err(CustomerError::Validation(
                        "Points must be at least 1".to_string(),
                    ));
                }
                let credited = Decimal::from(points) * Decimal::from(SPEND_PER_POINT);
                self.total_spent = self
                    .total_spent
                    .checked_add(credited)
                    .ok_or_else(too_large)?;
                self.loyalty_points = self.loyalty_points.saturating_add(points);
                self.refresh_tier();
                Ok(CustomerActionResult::AddLoyaltyPoints {
                    points: self.loyalty_points,
                    tier: self.tier,
                })
            }
            CustomerAction::RecordVisit(amount) => {
                if amount < Decimal::ZERO {
                    return Err(CustomerError::Validation(
                        "Visit amount must not be negative".to_string(),
                    ));
                }
                self.total_spent = self.total_spent.checked_add(amount).ok_or_else(too_large)?;
                self.total_orders = self.total_orders.saturating_add(1);
                self.refresh_tier();
                Ok(CustomerActionResult::RecordVisit {
                    total_orders: self.total_orders,
                    tier: self.tier,
                })
            }
        }
    }
}

fn required() -> CustomerError {
    CustomerError::Validation("Name and phone are required".to_string())
}

fn too_large() -> CustomerError {
    CustomerError::Validation("Amount is too large".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CustomerTier;
    use chrono::TimeZone;

    fn customer() -> Customer {
        Customer::from_create_params(
            CustomerId(1),
            CustomerCreate {
                name: "Sunil".into(),
                phone: "0771234567".into(),
                email: None,
            },
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_name_and_phone_required() {
        let err = Customer::from_create_params(
            CustomerId(1),
            CustomerCreate {
                name: "Sunil".into(),
                phone: " ".into(),
                email: None,
            },
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        )
        .unwrap_err();
        assert_eq!(err, required());
    }

    #[tokio::test]
    async fn test_loyalty_points_count_towards_tier() {
        let mut customer = customer();
        let result = customer
            .handle_action(CustomerAction::AddLoyaltyPoints(1_000), &())
            .await
            .unwrap();
        assert_eq!(
            result,
            CustomerActionResult::AddLoyaltyPoints {
                points: 1_000,
                tier: CustomerTier::Silver
            }
        );
        assert_eq!(customer.total_spent, Decimal::from(10_000));
    }

    #[tokio::test]
    async fn test_spend_overflow_is_rejected() {
        let mut customer = customer();
        customer
            .handle_action(CustomerAction::RecordVisit(Decimal::MAX), &())
            .await
            .unwrap();

        let err = customer
            .handle_action(CustomerAction::RecordVisit(Decimal::ONE), &())
            .await
            .unwrap_err();
        assert_eq!(err, too_large());
        let err = customer
            .handle_action(CustomerAction::AddLoyaltyPoints(1), &())
            .await
            .unwrap_err();
        assert_eq!(err, too_large());
        assert_eq!(customer.total_orders, 1);
        assert_eq!(customer.loyalty_points, 0);
    }

    #[tokio::test]
    async fn test_record_visit_promotes() {
        let mut customer = customer();
        customer
            .handle_action(CustomerAction::RecordVisit(Decimal::from(30_000)), &())
            .await
            .unwrap();
        let result = customer
            .handle_action(CustomerAction::RecordVisit(Decimal::from(20_000)), &())
            .await
            .unwrap();
        assert_eq!(
            result,
            CustomerActionResult::RecordVisit {
                total_orders: 2,
                tier: CustomerTier::Platinum
            }
        );
    }
}
