//! [`ActorEntity`] implementation for [`Payment`].
//!
//! Payments are append-only: the amounts are checked once at creation and the record is
//! never updated or removed afterwards.

use super::error::PaymentError;
use crate::framework::ActorEntity;
use crate::model::{Payment, PaymentCreate, PaymentId, PaymentMethod, PaymentUpdate};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentAction {}

#[async_trait]
impl ActorEntity for Payment {
    type Id = PaymentId;
    type Create = PaymentCreate;
    type Update = PaymentUpdate;
    type Action = PaymentAction;
    type ActionResult = ();
    type Context = ();
    type Error = PaymentError;

    fn from_create_params(
        id: PaymentId,
        params: PaymentCreate,
        created_at: DateTime<Utc>,
    ) -> Result<Self, PaymentError> {
        let final_amount = validate(&params)?;
        Ok(Payment {
            id,
            order_id: params.order_id,
            customer_name: params.customer_name,
            items: params.items,
            subtotal: params.subtotal,
            tip: params.tip,
            discount: params.discount,
            final_amount,
            method: params.method,
            splits: params.splits,
            notes: params.notes.filter(|n| !n.trim().is_empty()),
            created_at,
        })
    }

    async fn on_update(&mut self, update: PaymentUpdate, _ctx: &()) -> Result<(), PaymentError> {
        match update {}
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), PaymentError> {
        Err(PaymentError::Immutable)
    }

    async fn handle_action(&mut self, action: PaymentAction, _ctx: &()) -> Result<(), PaymentError> {
        match action {}
    }
}

/// Checks the amounts and returns the final amount to record.
fn validate(params: &PaymentCreate) -> Result<Decimal, PaymentError> {
    if params.subtotal < Decimal::ZERO {
        return Err(invalid("Subtotal must not be negative"));
    }
    if params.tip < Decimal::ZERO {
        return Err(invalid("Tip must not be negative"));
    }
    if params.discount < Decimal::ZERO {
        return Err(invalid("Discount must not be negative"));
    }
    let final_amount = params.final_amount().ok_or_else(too_large)?;
    if final_amount < Decimal::ZERO {
        return Err(invalid("Discount cannot exceed the bill"));
    }

    match params.method {
        PaymentMethod::Split => {
            if params.splits.len() < 2 {
                return Err(invalid("A split payment needs at least two parts"));
            }
            if params
                .splits
                .iter()
                .any(|part| part.method == PaymentMethod::Split)
            {
                return Err(invalid("Each split part must be cash, card or upi"));
            }
            if params.splits.iter().any(|part| part.amount <= Decimal::ZERO) {
                return Err(invalid("Each split part must be a positive amount"));
            }
            let paid = params
                .splits
                .iter()
                .try_fold(Decimal::ZERO, |paid, part| paid.checked_add(part.amount))
                .ok_or_else(too_large)?;
            if paid != final_amount {
                return Err(PaymentError::Validation(format!(
                    "Split amounts must equal Rs. {:.2}",
                    final_amount
                )));
            }
        }
        _ if !params.splits.is_empty() => {
            return Err(invalid("Only split payments carry a breakdown"));
        }
        _ => {}
    }

    Ok(final_amount)
}

fn invalid(msg: &str) -> PaymentError {
    PaymentError::Validation(msg.to_string())
}

fn too_large() -> PaymentError {
    invalid("Amount is too large")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderId, SplitPart};
    use chrono::TimeZone;

    fn create(method: PaymentMethod, splits: Vec<SplitPart>) -> PaymentCreate {
        PaymentCreate {
            order_id: OrderId(3),
            customer_name: "Walk-in Customer".into(),
            items: "Fried Rice".into(),
            subtotal: Decimal::from(1000),
            tip: Decimal::from(100),
            discount: Decimal::from(100),
            method,
            splits,
            notes: None,
        }
    }

    fn part(method: PaymentMethod, amount: i64) -> SplitPart {
        SplitPart {
            method,
            amount: Decimal::from(amount),
        }
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 20, 0, 0).unwrap()
    }

    #[test]
    fn test_final_amount_is_derived() {
        let payment =
            Payment::from_create_params(PaymentId(1), create(PaymentMethod::Card, vec![]), at())
                .unwrap();
        assert_eq!(payment.final_amount, Decimal::from(1000));
    }

    #[test]
    fn test_split_must_cover_final_amount() {
        let short = create(
            PaymentMethod::Split,
            vec![part(PaymentMethod::Cash, 400), part(PaymentMethod::Card, 500)],
        );
        assert_eq!(
            Payment::from_create_params(PaymentId(1), short, at()).unwrap_err(),
            PaymentError::Validation("Split amounts must equal Rs. 1000.00".into())
        );

        let exact = create(
            PaymentMethod::Split,
            vec![part(PaymentMethod::Cash, 400), part(PaymentMethod::Upi, 600)],
        );
        assert!(Payment::from_create_params(PaymentId(1), exact, at()).is_ok());
    }

    #[test]
    fn test_split_needs_two_concrete_parts() {
        let single = create(PaymentMethod::Split, vec![part(PaymentMethod::Cash, 1000)]);
        assert!(Payment::from_create_params(PaymentId(1), single, at()).is_err());

        let nested = create(
            PaymentMethod::Split,
            vec![part(PaymentMethod::Split, 500), part(PaymentMethod::Cash, 500)],
        );
        assert!(Payment::from_create_params(PaymentId(1), nested, at()).is_err());
    }

    #[test]
    fn test_discount_cannot_exceed_bill() {
        let mut params = create(PaymentMethod::Cash, vec![]);
        params.discount = Decimal::from(5000);
        assert!(matches!(
            Payment::from_create_params(PaymentId(1), params, at()),
            Err(PaymentError::Validation(_))
        ));
    }

    #[test]
    fn test_out_of_range_amounts_are_rejected() {
        let mut params = create(PaymentMethod::Card, vec![]);
        params.tip = Decimal::MAX;
        assert_eq!(
            Payment::from_create_params(PaymentId(1), params, at()).unwrap_err(),
            PaymentError::Validation("Amount is too large".into())
        );

        let mut params = create(
            PaymentMethod::Split,
            vec![
                SplitPart {
                    method: PaymentMethod::Cash,
                    amount: Decimal::MAX,
                },
                SplitPart {
                    method: PaymentMethod::Card,
                    amount: Decimal::MAX,
                },
            ],
        );
        params.tip = Decimal::ZERO;
        params.discount = Decimal::ZERO;
        assert_eq!(
            Payment::from_create_params(PaymentId(1), params, at()).unwrap_err(),
            PaymentError::Validation("Amount is too large".into())
        );
    }

    #[tokio::test]
    async fn test_delete_is_vetoed() {
        let payment =
            Payment::from_create_params(PaymentId(1), create(PaymentMethod::Cash, vec![]), at())
                .unwrap();
        assert_eq!(payment.on_delete(&()).await, Err(PaymentError::Immutable));
    }
}
