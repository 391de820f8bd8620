//! # Payment Client
//!
//! Records settlements. Payments are written once; reads go through [`ActorClient`].

use crate::clients::actor_client::ActorClient;
use crate::model::{OrderId, Payment, PaymentCreate, PaymentId};
use crate::payment_actor::PaymentError;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

domain_client!(Payment => Payment);

/// Running totals for the payments screen header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentTotals {
    pub revenue: Decimal,
    pub tips: Decimal,
    pub discounts: Decimal,
    pub count: usize,
}

impl PaymentTotals {
    pub fn from_payments<'a>(payments: impl IntoIterator<Item = &'a Payment>) -> Self {
        payments
            .into_iter()
            .fold(PaymentTotals::default(), |mut totals, payment| {
                totals.revenue = totals.revenue.saturating_add(payment.final_amount);
                totals.tips = totals.tips.saturating_add(payment.tip);
                totals.discounts = totals.discounts.saturating_add(payment.discount);
                totals.count += 1;
                totals
            })
    }
}

impl PaymentClient {
    #[instrument(skip(self, params), fields(order_id = %params.order_id))]
    pub async fn record(&self, params: PaymentCreate) -> Result<PaymentId, PaymentError> {
        debug!(?params, "record called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// The payment recorded for an order, if any.
    #[instrument(skip(self))]
    pub async fn for_order(&self, order_id: OrderId) -> Result<Option<Payment>, PaymentError> {
        let payments = self.list().await?;
        Ok(payments
            .iter()
            .find(|payment| payment.order_id == order_id)
            .cloned())
    }

    #[instrument(skip(self))]
    pub async fn totals(&self) -> Result<PaymentTotals, PaymentError> {
        let payments = self.list().await?;
        Ok(PaymentTotals::from_payments(payments.iter()))
    }
}
