//! Errors surfaced at the session boundary.

use crate::access::AccessError;
use crate::customer_actor::CustomerError;
use crate::inventory_actor::InventoryError;
use crate::menu_actor::MenuError;
use crate::order_actor::OrderError;
use crate::payment_actor::PaymentError;
use thiserror::Error;

const COULD_NOT_SAVE: &str = "Could not save your changes. Please try again.";

/// Every failure a [`Session`](super::Session) operation can report.
///
/// The `#[from]` conversions let session methods use `?` directly on client results.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl ServiceError {
    /// Notification text for staff.
    ///
    /// Validation and transition problems are shown as is. Store failures collapse to
    /// one generic message; the detail goes to the log instead.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Access(AccessError::Forbidden { permission, .. }) => {
                format!("You do not have permission to {}", permission)
            }
            ServiceError::Access(AccessError::Inactive { .. }) => {
                "Your account is not active".to_string()
            }

            ServiceError::Order(OrderError::VersionConflict { .. }) => {
                "This order was just changed by someone else. Refresh and try again.".to_string()
            }
            other if other.is_persistence() => COULD_NOT_SAVE.to_string(),

            other => other.to_string(),
        }
    }

    /// True when retrying the same request later might succeed.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            ServiceError::Order(OrderError::Persistence(_))
                | ServiceError::Menu(MenuError::Persistence(_))
                | ServiceError::Payment(PaymentError::Persistence(_))
                | ServiceError::Customer(CustomerError::Persistence(_))
                | ServiceError::Inventory(InventoryError::Persistence(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::Permission;
    use crate::model::OrderStatus;

    #[test]
    fn validation_and_transition_messages_pass_through() {
        let err: ServiceError = OrderError::Validation("Please fill in items and total".into()).into();
        assert_eq!(err.user_message(), "Please fill in items and total");

        let err: ServiceError = OrderError::InvalidTransition {
            from: OrderStatus::Pending,
            to: OrderStatus::Ready,
        }
        .into();
        assert_eq!(err.user_message(), "Cannot move order from PENDING to READY");
    }

    #[test]
    fn store_failures_are_generic() {
        let err: ServiceError = OrderError::Persistence("actor dropped".into()).into();
        assert_eq!(err.user_message(), COULD_NOT_SAVE);
        assert!(err.is_persistence());

        let err: ServiceError = PaymentError::Persistence("closed".into()).into();
        assert_eq!(err.user_message(), COULD_NOT_SAVE);

        for err in [
            ServiceError::from(MenuError::Persistence("closed".into())),
            ServiceError::from(CustomerError::Persistence("closed".into())),
            ServiceError::from(InventoryError::Persistence("closed".into())),
        ] {
            assert!(err.is_persistence());
            assert_eq!(err.user_message(), COULD_NOT_SAVE);
        }

        let err: ServiceError = InventoryError::Validation("Please enter a name".into()).into();
        assert!(!err.is_persistence());
        assert_eq!(err.user_message(), "Please enter a name");
    }

    #[test]
    fn forbidden_names_the_permission() {
        let err: ServiceError = AccessError::Forbidden {
            staff: "Ravi".into(),
            permission: Permission::ViewAnalytics,
        }
        .into();
        assert_eq!(
            err.user_message(),
            "You do not have permission to view analytics"
        );
        assert!(!err.is_persistence());
    }
}
