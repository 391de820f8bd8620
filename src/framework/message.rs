//! # Generic Messages
//!
//! The request envelope exchanged between `ResourceClient` and `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use std::sync::Arc;
use tokio::sync::{oneshot, watch};

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// The full contents of a collection, ordered by id.
pub type Snapshot<T> = Arc<Vec<T>>;

/// Live view of a collection. Always holds the latest committed [`Snapshot`].
pub type Subscription<T> = watch::Receiver<Snapshot<T>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto the operations a document collection offers: create, read one,
/// read all, field-level update, delete, a record-specific `Action`, and a live
/// subscription.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Snapshot<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Subscribe {
        respond_to: Response<Subscription<T>>,
    },
}
