//! # Kitchen
//!
//! Read-only projections over the order collection for the kitchen display.
//!
//! - [`queue`] - [`project`] sorts active orders; [`KitchenQueue`] keeps it live off an
//!   order subscription
//! - [`aging`] - [`AgingPolicy`] and [`AgingBand`], recomputed at render time
//!
//! ```rust,ignore
//! let mut queue = KitchenQueue::new(orders.subscribe().await?, AgingPolicy::default());
//! loop {
//!     for ticket in queue.board(clock.now(), QueueFilter::All) {
//!         println!("{} {} {}", ticket.order.id, ticket.elapsed_label(), ticket.band.colour());
//!     }
//!     queue.changed().await?;
//! }
//! ```

pub mod aging;
pub mod queue;

pub use aging::*;
pub use queue::*;
