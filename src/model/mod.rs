//! Pure data structures implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod customer;
pub mod inventory;
pub mod menu;
pub mod order;
pub mod payment;

pub use customer::*;
pub use inventory::*;
pub use menu::*;
pub use order::*;
pub use payment::*;
