//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

#[macro_use]
mod macros;

pub mod actor_client;
pub mod customer_client;
pub mod inventory_client;
pub mod menu_client;
pub mod order_client;
pub mod payment_client;

pub use actor_client::*;
pub use customer_client::*;
pub use inventory_client::*;
pub use menu_client::*;
pub use order_client::*;
pub use payment_client::*;
