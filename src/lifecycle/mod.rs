//! Runtime orchestration.
//!
//! - [`RestaurantSystem`] - starts the collection actors, hands out sessions, shuts down
//! - [`setup_tracing`] - installs the logging subscriber

pub mod restaurant_system;
pub mod tracing;

pub use restaurant_system::*;
pub use tracing::*;
