//! # Service Boundary
//!
//! [`Session`] is what the rest of the application talks to. It wraps the collection
//! clients for one [`StaffMember`](crate::access::StaffMember), enforces their
//! permissions, and reports every failure as a [`ServiceError`] that can be shown to
//! staff with [`ServiceError::user_message`].

pub mod error;
pub mod session;

pub use error::ServiceError;
pub use session::{Session, Settlement};
