//! Generic actor framework for document collections.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that stored record types implement
//! - [`ResourceActor`] - Generic actor that owns one collection
//! - [`ResourceClient`] - Cloneable handle for talking to an actor
//! - [`FrameworkError`] - Plumbing errors (closed channels, missing ids)
//! - [`Clock`] - Source of store-assigned timestamps
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod clock;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use clock::{Clock, ManualClock, SystemClock};
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response, Snapshot, Subscription};
