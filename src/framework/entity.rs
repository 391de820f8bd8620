//! # ActorEntity Trait
//!
//! The contract every stored record (Order, MenuItem, Payment, Customer) implements so the
//! generic [`ResourceActor`](super::ResourceActor) can own a collection of it.
//!
//! We use "Associated Types" (type Id, type Create, etc.) to enforce type safety.
//! An `Order` collection requires an `OrderCreate` payload, and you can't accidentally send it
//! a `MenuItemCreate` payload. The compiler rejects it.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::{Debug, Display};

/// Trait that any stored record must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can call other actors. The `Context` type is injected
/// into every hook when the actor is started ("late binding" via `run()`).
///
/// # Mutation Semantics
/// `on_update` and `handle_action` are invoked on a scratch copy of the record. The actor only
/// commits the copy when the hook returns `Ok`, so an implementation may return early with an
/// error at any point without leaving the stored record half-changed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier. Assigned by the store from a sequential counter.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// The data required for a field-level update.
    type Update: Send + Sync + Debug;

    /// Record-specific operations (e.g. `Advance`, `SetPriority`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the hooks. Use `()` if none are needed.
    type Context: Send + Sync;

    /// The error type for this record.
    ///
    /// One enum per collection rather than per message: clients match on a single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the full record from the store-assigned id and creation timestamp.
    fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        created_at: DateTime<Utc>,
    ) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction, before the record is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply a field-level update.
    async fn on_update(&mut self, update: Self::Update, ctx: &Self::Context)
        -> Result<(), Self::Error>;

    /// Called before removal. Returning an error vetoes the delete.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a record-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
