//! # Restaurant Ops
//!
//! > **Order lifecycle, kitchen queue and sales reporting for a single restaurant.**
//!
//! Every collection (orders, menu, payments, customers, inventory) is owned by its own actor running
//! in a Tokio task. Staff never talk to the actors directly: they get a
//! [`Session`](service::Session) that checks their permissions and turns every failure into
//! a message that can be shown on screen.
//!
//! ## 🏗️ Core Concepts
//!
//! ### Orders move forward one step at a time
//!
//! ```text
//! PENDING ──▶ PREPARING ──▶ READY ──▶ DELIVERED
//! ```
//!
//! Any other target is rejected before anything is written. Each order carries a
//! `version`; passing the version you last saw makes a change fail with
//! [`OrderError::VersionConflict`](order_actor::OrderError::VersionConflict) instead of
//! silently overwriting someone else's.
//!
//! ### The kitchen queue is a projection
//!
//! [`KitchenQueue`](kitchen::KitchenQueue) is recomputed from the live order
//! subscription: active orders sorted by priority, then age. Aging bands
//! (on time / at risk / overdue) come from [`AgingPolicy`](kitchen::AgingPolicy).
//!
//! ### Reports are folds
//!
//! [`SalesReport`](reporting::SalesReport) aggregates the full order history for a
//! window (today, last 7 days, last month). Nothing is stored.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`] - generic collection actor, client, clock and mocks
//! - [`model`] - records: [`Order`](model::Order), [`MenuItem`](model::MenuItem),
//!   [`Payment`](model::Payment), [`Customer`](model::Customer),
//!   [`InventoryItem`](model::InventoryItem)
//! - [`order_actor`], [`menu_actor`], [`payment_actor`], [`customer_actor`],
//!   [`inventory_actor`] - per-collection rules and errors
//! - [`clients`] - typed clients over each actor
//! - [`kitchen`] - queue projection and aging
//! - [`reporting`] - windows and aggregates
//! - [`access`] - staff roles and permissions
//! - [`service`] - [`Session`](service::Session) and [`ServiceError`](service::ServiceError)
//! - [`settings`] - layered configuration
//! - [`lifecycle`] - [`RestaurantSystem`](lifecycle::RestaurantSystem) and logging setup
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod access;
pub mod clients;
pub mod customer_actor;
pub mod framework;
pub mod inventory_actor;
pub mod kitchen;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod payment_actor;
pub mod reporting;
pub mod service;
pub mod settings;
