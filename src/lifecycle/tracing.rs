//! # Logging
//!
//! [`setup_tracing`] installs the process-wide subscriber. Log lines are compact and omit
//! the module path; actors tag their events with `entity_type` instead.
//!
//! The level comes from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run     # commits, rejections, lifecycle
//! RUST_LOG=debug cargo run    # plus request payloads
//! RUST_LOG=restaurant_ops::kitchen=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` placing and advancing an order reads roughly:
//!
//! ```text
//! INFO Actor started entity_type="Order"
//! INFO place_order{staff=Nimal}: Created entity_type="Order" id=order_1 size=1
//! INFO place_order{staff=Nimal}: Order placed order_id=order_1
//! INFO advance{staff=Ravi id=order_1 to=Preparing}: Action ok entity_type="Order" id=order_1
//! WARN advance{staff=Ravi id=order_1 to=Delivered}: Action failed ... Cannot move order from PREPARING to DELIVERED
//! ```
//!
//! Calling it twice panics, since a global subscriber can only be set once.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
