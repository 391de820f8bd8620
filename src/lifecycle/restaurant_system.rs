use crate::access::StaffMember;
use crate::clients::{CustomerClient, InventoryClient, MenuClient, OrderClient, PaymentClient};
use crate::framework::Clock;
use crate::service::Session;
use crate::settings::Settings;
use std::sync::Arc;
use tracing::{error, info};

/// Starts, wires and stops the collection actors.
///
/// # Architecture
///
/// Five actors, each owning one collection:
/// - **Order Actor**: orders and their lifecycle
/// - **Menu Actor**: the menu catalog
/// - **Payment Actor**: the append-only payment log
/// - **Customer Actor**: customer records and loyalty
/// - **Inventory Actor**: stock levels, stamped by the shared clock it receives as context
///
/// None of them depends on another; cross-collection rules such as "one payment per
/// order" live in [`Session`].
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::start(Settings::load()?, Arc::new(SystemClock));
/// let session = system.session(StaffMember::new("Nimal", StaffRole::Waiter));
/// let id = session.place_order(OrderCreate::new("1x Kottu", Decimal::from(850))).await?;
///
/// drop(session);
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    pub order_client: OrderClient,
    pub menu_client: MenuClient,
    pub payment_client: PaymentClient,
    pub customer_client: CustomerClient,
    pub inventory_client: InventoryClient,
    settings: Arc<Settings>,
    clock: Arc<dyn Clock>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Spawns every actor on the current Tokio runtime.
    ///
    /// Must be called from within a runtime.
    pub fn start(settings: Settings, clock: Arc<dyn Clock>) -> Self {
        let capacity = settings.actors.channel_capacity;

        let (order_actor, order_client) = crate::order_actor::new(capacity, clock.clone());
        let (menu_actor, menu_client) = crate::menu_actor::new(capacity, clock.clone());
        let (payment_actor, payment_client) = crate::payment_actor::new(capacity, clock.clone());
        let (customer_actor, customer_client) =
            crate::customer_actor::new(capacity, clock.clone());
        let (inventory_actor, inventory_client) =
            crate::inventory_actor::new(capacity, clock.clone());

        let handles = vec![
            tokio::spawn(order_actor.run(())),
            tokio::spawn(menu_actor.run(())),
            tokio::spawn(payment_actor.run(())),
            tokio::spawn(customer_actor.run(())),
            tokio::spawn(inventory_actor.run(clock.clone())),
        ];
        info!(
            restaurant = %settings.restaurant.name,
            channel_capacity = capacity,
            "Restaurant system started"
        );

        Self {
            order_client,
            menu_client,
            payment_client,
            customer_client,
            inventory_client,
            settings: Arc::new(settings),
            clock,
            handles,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// A service session acting as `staff`.
    pub fn session(&self, staff: StaffMember) -> Session {
        info!(staff = %staff.name, role = ?staff.role, "Session opened");
        Session::new(
            staff,
            self.order_client.clone(),
            self.menu_client.clone(),
            self.payment_client.clone(),
            self.customer_client.clone(),
            self.inventory_client.clone(),
            self.settings.clone(),
            self.clock.clone(),
        )
    }

    /// Drops the system's clients and waits for every actor to stop.
    ///
    /// Actors exit once all clients are gone, so sessions and cloned clients must be
    /// dropped first or this waits for them.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down restaurant system...");

        drop(self.order_client);
        drop(self.menu_client);
        drop(self.payment_client);
        drop(self.customer_client);
        drop(self.inventory_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Restaurant system shutdown complete.");
        Ok(())
    }
}
