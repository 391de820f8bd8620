use super::error::ServiceError;
use crate::access::{Permission, StaffMember, StaffStatus};
use crate::clients::{
    ActorClient, CustomerClient, InventoryClient, MenuClient, OrderClient, PaymentClient,
    PaymentTotals,
};
use crate::customer_actor::CustomerError;
use crate::inventory_actor::InventoryError;
use crate::framework::{Clock, Snapshot};
use crate::kitchen::{KitchenQueue, KitchenTicket, QueueFilter};
use crate::model::{
    Customer, CustomerCreate, CustomerId, CustomerTier, CustomerUpdate, InventoryItem,
    InventoryItemCreate, InventoryItemId, InventoryItemUpdate, MenuItem, MenuItemCreate,
    MenuItemId, MenuItemUpdate, Order, OrderCreate, OrderDraft, OrderId, OrderStatus, Payment,
    PaymentCreate, PaymentId, PaymentMethod, Priority, SplitPart, StockFilter, StockStatus,
    StockSummary,
};
use crate::order_actor::OrderError;
use crate::payment_actor::PaymentError;
use crate::reporting::{ReportWindow, SalesReport};
use crate::settings::Settings;
use chrono::TimeZone;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// How a bill is settled. The subtotal always comes from the order.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub method: PaymentMethod,
    pub tip: Decimal,
    pub discount: Decimal,
    pub splits: Vec<SplitPart>,
    pub notes: Option<String>,
}

impl Settlement {
    pub fn new(method: PaymentMethod) -> Self {
        Self {
            method,
            tip: Decimal::ZERO,
            discount: Decimal::ZERO,
            splits: Vec::new(),
            notes: None,
        }
    }

    /// A split settlement across the given parts.
    pub fn split(parts: Vec<SplitPart>) -> Self {
        Self {
            splits: parts,
            ..Self::new(PaymentMethod::Split)
        }
    }

    pub fn tip(mut self, tip: Decimal) -> Self {
        self.tip = tip;
        self
    }

    pub fn discount(mut self, discount: Decimal) -> Self {
        self.discount = discount;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// The service boundary for one staff member.
///
/// Every operation checks that the member is active and holds the permission the
/// operation needs before any collection is read or written. Menu and order reads only
/// need an active account.
#[derive(Clone)]
pub struct Session {
    staff: StaffMember,
    orders: OrderClient,
    menu: MenuClient,
    payments: PaymentClient,
    customers: CustomerClient,
    inventory: InventoryClient,
    settings: Arc<Settings>,
    clock: Arc<dyn Clock>,
}

impl Session {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        staff: StaffMember,
        orders: OrderClient,
        menu: MenuClient,
        payments: PaymentClient,
        customers: CustomerClient,
        inventory: InventoryClient,
        settings: Arc<Settings>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            staff,
            orders,
            menu,
            payments,
            customers,
            inventory,
            settings,
            clock,
        }
    }

    pub fn staff(&self) -> &StaffMember {
        &self.staff
    }

    fn authorize(&self, permission: Permission) -> Result<(), ServiceError> {
        self.staff.authorize(permission).map_err(|e| {
            warn!(staff = %self.staff.name, %permission, "Access denied: {}", e);
            ServiceError::from(e)
        })
    }

    fn ensure_active(&self) -> Result<(), ServiceError> {
        self.staff.ensure_active().map_err(|e| {
            warn!(staff = %self.staff.name, "Access denied: {}", e);
            ServiceError::from(e)
        })
    }

    // =========================================================================
    // Orders
    // =========================================================================

    #[instrument(skip(self, params), fields(staff = %self.staff.name))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, ServiceError> {
        self.authorize(Permission::ManageOrders)?;
        let id = self.orders.place_order(params).await?;
        info!(order_id = %id, "Order placed");
        Ok(id)
    }

    /// Validates raw form input first; nothing is written when it is rejected.
    #[instrument(skip(self, draft), fields(staff = %self.staff.name))]
    pub async fn place_draft(&self, draft: &OrderDraft) -> Result<OrderId, ServiceError> {
        self.authorize(Permission::ManageOrders)?;
        let id = self.orders.place_draft(draft).await?;
        info!(order_id = %id, "Order placed");
        Ok(id)
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn advance(
        &self,
        id: OrderId,
        to: OrderStatus,
        expected_version: Option<u64>,
    ) -> Result<Order, ServiceError> {
        self.authorize(Permission::ManageOrders)?;
        Ok(self.orders.advance(id, to, expected_version).await?)
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn set_priority(
        &self,
        id: OrderId,
        priority: Priority,
        expected_version: Option<u64>,
    ) -> Result<Order, ServiceError> {
        self.authorize(Permission::ManageOrders)?;
        Ok(self.orders.set_priority(id, priority, expected_version).await?)
    }

    /// Seats an order at a table, or clears its table with `None`.
    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn assign_table(
        &self,
        id: OrderId,
        table: Option<u32>,
        expected_version: Option<u64>,
    ) -> Result<Order, ServiceError> {
        self.authorize(Permission::ManageTables)?;
        let order = self.orders.assign_table(id, table, expected_version).await?;
        info!(order_id = %id, table = ?order.table_number, "Table assigned");
        Ok(order)
    }

    /// Removes the order record outright. There is no cancelled state.
    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn remove_order(&self, id: OrderId) -> Result<(), ServiceError> {
        self.authorize(Permission::ManageOrders)?;
        self.orders.delete(id).await?;
        info!(order_id = %id, "Order removed");
        Ok(())
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn order(&self, id: OrderId) -> Result<Order, ServiceError> {
        self.ensure_active()?;
        self.orders
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()).into())
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn orders(&self) -> Result<Snapshot<Order>, ServiceError> {
        self.ensure_active()?;
        Ok(self.orders.list().await?)
    }

    // =========================================================================
    // Kitchen
    // =========================================================================

    /// A live queue that follows every committed order change.
    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn kitchen_queue(&self) -> Result<KitchenQueue, ServiceError> {
        self.authorize(Permission::ManageOrders)?;
        let subscription = self.orders.subscribe().await?;
        Ok(KitchenQueue::new(subscription, self.settings.kitchen))
    }

    /// The kitchen board as of now.
    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn kitchen_board(
        &self,
        filter: QueueFilter,
    ) -> Result<Vec<KitchenTicket>, ServiceError> {
        let queue = self.kitchen_queue().await?;
        Ok(queue.board(self.clock.now(), filter))
    }

    // =========================================================================
    // Menu
    // =========================================================================

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn menu(&self) -> Result<Snapshot<MenuItem>, ServiceError> {
        self.ensure_active()?;
        Ok(self.menu.list().await?)
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn search_menu(
        &self,
        query: &str,
        category: Option<&str>,
    ) -> Result<Vec<MenuItem>, ServiceError> {
        self.ensure_active()?;
        Ok(self.menu.search(query, category).await?)
    }

    #[instrument(skip(self, params), fields(staff = %self.staff.name))]
    pub async fn add_menu_item(&self, params: MenuItemCreate) -> Result<MenuItemId, ServiceError> {
        self.authorize(Permission::ManageMenu)?;
        Ok(self.menu.add_item(params).await?)
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn update_menu_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, ServiceError> {
        self.authorize(Permission::ManageMenu)?;
        Ok(self.menu.update_item(id, update).await?)
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn remove_menu_item(&self, id: MenuItemId) -> Result<(), ServiceError> {
        self.authorize(Permission::ManageMenu)?;
        Ok(self.menu.delete(id).await?)
    }

    // =========================================================================
    // Payments
    // =========================================================================

    /// Records the payment for an order, billing the order's total.
    ///
    /// An order can be settled once. Two sessions settling the same order at the same
    /// moment can both pass the check; the payment store does not enforce uniqueness.
    #[instrument(skip(self, settlement), fields(staff = %self.staff.name))]
    pub async fn settle(
        &self,
        order_id: OrderId,
        settlement: Settlement,
    ) -> Result<Payment, ServiceError> {
        self.authorize(Permission::ProcessPayments)?;

        let order = self
            .orders
            .get(order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;
        if self.payments.for_order(order_id).await?.is_some() {
            warn!(%order_id, "Order already settled");
            return Err(PaymentError::AlreadyPaid(order_id.to_string()).into());
        }

        let params = PaymentCreate {
            order_id,
            customer_name: order.customer_name,
            items: order.items,
            subtotal: order.total,
            tip: settlement.tip,
            discount: settlement.discount,
            method: settlement.method,
            splits: settlement.splits,
            notes: settlement.notes,
        };
        let payment_id = self.payments.record(params).await?;
        info!(%order_id, %payment_id, "Order settled");
        self.payment(payment_id).await
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn payment(&self, id: PaymentId) -> Result<Payment, ServiceError> {
        self.authorize(Permission::ProcessPayments)?;
        self.payments
            .get(id)
            .await?
            .ok_or_else(|| PaymentError::NotFound(id.to_string()).into())
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn payments(&self) -> Result<Snapshot<Payment>, ServiceError> {
        self.authorize(Permission::ProcessPayments)?;
        Ok(self.payments.list().await?)
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn payment_totals(&self) -> Result<PaymentTotals, ServiceError> {
        self.authorize(Permission::ProcessPayments)?;
        Ok(self.payments.totals().await?)
    }

    /// Printable receipt headed with the configured restaurant name.
    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn receipt(&self, id: PaymentId) -> Result<String, ServiceError> {
        let payment = self.payment(id).await?;
        Ok(payment.receipt(&self.settings.restaurant.name))
    }

    // =========================================================================
    // Customers
    // =========================================================================

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn register_customer(
        &self,
        params: CustomerCreate,
    ) -> Result<CustomerId, ServiceError> {
        self.authorize(Permission::ManageCustomers)?;
        Ok(self.customers.register(params).await?)
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, ServiceError> {
        self.authorize(Permission::ManageCustomers)?;
        Ok(self.customers.update_contact(id, update).await?)
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn add_loyalty_points(
        &self,
        id: CustomerId,
        points: u32,
    ) -> Result<(u32, CustomerTier), ServiceError> {
        self.authorize(Permission::ManageCustomers)?;
        Ok(self.customers.add_loyalty_points(id, points).await?)
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn record_visit(
        &self,
        id: CustomerId,
        amount: Decimal,
    ) -> Result<(u32, CustomerTier), ServiceError> {
        self.authorize(Permission::ManageCustomers)?;
        Ok(self.customers.record_visit(id, amount).await?)
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn customer(&self, id: CustomerId) -> Result<Customer, ServiceError> {
        self.authorize(Permission::ManageCustomers)?;
        self.customers
            .get(id)
            .await?
            .ok_or_else(|| CustomerError::NotFound(id.to_string()).into())
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn find_customers(
        &self,
        query: &str,
        tier: Option<CustomerTier>,
    ) -> Result<Vec<Customer>, ServiceError> {
        self.authorize(Permission::ManageCustomers)?;
        Ok(self.customers.search(query, tier).await?)
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn remove_customer(&self, id: CustomerId) -> Result<(), ServiceError> {
        self.authorize(Permission::ManageCustomers)?;
        Ok(self.customers.delete(id).await?)
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    #[instrument(skip(self, params), fields(staff = %self.staff.name))]
    pub async fn add_stock_item(
        &self,
        params: InventoryItemCreate,
    ) -> Result<InventoryItemId, ServiceError> {
        self.authorize(Permission::ManageInventory)?;
        Ok(self.inventory.add_item(params).await?)
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn update_stock_item(
        &self,
        id: InventoryItemId,
        update: InventoryItemUpdate,
    ) -> Result<InventoryItem, ServiceError> {
        self.authorize(Permission::ManageInventory)?;
        Ok(self.inventory.update_item(id, update).await?)
    }

    /// Adds `delta` to the stock on hand (negative to use it up) and reports the new
    /// level. Running out is logged.
    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn adjust_stock(
        &self,
        id: InventoryItemId,
        delta: Decimal,
    ) -> Result<(Decimal, StockStatus), ServiceError> {
        self.authorize(Permission::ManageInventory)?;
        let (quantity, status) = self.inventory.adjust_quantity(id, delta).await?;
        if status != StockStatus::Good {
            warn!(item_id = %id, %quantity, %status, "Stock needs reordering");
        }
        Ok((quantity, status))
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn stock_item(&self, id: InventoryItemId) -> Result<InventoryItem, ServiceError> {
        self.authorize(Permission::ManageInventory)?;
        self.inventory
            .get(id)
            .await?
            .ok_or_else(|| InventoryError::NotFound(id.to_string()).into())
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn stock_list(&self, filter: StockFilter) -> Result<Vec<InventoryItem>, ServiceError> {
        self.authorize(Permission::ManageInventory)?;
        Ok(self.inventory.stock_list(filter).await?)
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn stock_summary(&self) -> Result<StockSummary, ServiceError> {
        self.authorize(Permission::ManageInventory)?;
        Ok(self.inventory.summary().await?)
    }

    #[instrument(skip(self), fields(staff = %self.staff.name))]
    pub async fn remove_stock_item(&self, id: InventoryItemId) -> Result<(), ServiceError> {
        self.authorize(Permission::ManageInventory)?;
        Ok(self.inventory.delete(id).await?)
    }

    // =========================================================================
    // Staff
    // =========================================================================

    /// Grants `permission` to `member` and returns the changed member.
    ///
    /// Staff records are held by the caller; the session only decides whether this
    /// member may change them.
    #[instrument(skip(self, member), fields(staff = %self.staff.name, member = %member.name))]
    pub fn grant_permission(
        &self,
        mut member: StaffMember,
        permission: Permission,
    ) -> Result<StaffMember, ServiceError> {
        self.authorize(Permission::ManageStaff)?;
        member.permissions.grant(permission);
        info!(%permission, "Permission granted");
        Ok(member)
    }

    #[instrument(skip(self, member), fields(staff = %self.staff.name, member = %member.name))]
    pub fn revoke_permission(
        &self,
        mut member: StaffMember,
        permission: Permission,
    ) -> Result<StaffMember, ServiceError> {
        self.authorize(Permission::ManageStaff)?;
        member.permissions.revoke(permission);
        info!(%permission, "Permission revoked");
        Ok(member)
    }

    /// Marks `member` active, inactive or on leave. Only active members can use a session.
    #[instrument(skip(self, member), fields(staff = %self.staff.name, member = %member.name))]
    pub fn set_staff_status(
        &self,
        member: StaffMember,
        status: StaffStatus,
    ) -> Result<StaffMember, ServiceError> {
        self.authorize(Permission::ManageStaff)?;
        info!(%status, "Staff status changed");
        Ok(member.with_status(status))
    }

    // =========================================================================
    // Reporting
    // =========================================================================

    /// Sales report for `window` ending now, with days and hours taken in `tz`.
    #[instrument(skip(self, tz), fields(staff = %self.staff.name))]
    pub async fn sales_report<Tz>(
        &self,
        window: ReportWindow,
        tz: &Tz,
    ) -> Result<SalesReport, ServiceError>
    where
        Tz: TimeZone,
    {
        self.authorize(Permission::ViewAnalytics)?;
        let orders = self.orders.list().await?;
        let menu = self.menu.list().await?;
        let now = self.clock.now().with_timezone(tz);
        Ok(SalesReport::build(
            window,
            &orders,
            &menu,
            &now,
            &self.settings.reporting,
        ))
    }
}
