//! # Restaurant Ops demo
//!
//! Walks one service through the system:
//! 1. Starts the [`RestaurantSystem`] with settings from `config/restaurant` and the
//!    environment.
//! 2. Seeds the menu and places orders as a waiter.
//! 3. Moves them through the kitchen as a chef and prints the kitchen board.
//! 4. Settles a bill as the cashier and prints the receipt.
//! 5. Prints today's sales report as the owner.
//! 6. Uses up and restocks inventory as the chef.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use restaurant_ops::access::{StaffMember, StaffRole};
use restaurant_ops::framework::SystemClock;
use restaurant_ops::kitchen::QueueFilter;
use restaurant_ops::lifecycle::{setup_tracing, RestaurantSystem};
use restaurant_ops::model::{
    InventoryItemCreate, MenuItemCreate, OrderCreate, OrderDraft, OrderLine, OrderStatus,
    PaymentMethod, Priority, StockFilter, StockUnit,
};
use restaurant_ops::reporting::ReportWindow;
use restaurant_ops::service::Settlement;
use restaurant_ops::settings::Settings;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let settings = Settings::load().map_err(|e| e.to_string())?;
    info!(restaurant = %settings.restaurant.name, "Starting restaurant ops demo");

    let system = RestaurantSystem::start(settings, Arc::new(SystemClock));
    let owner = system.session(StaffMember::new("Anura", StaffRole::Owner));
    let waiter = system.session(StaffMember::new("Nimal", StaffRole::Waiter));
    let chef = system.session(StaffMember::new("Ravi", StaffRole::Chef));
    let cashier = system.session(StaffMember::new("Kamala", StaffRole::Cashier));

    // Menu
    let span = tracing::info_span!("menu_setup");
    let menu = async {
        for (name, price, category) in [
            ("Chicken Kottu", 850, "Mains"),
            ("Vegetable Fried Rice", 750, "Mains"),
            ("Coca Cola", 200, "Beverages"),
            ("Watalappan", 450, "Desserts"),
        ] {
            owner
                .add_menu_item(MenuItemCreate::new(name, Decimal::from(price), category))
                .await
                .map_err(|e| e.user_message())?;
        }
        owner.menu().await.map_err(|e| e.user_message())
    }
    .instrument(span)
    .await?;
    info!(items = menu.len(), "Menu ready");

    // Orders
    let span = tracing::info_span!("order_taking");
    let (dine_in, rush) = async {
        let dine_in = waiter
            .place_order(
                OrderCreate::from_lines(vec![
                    OrderLine::of(&menu[0], 2),
                    OrderLine::of(&menu[2], 1),
                ])
                .customer("Dilani")
                .table(4),
            )
            .await
            .map_err(|e| e.user_message())?;

        let rush = waiter
            .place_order(
                OrderCreate::from_lines(vec![OrderLine::of(&menu[1], 1)])
                    .priority(Priority::High)
                    .prep_minutes(10),
            )
            .await
            .map_err(|e| e.user_message())?;

        let sloppy = OrderDraft {
            items: "1x Watalappan".to_string(),
            total: "four fifty".to_string(),
            ..OrderDraft::default()
        };
        if let Err(e) = waiter.place_draft(&sloppy).await {
            warn!("Draft rejected: {}", e.user_message());
        }

        waiter
            .assign_table(dine_in, Some(6), None)
            .await
            .map_err(|e| e.user_message())?;

        Ok::<_, String>((dine_in, rush))
    }
    .instrument(span)
    .await?;

    // Kitchen
    let span = tracing::info_span!("kitchen");
    async {
        let order = chef
            .advance(dine_in, OrderStatus::Preparing, None)
            .await
            .map_err(|e| e.user_message())?;
        chef.advance(dine_in, OrderStatus::Ready, Some(order.version))
            .await
            .map_err(|e| e.user_message())?;

        if let Err(e) = chef.advance(rush, OrderStatus::Delivered, None).await {
            warn!("Skipped a step: {}", e.user_message());
        }
        chef.advance(rush, OrderStatus::Preparing, None)
            .await
            .map_err(|e| e.user_message())?;

        println!("Kitchen board:");
        for ticket in chef
            .kitchen_board(QueueFilter::All)
            .await
            .map_err(|e| e.user_message())?
        {
            println!(
                "  {} {:<9} {:<6} {:>6}  {} ({})",
                ticket.order.id,
                ticket.order.status,
                ticket.order.effective_priority(),
                ticket.elapsed_label(),
                ticket.order.items,
                ticket.band,
            );
        }

        waiter
            .advance(dine_in, OrderStatus::Delivered, None)
            .await
            .map_err(|e| e.user_message())?;
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    // Payment
    let span = tracing::info_span!("billing");
    async {
        let payment = cashier
            .settle(
                dine_in,
                Settlement::new(PaymentMethod::Card).tip(Decimal::from(100)),
            )
            .await
            .map_err(|e| e.user_message())?;
        println!("{}", payment.receipt(&system.settings().restaurant.name));

        if let Err(e) = cashier
            .settle(dine_in, Settlement::new(PaymentMethod::Cash))
            .await
        {
            warn!("Second settlement refused: {}", e.user_message());
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    // Reporting
    if let Err(e) = chef.sales_report(ReportWindow::Today, &chrono::Local).await {
        warn!("Chef cannot see the report: {}", e.user_message());
    }
    let report = owner
        .sales_report(ReportWindow::Today, &chrono::Local)
        .await
        .map_err(|e| e.user_message())?;
    println!("{}", report);

    // Inventory
    let span = tracing::info_span!("stock");
    async {
        let rice = chef
            .add_stock_item(
                InventoryItemCreate::new("Rice", Decimal::from(25), StockUnit::Kilogram, Decimal::from(5))
                    .supplier("Dambulla Market")
                    .cost_per_unit(Decimal::from(300)),
            )
            .await
            .map_err(|e| e.user_message())?;
        chef.add_stock_item(
            InventoryItemCreate::new("Coconut Milk", Decimal::from(3), StockUnit::Litre, Decimal::from(2))
                .category("Dairy")
                .cost_per_unit(Decimal::from(450)),
        )
        .await
        .map_err(|e| e.user_message())?;

        chef.adjust_stock(rice, Decimal::from(-21))
            .await
            .map_err(|e| e.user_message())?;

        let summary = chef.stock_summary().await.map_err(|e| e.user_message())?;
        println!(
            "Stock: {} items, {} low, {} out, worth Rs. {:.2}",
            summary.items, summary.low, summary.out, summary.total_value
        );
        for item in chef
            .stock_list(StockFilter::Low)
            .await
            .map_err(|e| e.user_message())?
        {
            println!("  reorder {} ({} {} left)", item.name, item.quantity, item.unit);
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    drop((owner, waiter, chef, cashier));
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
