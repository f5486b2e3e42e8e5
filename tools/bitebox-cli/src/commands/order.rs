//! Placing an order: menu → cart → checkout → receipt.

use std::time::Duration;

use anyhow::{anyhow, Context as _, Result};
use bitebox_commerce::prelude::*;
use dialoguer::Confirm;
use tracing::info;

use super::OrderArgs;
use crate::context::Context;
use crate::output::{money, status_badge, Output};

/// Pause between simulated delivery updates.
const TRACKING_STEP: Duration = Duration::from_millis(600);

/// Run the order command.
pub async fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let method = PaymentMethod::from_str(&args.pay)
        .ok_or_else(|| anyhow!("Unknown payment method: {} (use qr or manual)", args.pay))?;

    let catalog = ctx.catalog()?;
    let restaurant = catalog.get(&RestaurantId::new(args.restaurant.clone()))?;
    let store = ctx.cart_store();
    let mut badge = store.subscribe();

    ctx.output.header(&format!("Ordering from {}", restaurant.name));
    fill_cart(&store, restaurant, &args.items, &args.removals)?;
    if badge.has_changed() {
        ctx.output.cart_badge(&badge.latest());
    }

    // Cart screen
    ctx.output.header("Your Cart");
    let snapshot = store.snapshot();
    ctx.output.cart_table(&snapshot);

    let mut checkout = CheckoutFlow::start(snapshot)
        .context("Please add items to your cart before checking out")?;
    checkout.proceed_to_payment()?;
    checkout.select_payment(method)?;

    ctx.output.header("Payment");
    ctx.output.kv("Amount payable", &money(checkout.total()));
    ctx.output.kv("Method", method.display_name());

    if !args.yes && !ctx.output.is_json() {
        ctx.output.info("");
        let confirmed = Confirm::new()
            .with_prompt(format!("Confirm payment of {}?", checkout.total()))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Payment cancelled");
            return Ok(());
        }
    }

    let spinner = ctx.output.spinner("Processing payment...");
    tokio::time::sleep(Duration::from_millis(400)).await;
    let mut order = checkout.place_order()?;
    spinner.finish_and_clear();

    store.clear();
    if badge.has_changed() {
        ctx.output.debug(&format!(
            "cart cleared ({} items)",
            badge.latest().total_items
        ));
    }

    if ctx.output.is_json() {
        ctx.output.json(&order);
    } else {
        ctx.output.success("Payment Successful!");
        ctx.output.header("Receipt");
        for line in order.receipt_text().lines() {
            println!("  {}", line);
        }
    }

    if args.track {
        track(&mut order, &ctx.output, TRACKING_STEP).await?;
    }

    Ok(())
}

/// Apply the requested additions then removals to the cart.
///
/// Every dish name is resolved first, so an unknown dish leaves the cart
/// untouched.
fn fill_cart(
    store: &CartStore,
    restaurant: &Restaurant,
    items: &[String],
    removals: &[String],
) -> Result<()> {
    let additions = items
        .iter()
        .map(|name| lookup(restaurant, name))
        .collect::<Result<Vec<_>>>()?;
    let removals = removals
        .iter()
        .map(|name| lookup(restaurant, name))
        .collect::<Result<Vec<_>>>()?;

    for item in additions {
        store.add_item(item.to_candidate(restaurant));
    }
    for item in removals {
        if !store.remove_one_unit(&item.cart_id(restaurant)) {
            info!(dish = %item.name, "Removal skipped, dish not in cart");
        }
    }

    Ok(())
}

fn lookup<'a>(restaurant: &'a Restaurant, name: &str) -> Result<&'a MenuItem> {
    restaurant
        .menu_item(name)
        .ok_or_else(|| anyhow!("{} has no dish called '{}'", restaurant.name, name))
}

/// Walk the order through its delivery states until it is delivered.
async fn track(order: &mut Order, output: &Output, step: Duration) -> Result<()> {
    output.header("Tracking");
    output.kv(order.id.as_str(), &status_badge(order.status));

    while !order.status.is_terminal() {
        tokio::time::sleep(step).await;
        let status = order.advance_status()?;
        output.kv(order.id.as_str(), &status_badge(status));
    }

    output.success("Enjoy your meal!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fill_cart() {
        let catalog = Catalog::demo();
        let restaurant = catalog.get(&RestaurantId::new("1")).unwrap();
        let store = CartStore::default();

        fill_cart(
            &store,
            restaurant,
            &names(&["Whopper", "whopper", "French Fries"]),
            &names(&["French Fries", "Cheese Burger"]),
        )
        .unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].quantity, 2);
        assert_eq!(snapshot.total_price, Money::new(398));
    }

    #[tokio::test]
    async fn test_track_ends_delivered() {
        let mut cart = Cart::default();
        cart.add_item(ItemCandidate::new("1-Whopper", "Whopper", Money::new(199)));
        let mut order = Order::paid(cart.snapshot(), PaymentMethod::Manual);

        track(&mut order, &Output::new(false, true), Duration::ZERO)
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::Delivered);
        assert!(order.is_paid());
    }

    #[test]
    fn test_fill_cart_unknown_dish_adds_nothing() {
        let catalog = Catalog::demo();
        let restaurant = catalog.get(&RestaurantId::new("1")).unwrap();
        let store = CartStore::default();

        let result = fill_cart(&store, restaurant, &names(&["Whopper", "Tiramisu"]), &[]);
        assert!(result.is_err());
        assert!(store.is_empty());
    }
}
