//! Restaurant menu display.

use anyhow::Result;
use bitebox_commerce::prelude::*;

use super::MenuArgs;
use crate::context::Context;

/// Run the menu command.
pub async fn run(args: MenuArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let restaurant = catalog.get(&RestaurantId::new(args.restaurant))?;

    if ctx.output.is_json() {
        ctx.output.json(restaurant);
        return Ok(());
    }

    ctx.output.header(&restaurant.name);
    ctx.output.kv("Category", restaurant.category.display_name());
    ctx.output
        .kv("Rating", &format!("⭐ {:.1} / 5", restaurant.rating));
    ctx.output.info("");

    if restaurant.menu.is_empty() {
        ctx.output.info("This restaurant has no dishes listed.");
        return Ok(());
    }

    ctx.output.table_row(&["DISH", "PRICE"], &[32, 10]);
    ctx.output.info(&"-".repeat(44));
    for item in &restaurant.menu {
        ctx.output
            .table_row(&[&item.name, &item.price.to_string()], &[32, 10]);
        ctx.output
            .debug(&format!("cart id: {}", item.cart_id(restaurant)));
    }

    ctx.output.info("");
    ctx.output.info(&format!(
        "Order with: bitebox order {} --item \"{}\"",
        restaurant.id, restaurant.menu[0].name
    ));

    Ok(())
}
