//! Restaurant listing and search.

use anyhow::{anyhow, Result};
use bitebox_commerce::prelude::*;

use super::RestaurantsArgs;
use crate::context::Context;

/// Run the restaurants command.
pub async fn run(args: RestaurantsArgs, ctx: &Context) -> Result<()> {
    let query = build_query(&args)?;
    let catalog = ctx.catalog()?;
    let found = catalog.search(&query);

    if ctx.output.is_json() {
        ctx.output.json(&found);
        return Ok(());
    }

    let heading = match query.category {
        Some(category) => format!("Restaurants: {}", category),
        None => "Restaurants: All".to_string(),
    };
    ctx.output.header(&heading);

    if found.is_empty() {
        ctx.output.info("No restaurants match your search.");
        return Ok(());
    }

    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "RATING"], &[6, 24, 10, 8]);
    ctx.output.info(&"-".repeat(54));
    for restaurant in &found {
        ctx.output.table_row(
            &[
                restaurant.id.as_str(),
                &restaurant.name,
                restaurant.category.display_name(),
                &format!("⭐ {:.1}", restaurant.rating),
            ],
            &[6, 24, 10, 8],
        );
    }

    ctx.output.info("");
    ctx.output
        .info(&format!("{} of {} restaurant(s)", found.len(), catalog.len()));

    Ok(())
}

fn build_query(args: &RestaurantsArgs) -> Result<RestaurantQuery> {
    let mut query = RestaurantQuery::new().with_text(args.search.clone());

    if let Some(ref name) = args.category {
        // "All" is the home screen's way of saying no filter
        if !name.eq_ignore_ascii_case("all") {
            let category =
                Category::from_str(name).ok_or_else(|| anyhow!("Unknown category: {}", name))?;
            query = query.with_category(category);
        }
    }

    let sort = SortOption::from_str(&args.sort)
        .ok_or_else(|| anyhow!("Unknown sort option: {}", args.sort))?;
    Ok(query.with_sort(sort))
}
