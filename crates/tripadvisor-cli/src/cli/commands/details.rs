//! `tripcli details` - Full details of one location.

use anyhow::Result;
use colored::Colorize;
use tripadvisor::LocationDetails;

use super::Context;
use crate::cli::args::DetailsArgs;

pub async fn execute(ctx: Context, args: DetailsArgs) -> Result<()> {
    let client = ctx.client()?;

    let mut builder = client.locations().details(&args.location_id);
    if let Some(currency) = &args.currency {
        builder = builder.currency(currency);
    }

    let details = builder.send().await?;

    match ctx.output_format.serialize(&details)? {
        Some(text) => println!("{text}"),
        None => print_details(&details),
    }

    Ok(())
}

fn print_details(details: &LocationDetails) {
    let name = details.name.as_deref().unwrap_or("(unnamed)");
    println!("{} {}", name.bold(), format!("#{}", details.location_id).dimmed());

    if let Some(category) = &details.category {
        let label = category.localized_name.as_deref().unwrap_or(&category.name);
        println!("{}", label.yellow());
    }
    println!();

    if let Some(rating) = details.rating_value() {
        let reviews = details
            .review_count()
            .map(|n| format!(" ({n} reviews)"))
            .unwrap_or_default();
        println!("  {} {}{}", "Rating:".bold(), format!("{rating:.1}").cyan(), reviews);
    }
    if let Some(ranking) = &details.ranking_data {
        if let (Some(rank), Some(out_of)) = (&ranking.ranking, &ranking.ranking_out_of) {
            let place = ranking.geo_location_name.as_deref().unwrap_or("area");
            println!("  {} #{rank} of {out_of} in {place}", "Ranking:".bold());
        }
    }
    if let Some(price) = &details.price_level {
        println!("  {} {price}", "Price:".bold());
    }
    if let Some(address) = &details.address_obj {
        println!("  {} {}", "Address:".bold(), address.one_line());
    }
    if let Some((lat, lon)) = details.coordinates() {
        println!("  {} {lat:.5},{lon:.5}", "Location:".bold());
    }
    if let Some(phone) = &details.phone {
        println!("  {} {phone}", "Phone:".bold());
    }
    if let Some(website) = &details.website {
        println!("  {} {}", "Website:".bold(), website.underline());
    }

    if !details.cuisine.is_empty() {
        let cuisine: Vec<&str> = details.cuisine.iter().map(|c| c.name.as_str()).collect();
        println!("  {} {}", "Cuisine:".bold(), cuisine.join(", "));
    }

    if let Some(hours) = &details.hours {
        if !hours.weekday_text.is_empty() {
            println!();
            println!("{}", "Hours:".bold().underline());
            for line in &hours.weekday_text {
                println!("  {line}");
            }
        }
    }

    if let Some(description) = &details.description {
        println!();
        println!("{}", description);
    }

    if let Some(url) = &details.web_url {
        println!();
        println!("{}", url.dimmed());
    }
}
