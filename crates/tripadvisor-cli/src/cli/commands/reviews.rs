//! `tripcli reviews` - Recent reviews of one location.

use anyhow::Result;
use colored::Colorize;
use tripadvisor::{Paged, Review};

use super::Context;
use crate::cli::args::ReviewsArgs;
use crate::output::truncate;

pub async fn execute(ctx: Context, args: ReviewsArgs) -> Result<()> {
    let client = ctx.client()?;

    let mut builder = client.locations().reviews(&args.location_id);
    if let Some(limit) = args.limit {
        builder = builder.limit(limit);
    }
    if let Some(offset) = args.offset {
        builder = builder.offset(offset);
    }

    let reviews = builder.send().await?;

    match ctx.output_format.serialize(&reviews)? {
        Some(text) => println!("{text}"),
        None => print_reviews(&reviews),
    }

    Ok(())
}

fn print_reviews(reviews: &Paged<Review>) {
    if reviews.data.is_empty() {
        println!("{}", "No reviews found.".dimmed());
        return;
    }

    for review in &reviews.data {
        let stars = review
            .rating
            .map(|r| "★".repeat(r.round().clamp(0.0, 5.0) as usize))
            .unwrap_or_default();
        let title = review.title.as_deref().unwrap_or("(untitled)");
        println!("{} {}", stars.yellow(), title.bold());

        let author = review
            .user
            .as_ref()
            .and_then(|u| u.username.as_deref())
            .unwrap_or("anonymous");
        let date = review
            .published_at()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        println!("{}", format!("{author} {date}").dimmed());

        if let Some(text) = &review.text {
            println!("{}", truncate(text, 400));
        }
        println!();
    }

    if reviews.has_next() {
        println!("{}", "Tip: Use --offset to see more reviews".dimmed());
    }
}
