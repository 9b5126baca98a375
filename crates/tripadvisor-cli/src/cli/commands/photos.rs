//! `tripcli photos` - Recent photos of one location.

use anyhow::Result;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};
use tripadvisor::{Paged, Photo};

use super::Context;
use crate::cli::args::PhotosArgs;
use crate::output::truncate;

#[derive(Tabled)]
struct PhotoRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Caption")]
    caption: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "URL")]
    url: String,
}

pub async fn execute(ctx: Context, args: PhotosArgs) -> Result<()> {
    let client = ctx.client()?;

    let mut builder = client.locations().photos(&args.location_id);
    if let Some(limit) = args.limit {
        builder = builder.limit(limit);
    }
    if let Some(offset) = args.offset {
        builder = builder.offset(offset);
    }
    for source in &args.source {
        builder = builder.source((*source).into());
    }

    let photos = builder.send().await?;

    match ctx.output_format.serialize(&photos)? {
        Some(text) => println!("{text}"),
        None => print_photos(&photos),
    }

    Ok(())
}

fn print_photos(photos: &Paged<Photo>) {
    if photos.data.is_empty() {
        println!("{}", "No photos found.".dimmed());
        return;
    }

    let rows: Vec<PhotoRow> = photos
        .data
        .iter()
        .map(|p| {
            let image = p.images.largest();
            PhotoRow {
                id: p.id.clone(),
                caption: truncate(p.caption.as_deref().unwrap_or_default(), 40),
                size: image
                    .and_then(|i| Some(format!("{}x{}", i.width?, i.height?)))
                    .unwrap_or_default(),
                url: image.map(|i| i.url.clone()).unwrap_or_default(),
            }
        })
        .collect();

    println!("{}", Table::new(&rows).with(Style::rounded()));
}
