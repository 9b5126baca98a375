//! `tripcli nearby` - Find locations around a coordinate.

use anyhow::Result;

use super::{print_locations, Context};
use crate::cli::args::NearbyArgs;

pub async fn execute(ctx: Context, args: NearbyArgs) -> Result<()> {
    anyhow::ensure!(
        (-90.0..=90.0).contains(&args.latitude) && (-180.0..=180.0).contains(&args.longitude),
        "coordinate out of range: {},{}",
        args.latitude,
        args.longitude
    );

    let client = ctx.client()?;

    let mut builder = client.locations().nearby(args.latitude, args.longitude);

    if let Some(category) = args.filters.category {
        builder = builder.category(category.into());
    }
    if let Some(phone) = &args.filters.phone {
        builder = builder.phone(phone);
    }
    if let Some(address) = &args.filters.address {
        builder = builder.address(address);
    }
    if let Some(radius) = args.filters.radius {
        builder = builder.radius(radius, args.filters.radius_unit.into());
    }

    let results = builder.send().await?;

    match ctx.output_format.serialize(&results)? {
        Some(text) => println!("{text}"),
        None => print_locations(
            &results,
            &format!("Near {},{}:", args.latitude, args.longitude),
        ),
    }

    Ok(())
}
