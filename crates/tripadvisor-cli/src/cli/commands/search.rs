//! `tripcli search` - Find locations by name.

use anyhow::Result;

use super::{print_locations, Context};
use crate::cli::args::SearchArgs;

pub async fn execute(ctx: Context, args: SearchArgs) -> Result<()> {
    let client = ctx.client()?;

    let mut builder = client.locations().search(&args.query);

    if let Some(category) = args.filters.category {
        builder = builder.category(category.into());
    }
    if let Some(phone) = &args.filters.phone {
        builder = builder.phone(phone);
    }
    if let Some(address) = &args.filters.address {
        builder = builder.address(address);
    }
    if let Some(lat_long) = &args.lat_long {
        let (latitude, longitude) = parse_lat_long(lat_long)?;
        builder = builder.lat_long(latitude, longitude);
    }
    if let Some(radius) = args.filters.radius {
        builder = builder.radius(radius, args.filters.radius_unit.into());
    }

    let results = builder.send().await?;

    match ctx.output_format.serialize(&results)? {
        Some(text) => println!("{text}"),
        None => print_locations(&results, &format!("Results for \"{}\":", args.query)),
    }

    Ok(())
}

fn parse_lat_long(value: &str) -> Result<(f64, f64)> {
    let parsed = value.split_once(',').and_then(|(lat, long)| {
        Some((lat.trim().parse().ok()?, long.trim().parse().ok()?))
    });
    parsed.ok_or_else(|| anyhow::anyhow!("--lat-long must look like \"48.8584,2.2945\", got {value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lat_long() {
        assert_eq!(parse_lat_long("48.85, 2.35").unwrap(), (48.85, 2.35));
        assert_eq!(parse_lat_long("-33.9,18.4").unwrap(), (-33.9, 18.4));
        assert!(parse_lat_long("48.85").is_err());
        assert!(parse_lat_long("north,east").is_err());
    }
}
