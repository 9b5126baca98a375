//! Command implementations.

pub mod config;
pub mod details;
pub mod nearby;
pub mod photos;
pub mod reviews;
pub mod search;

use colored::Colorize;
use std::path::PathBuf;
use tripadvisor::{Location, Paged, TripAdvisorClient};

use crate::output::{truncate, OutputFormat};

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Content API key
    pub api_key: Option<String>,

    /// API base URL override
    pub base_url: Option<String>,

    /// Response language
    pub language: Option<String>,

    /// Default currency
    pub currency: Option<String>,

    /// Output format
    pub output_format: OutputFormat,

    /// Config file in use
    pub config_path: PathBuf,
}

impl Context {
    /// Get the API key, returning an error if not set.
    pub fn require_api_key(&self) -> anyhow::Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "API key required.\n\n\
                 Set it with one of:\n  \
                 1. --api-key <KEY>\n  \
                 2. TRIPADVISOR_API_KEY environment variable\n  \
                 3. tripcli config set api_key <KEY>\n\n\
                 Get your key at: https://www.tripadvisor.com/developers"
            )
        })
    }

    /// Create a client from the resolved settings.
    pub fn client(&self) -> anyhow::Result<TripAdvisorClient> {
        let mut builder = TripAdvisorClient::builder().api_key(self.require_api_key()?);
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url);
        }
        if let Some(language) = &self.language {
            builder = builder.language(language);
        }
        if let Some(currency) = &self.currency {
            builder = builder.currency(currency);
        }
        Ok(builder.build()?)
    }
}

#[derive(tabled::Tabled)]
struct LocationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Distance")]
    distance: String,
}

/// Table of search results, shared by `search` and `nearby`
pub(crate) fn print_locations(results: &Paged<Location>, heading: &str) {
    use tabled::{settings::Style, Table};

    println!(
        "{} {}",
        heading.bold(),
        results.data.len().to_string().cyan()
    );
    println!();

    if results.data.is_empty() {
        println!("{}", "No locations found.".dimmed());
        return;
    }

    let rows: Vec<LocationRow> = results
        .data
        .iter()
        .map(|l| LocationRow {
            id: l.location_id.clone(),
            name: truncate(&l.name, 40),
            address: truncate(
                &l.address_obj
                    .as_ref()
                    .map(tripadvisor::Address::one_line)
                    .unwrap_or_default(),
                50,
            ),
            distance: l
                .distance_value()
                .map(|d| format!("{d:.2}"))
                .unwrap_or_default(),
        })
        .collect();

    println!("{}", Table::new(&rows).with(Style::rounded()));
    println!();
    println!(
        "{}",
        "Tip: Use `tripcli details <ID>` for more about a location".dimmed()
    );
}
