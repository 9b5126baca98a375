//! Command-line argument definitions using clap.

use crate::output::OutputFormat;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tripadvisor::{Category, PhotoSource, RadiusUnit};

/// Tripadvisor Content API from the command line
///
/// Search for hotels, restaurants and attractions, then look up their
/// details, recent reviews and photos.
///
/// Get an API key at: https://www.tripadvisor.com/developers
#[derive(Parser, Debug)]
#[command(name = "tripcli")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Content API key
    #[arg(short = 'k', long, env = "TRIPADVISOR_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// API base URL
    #[arg(long, env = "TRIPADVISOR_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Response language (e.g. en, fr, es)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Config file to use instead of the default location
    #[arg(long, env = "TRIPCLI_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search locations by name
    Search(SearchArgs),

    /// Search locations around a coordinate
    Nearby(NearbyArgs),

    /// Full details of one location
    Details(DetailsArgs),

    /// Recent reviews of one location
    Reviews(ReviewsArgs),

    /// Recent photos of one location
    Photos(PhotosArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Shared value types
// ============================================================================

/// Location category
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Hotels,
    Attractions,
    Restaurants,
    Geos,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Hotels => Self::Hotels,
            CategoryArg::Attractions => Self::Attractions,
            CategoryArg::Restaurants => Self::Restaurants,
            CategoryArg::Geos => Self::Geos,
        }
    }
}

/// Unit for `--radius`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RadiusUnitArg {
    #[default]
    Km,
    Mi,
    M,
}

impl From<RadiusUnitArg> for RadiusUnit {
    fn from(arg: RadiusUnitArg) -> Self {
        match arg {
            RadiusUnitArg::Km => Self::Km,
            RadiusUnitArg::Mi => Self::Mi,
            RadiusUnitArg::M => Self::M,
        }
    }
}

/// Who took a photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PhotoSourceArg {
    Expert,
    Management,
    Traveler,
}

impl From<PhotoSourceArg> for PhotoSource {
    fn from(arg: PhotoSourceArg) -> Self {
        match arg {
            PhotoSourceArg::Expert => Self::Expert,
            PhotoSourceArg::Management => Self::Management,
            PhotoSourceArg::Traveler => Self::Traveler,
        }
    }
}

/// Filters shared by both search commands
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Restrict results to one category
    #[arg(short, long, value_enum)]
    pub category: Option<CategoryArg>,

    /// Phone number to match
    #[arg(long)]
    pub phone: Option<String>,

    /// Address to match
    #[arg(long)]
    pub address: Option<String>,

    /// Search radius
    #[arg(long)]
    pub radius: Option<f64>,

    /// Unit for --radius
    #[arg(long, value_enum, default_value_t = RadiusUnitArg::Km)]
    pub radius_unit: RadiusUnitArg,
}

// ============================================================================
// Search commands
// ============================================================================

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to search for (e.g. "Eiffel Tower")
    pub query: String,

    /// Bias results towards a "lat,long" coordinate
    #[arg(long, allow_hyphen_values = true)]
    pub lat_long: Option<String>,

    #[command(flatten)]
    pub filters: FilterArgs,
}

#[derive(Args, Debug)]
pub struct NearbyArgs {
    /// Latitude in degrees
    #[arg(allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude in degrees
    #[arg(allow_negative_numbers = true)]
    pub longitude: f64,

    #[command(flatten)]
    pub filters: FilterArgs,
}

// ============================================================================
// Location commands
// ============================================================================

#[derive(Args, Debug)]
pub struct DetailsArgs {
    /// Tripadvisor location id
    pub location_id: String,

    /// ISO 4217 currency for prices
    #[arg(long)]
    pub currency: Option<String>,
}

#[derive(Args, Debug)]
pub struct ReviewsArgs {
    /// Tripadvisor location id
    pub location_id: String,

    /// Number of reviews to return
    #[arg(long)]
    pub limit: Option<u32>,

    /// Index of the first review
    #[arg(long)]
    pub offset: Option<u32>,
}

#[derive(Args, Debug)]
pub struct PhotosArgs {
    /// Tripadvisor location id
    pub location_id: String,

    /// Number of photos to return
    #[arg(long)]
    pub limit: Option<u32>,

    /// Index of the first photo
    #[arg(long)]
    pub offset: Option<u32>,

    /// Only photos from these sources
    #[arg(long, value_enum, value_delimiter = ',')]
    pub source: Vec<PhotoSourceArg>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (e.g., api_key, language, output_format)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
