//! Typed Rust client for the Tripadvisor Content API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tripadvisor::{Category, TripAdvisorClient};
//!
//! #[tokio::main]
//! async fn main() -> tripadvisor::Result<()> {
//!     let client = TripAdvisorClient::new("your-api-key")?;
//!
//!     // Find a location
//!     let found = client
//!         .locations()
//!         .search("Louvre")
//!         .category(Category::Attractions)
//!         .send()
//!         .await?;
//!
//!     // Get its details in another language
//!     if let Some(first) = found.data.first() {
//!         let details = client
//!             .locations()
//!             .details(&first.location_id)
//!             .language("fr")
//!             .send()
//!             .await?;
//!         println!("{:?}: {:?}", details.name, details.rating);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Lower-level access goes through [`TripAdvisorClient::execute`] with one of
//! the [`descriptor`] statics and a JSON parameter object.
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/tripadvisor/0.3.0")]

// Re-export core types
pub use tripadvisor_core::*;

// Re-export client
pub use tripadvisor_client::{
    api, descriptor, ConfigUpdate, Configuration, Method, OperationDescriptor, RequestOptions,
    Transport, TripAdvisorClient, TripAdvisorClientBuilder,
};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
pub use tokio_util::sync::CancellationToken;
