//! Core types, shapes and errors for the Tripadvisor Content API client.
//!
//! This crate provides the foundational pieces used across the workspace:
//!
//! - **Types**: Strongly-typed locations, details, reviews and photos
//! - **Shapes**: Declarative descriptions of every endpoint's parameters and
//!   responses, checked by [`shape::validate`]
//! - **Errors**: The [`TripAdvisorError`] taxonomy shared by every layer
//!
//! # Example
//!
//! ```rust,ignore
//! use tripadvisor_core::{LocationDetails, Result};
//!
//! fn summarize(details: &LocationDetails) -> Result<()> {
//!     println!("{:?} rated {:?}", details.name, details.rating_value());
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/tripadvisor-core/0.3.0")]

mod error;
pub mod shape;
pub mod shapes;
pub mod types;

pub use error::{Direction, Result, TransportCause, TransportError, TripAdvisorError};
pub use types::*;
