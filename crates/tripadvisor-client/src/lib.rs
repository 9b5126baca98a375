//! HTTP client for the Tripadvisor Content API.
//!
//! This crate provides the main [`TripAdvisorClient`]. Every call, whether
//! made through [`TripAdvisorClient::locations`] or directly through
//! [`TripAdvisorClient::execute`], runs the same pipeline: parameter
//! validation, URL encoding, a retried transport exchange, API-error
//! classification and response validation.

#![doc(html_root_url = "https://docs.rs/tripadvisor-client/0.3.0")]

pub mod api;
pub mod classify;
mod client;
mod config;
pub mod descriptor;
pub mod encoder;
pub mod retry;
pub mod transport;

pub use client::{RequestOptions, TripAdvisorClient, TripAdvisorClientBuilder};
pub use config::*;
pub use descriptor::{Method, OperationDescriptor};
pub use transport::{HttpTransport, RawResponse, Transport, TransportRequest};
pub use tripadvisor_core::{Result, TripAdvisorError};
