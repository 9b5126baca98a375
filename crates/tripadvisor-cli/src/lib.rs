//! # tripadvisor-cli
//!
//! Command-line interface for the Tripadvisor Content API.
//!
//! ## Features
//!
//! - **Location search**: By name or around a coordinate
//! - **Details, reviews and photos** for a single location
//! - **Multiple output formats**: Pretty tables, JSON, YAML
//! - **Persistent settings** in a TOML config file

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
