//! # vts-cli
//!
//! Command-line front end for the VTS dashboard.
//!
//! This crate wires the library crates to a `vts` binary:
//! - `teams`: clean an employee CSV, filter by skills and form teams
//! - `clean`: print the cleaned employee table
//! - `analyze`: workforce and performance summaries
//! - `tasks`: assign, update, remove and review team tasks
//! - `config`: inspect and create the TOML configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;
pub mod render;

pub use config::VtsConfig;
pub use error::{Error, Result};
