//! # clubadmin-client
//!
//! REST access for the clubadmin entity editors.
//!
//! This crate provides:
//! - Client configuration from TOML files and the environment
//! - A shared reqwest client handing out typed gateways
//! - `HttpGateway`, the REST implementation of `EntityGateway`
//! - `MockGateway`, an in-memory implementation that records calls

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod mock;

pub use client::ClubAdminClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::HttpGateway;
pub use mock::{GatewayCall, GatewayOp, MockGateway};
