//! Core module containing shared infrastructure components.
//!
//! Configuration, error handling, key-value storage, the server itself and
//! the transport layer live here; the toolbox features live in `domains`.

pub mod config;
pub mod error;
pub mod server;
pub mod storage;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::ToollyServer;
pub use transport::{TransportConfig, TransportService};
