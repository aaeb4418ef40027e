//! Toolly.online utility toolbox.
//!
//! Every tool of the catalog is exposed as an MCP tool, and the site itself
//! (tool grid, tool pages, favorites, theme and the admin dashboard) is served
//! over HTTP next to a JSON-RPC endpoint.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, storage, the server and its transports
//! - **domains**: business logic organized by bounded contexts
//!   - **catalog**: tool metadata and slug/id lookup
//!   - **tools**: the widgets, one MCP tool each
//!   - **ai**: generative AI client used by the AI widgets
//!   - **preferences**: favorites, theme and notepad persistence
//!   - **admin**: login session and dashboard
//!   - **shell**: routing and page composition
//!   - **resources**: MCP resources over the catalog and preferences
//!
//! # Example
//!
//! ```rust,no_run
//! use toolly::{Config, ToollyServer};
//! use toolly::core::TransportService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = ToollyServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, Result, ToollyServer};
