//! Tool catalog domain module.
//!
//! The catalog is the registry of every tool the site offers: a static list
//! of metadata records merged at startup with the widget that implements
//! each one. Records without a widget stay listed and resolve to a
//! "coming soon" placeholder.
//!
//! ## Architecture
//!
//! - `model.rs` - Record, category and status types
//! - `data.rs` - The built-in record list
//! - `registry.rs` - The merged [`Catalog`] with lookup and search
//! - `error.rs` - Catalog-specific error types

mod data;
mod error;
mod model;
mod registry;

pub use data::builtin_records;
pub use error::CatalogError;
pub use model::{CategoryFilter, ToolCategory, ToolRecord, ToolStatus};
pub use registry::{Catalog, CatalogEntry, WidgetBinding};
