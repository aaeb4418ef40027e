//! Tools domain module.
//!
//! Every widget on the site is exposed as an MCP tool. Tools are plain
//! input-to-output transformations; the few that need shared state (the
//! stopwatch, the notepad, outbound HTTP) get it from [`ToolContext`].
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `widget.rs` - Catalog id to widget lookup table
//! - `context.rs` - Shared state handed to tools
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in the matching `definitions/` group
//! 2. Define params, execute(), to_tool() and create_route()
//! 3. Export in `definitions/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//! 5. Register in `registry.rs` for HTTP support
//! 6. Bind it to catalog ids in `widget.rs`

pub mod context;
pub mod definitions;
mod error;
mod registry;
pub mod router;
mod widget;

pub use context::ToolContext;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
pub use widget::Widget;
