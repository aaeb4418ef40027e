//! Admin domain module.
//!
//! A small management area behind a login. Authentication is delegated to
//! an [`Authenticator`]; the shipped one checks a single configured
//! account. The dashboard works on an in-memory copy of the catalog and
//! nothing it changes is persisted.
//!
//! ## Architecture
//!
//! - `auth.rs` - The authenticator seam and configured implementation
//! - `session.rs` - Login state machine with attempt lockout
//! - `dashboard.rs` - Tabs, status toggle and tool editor
//! - `error.rs` - Admin-specific error types

mod auth;
mod dashboard;
mod error;
mod session;

pub use auth::{Authenticator, ConfiguredAuthenticator};
pub use dashboard::{AdminDashboard, AdminTab, DashboardView, ToolEdit};
pub use error::AdminError;
pub use session::{AdminSession, AdminState};
