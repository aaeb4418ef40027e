//! Admin login state machine.
//!
//! `LoggedOut -> LoggedIn` on a successful login, back on logout. The
//! state lives in the key-value store (`admin_token` = `active` plus
//! `admin_user`) so it survives restarts; it never expires on its own.
//! Failed attempts are counted in memory and lock the login for a while
//! once the limit is reached.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{info, warn};

use super::auth::Authenticator;
use super::error::AdminError;
use crate::core::config::AdminConfig;
use crate::core::storage::{KeyValueStore, StorageError, keys};

const TOKEN_ACTIVE: &str = "active";

/// Whether an admin is logged in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AdminState {
    LoggedOut,
    LoggedIn { username: String },
}

#[derive(Debug, Default)]
struct Attempts {
    failed: u32,
    locked_until: Option<Instant>,
}

/// The admin session.
pub struct AdminSession {
    storage: Arc<dyn KeyValueStore>,
    authenticator: Arc<dyn Authenticator>,
    max_attempts: u32,
    lockout: Duration,
    attempts: Mutex<Attempts>,
}

impl AdminSession {
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        authenticator: Arc<dyn Authenticator>,
        config: &AdminConfig,
    ) -> Self {
        Self {
            storage,
            authenticator,
            max_attempts: config.max_attempts.max(1),
            lockout: Duration::from_secs(config.lockout_minutes * 60),
            attempts: Mutex::new(Attempts::default()),
        }
    }

    /// Current state as persisted.
    ///
    /// A sentinel without a stored username counts as logged out.
    pub fn state(&self) -> Result<AdminState, AdminError> {
        let token = self.storage.get(keys::ADMIN_TOKEN)?;
        let user = self.storage.get(keys::ADMIN_USER)?;

        Ok(match (token.as_deref(), user) {
            (Some(TOKEN_ACTIVE), Some(username)) => AdminState::LoggedIn { username },
            _ => AdminState::LoggedOut,
        })
    }

    /// The logged-in username, or `NotAuthenticated`.
    pub fn require_login(&self) -> Result<String, AdminError> {
        match self.state()? {
            AdminState::LoggedIn { username } => Ok(username),
            AdminState::LoggedOut => Err(AdminError::NotAuthenticated),
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<AdminState, AdminError> {
        self.login_at(username, password, Instant::now()).await
    }

    /// Attempt a login as of `now`.
    pub async fn login_at(
        &self,
        username: &str,
        password: &str,
        now: Instant,
    ) -> Result<AdminState, AdminError> {
        self.check_lockout(now)?;

        if !self.authenticator.authenticate(username, password).await {
            return Err(self.record_failure(now)?);
        }

        {
            let mut attempts = self.attempts.lock().map_err(|_| StorageError::Poisoned)?;
            *attempts = Attempts::default();
        }

        self.storage.set(keys::ADMIN_TOKEN, TOKEN_ACTIVE)?;
        self.storage.set(keys::ADMIN_USER, username)?;
        info!("Admin '{}' logged in", username);

        Ok(AdminState::LoggedIn {
            username: username.to_string(),
        })
    }

    /// Clear the persisted session.
    pub fn logout(&self) -> Result<AdminState, AdminError> {
        self.storage.remove(keys::ADMIN_TOKEN)?;
        self.storage.remove(keys::ADMIN_USER)?;
        info!("Admin logged out");
        Ok(AdminState::LoggedOut)
    }

    /// Failed attempts left before the login locks.
    pub fn remaining_attempts(&self) -> u32 {
        self.attempts
            .lock()
            .map(|a| self.max_attempts.saturating_sub(a.failed))
            .unwrap_or(0)
    }

    fn check_lockout(&self, now: Instant) -> Result<(), AdminError> {
        let mut attempts = self.attempts.lock().map_err(|_| StorageError::Poisoned)?;

        if let Some(until) = attempts.locked_until {
            if now < until {
                return Err(self.locked_error());
            }
            // Lockout elapsed; start counting again.
            *attempts = Attempts::default();
        }
        Ok(())
    }

    fn record_failure(&self, now: Instant) -> Result<AdminError, AdminError> {
        let mut attempts = self.attempts.lock().map_err(|_| StorageError::Poisoned)?;
        attempts.failed += 1;
        let remaining = self.max_attempts.saturating_sub(attempts.failed);

        if remaining == 0 {
            attempts.locked_until = Some(now + self.lockout);
            warn!("Admin login locked after {} failed attempts", attempts.failed);
        } else {
            warn!("Failed admin login, {} attempts remaining", remaining);
        }

        Ok(AdminError::InvalidCredentials { remaining })
    }

    fn locked_error(&self) -> AdminError {
        AdminError::Locked {
            minutes: self.lockout.as_secs() / 60,
        }
    }
}
