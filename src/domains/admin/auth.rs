//! Authentication seam.

use async_trait::async_trait;
use tracing::debug;

use crate::core::config::AdminConfig;

/// Verifies admin credentials against an identity provider.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Whether `username` and `password` identify an admin.
    async fn authenticate(&self, username: &str, password: &str) -> bool;
}

/// Checks a single account taken from configuration.
///
/// The username comparison ignores ASCII case. Without a configured
/// account every attempt fails.
#[derive(Clone)]
pub struct ConfiguredAuthenticator {
    account: Option<(String, String)>,
}

impl ConfiguredAuthenticator {
    pub fn new(config: &AdminConfig) -> Self {
        let account = match (&config.username, &config.password) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => {
                Some((user.clone(), pass.clone()))
            }
            _ => None,
        };
        Self { account }
    }

    /// Whether an account is configured at all.
    pub fn is_enabled(&self) -> bool {
        self.account.is_some()
    }
}

#[async_trait]
impl Authenticator for ConfiguredAuthenticator {
    async fn authenticate(&self, username: &str, password: &str) -> bool {
        let Some((user, pass)) = &self.account else {
            debug!("Admin login attempted with no configured account");
            return false;
        };
        user.eq_ignore_ascii_case(username.trim()) && pass == password
    }
}

impl std::fmt::Debug for ConfiguredAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfiguredAuthenticator")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(user: Option<&str>, pass: Option<&str>) -> AdminConfig {
        AdminConfig {
            username: user.map(String::from),
            password: pass.map(String::from),
            ..AdminConfig::default()
        }
    }

    #[tokio::test]
    async fn test_username_is_case_insensitive() {
        let auth = ConfiguredAuthenticator::new(&config(Some("Operator"), Some("s3cret")));
        assert!(auth.authenticate("operator", "s3cret").await);
        assert!(auth.authenticate("OPERATOR", "s3cret").await);
        assert!(!auth.authenticate("operator", "S3CRET").await);
        assert!(!auth.authenticate("someone", "s3cret").await);
    }

    #[tokio::test]
    async fn test_unconfigured_rejects_everything() {
        let auth = ConfiguredAuthenticator::new(&config(None, None));
        assert!(!auth.is_enabled());
        assert!(!auth.authenticate("", "").await);

        let half = ConfiguredAuthenticator::new(&config(Some("admin"), None));
        assert!(!half.authenticate("admin", "").await);
    }

    #[test]
    fn test_debug_hides_password() {
        let auth = ConfiguredAuthenticator::new(&config(Some("admin"), Some("hunter2")));
        let debug = format!("{:?}", auth);
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("admin\""));
    }
}
