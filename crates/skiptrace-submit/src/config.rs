//! Actor credentials and where they come from.
//!
//! Secrets live in a TOML file, by default in the platform config directory:
//! - Linux: `~/.config/skiptrace/secrets.toml`
//! - macOS: `~/Library/Application Support/com.skiptrace.skiptrace/secrets.toml`
//! - Windows: `%APPDATA%\skiptrace\skiptrace\config\secrets.toml`
//!
//! ```toml
//! [apify]
//! token = "apify_api_..."
//! actor_id = "username~actor-name"
//! # api_base = "https://api.apify.com"
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, SubmitError};

/// Default service host.
pub const DEFAULT_API_BASE: &str = "https://api.apify.com";

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "skiptrace";
const APP_NAME: &str = "skiptrace";
const SECRETS_FILENAME: &str = "secrets.toml";

/// Everything needed to start an actor run.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ActorConfig {
    pub token: String,
    pub actor_id: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl ActorConfig {
    pub fn new(token: impl Into<String>, actor_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            actor_id: actor_id.into(),
            api_base: default_api_base(),
        }
    }

    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Checks that no value is blank.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Config`] naming the first blank value.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("token", &self.token),
            ("actor_id", &self.actor_id),
            ("api_base", &self.api_base),
        ] {
            if value.trim().is_empty() {
                return Err(SubmitError::Config(format!("apify.{name} is empty")));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ActorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActorConfig")
            .field("token", &"[REDACTED]")
            .field("actor_id", &self.actor_id)
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// Source of actor credentials, read once per submission.
pub trait CredentialProvider {
    /// # Errors
    ///
    /// Returns an error when credentials are unavailable or incomplete.
    fn credentials(&self) -> Result<ActorConfig>;
}

impl CredentialProvider for ActorConfig {
    fn credentials(&self) -> Result<ActorConfig> {
        self.validate()?;
        Ok(self.clone())
    }
}

/// Credentials stored in a TOML secrets file under an `[apify]` table.
#[derive(Debug, Clone)]
pub struct SecretsFile {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct SecretsDocument {
    apify: Option<ActorConfig>,
}

impl SecretsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Secrets file in the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Config`] if no home directory can be determined.
    pub fn from_default_location() -> Result<Self> {
        default_secrets_path().map(Self::new).ok_or_else(|| {
            SubmitError::Config("could not determine the configuration directory".to_string())
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, content: &str) -> Result<ActorConfig> {
        let document: SecretsDocument =
            toml::from_str(content).map_err(|source| SubmitError::SecretsParse {
                path: self.path.clone(),
                source,
            })?;
        let config = document.apify.ok_or_else(|| {
            SubmitError::Config(format!("no [apify] table in {}", self.path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl CredentialProvider for SecretsFile {
    fn credentials(&self) -> Result<ActorConfig> {
        let content = fs::read_to_string(&self.path).map_err(|source| SubmitError::SecretsRead {
            path: self.path.clone(),
            source,
        })?;
        let config = self.parse(&content)?;
        debug!(path = %self.path.display(), actor_id = %config.actor_id, "loaded actor credentials");
        Ok(config)
    }
}

/// Path of the secrets file in the platform config directory.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn default_secrets_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(SECRETS_FILENAME))
}
