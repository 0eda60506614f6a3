//! Server configuration parsed from environment variables.
//!
//! `ServerConfig::from_env` is the production entry point; tests drive
//! `from_lookup` with a closure so they never touch the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_ASSETS_DIR: &str = "public";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("incomplete mail configuration: {missing} is required when {present} is set")]
    IncompleteMail { missing: &'static str, present: &'static str },
}

/// Resend delivery settings. Present only when all three variables are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendConfig {
    pub api_key: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// `None` selects the log mailer.
    pub mail: Option<ResendConfig>,
    /// Directory served for paths no route claims (images, favicon).
    pub site_assets_dir: PathBuf,
}

impl ServerConfig {
    /// Build the config from process environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `RESEND_API_KEY`, `CONTACT_FROM_EMAIL`, `CONTACT_TO_EMAIL`: all or none
    /// - `SITE_ASSETS_DIR`: default `public`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an unparsable port or a partial mail setup.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let mail = parse_mail(var("RESEND_API_KEY"), var("CONTACT_FROM_EMAIL"), var("CONTACT_TO_EMAIL"))?;

        let site_assets_dir = var("SITE_ASSETS_DIR").map_or_else(|| PathBuf::from(DEFAULT_SITE_ASSETS_DIR), PathBuf::from);

        Ok(Self { port, mail, site_assets_dir })
    }
}

fn parse_mail(
    api_key: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> Result<Option<ResendConfig>, ConfigError> {
    match (api_key, from, to) {
        (Some(api_key), Some(from), Some(to)) => Ok(Some(ResendConfig { api_key, from, to })),
        (None, None, None) => Ok(None),
        (api_key, from, to) => {
            let present = [
                ("RESEND_API_KEY", api_key.is_some()),
                ("CONTACT_FROM_EMAIL", from.is_some()),
                ("CONTACT_TO_EMAIL", to.is_some()),
            ];
            let name_where = |wanted: bool| {
                present
                    .iter()
                    .find(|(_, set)| *set == wanted)
                    .map_or("", |(name, _)| *name)
            };
            Err(ConfigError::IncompleteMail { missing: name_where(false), present: name_where(true) })
        }
    }
}
