use std::env;

use thiserror::Error;

use crate::presentation::Locale;

pub const DEFAULT_LOG_FILTER: &str = "info,lyricdraft_core=debug";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidQuota { var: &'static str, value: String },

    #[error("{var}: {source}")]
    InvalidLocale {
        var: &'static str,
        #[source]
        source: crate::presentation::UnknownLocale,
    },
}

/// Per-user creation limits; `None` means unlimited
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quotas {
    pub folders: Option<u64>,
    pub projects: Option<u64>,
    pub phrases: Option<u64>,
    pub tags: Option<u64>,
    pub genres: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset
    pub log_filter: String,
    pub locale: Locale,
    pub quotas: Quotas,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            locale: Locale::default(),
            quotas: Quotas::default(),
        }
    }
}

impl Config {
    /// Load configuration from `.env` and the process environment
    ///
    /// | Env Var                   | Default                       |
    /// |---------------------------|-------------------------------|
    /// | `LYRICDRAFT_LOG`          | `info,lyricdraft_core=debug`  |
    /// | `LYRICDRAFT_LOCALE`       | `ja`                          |
    /// | `LYRICDRAFT_MAX_FOLDERS`  | unlimited                     |
    /// | `LYRICDRAFT_MAX_PROJECTS` | unlimited                     |
    /// | `LYRICDRAFT_MAX_PHRASES`  | unlimited                     |
    /// | `LYRICDRAFT_MAX_TAGS`     | unlimited                     |
    /// | `LYRICDRAFT_MAX_GENRES`   | unlimited                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("LYRICDRAFT_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let locale = match lookup("LYRICDRAFT_LOCALE") {
            Some(raw) if !raw.trim().is_empty() => {
                raw.parse().map_err(|source| ConfigError::InvalidLocale {
                    var: "LYRICDRAFT_LOCALE",
                    source,
                })?
            }
            _ => Locale::default(),
        };

        let quota = |var: &'static str| -> Result<Option<u64>, ConfigError> {
            match lookup(var) {
                Some(raw) if !raw.trim().is_empty() => raw
                    .trim()
                    .parse()
                    .map(Some)
                    .map_err(|_| ConfigError::InvalidQuota { var, value: raw }),
                _ => Ok(None),
            }
        };

        let quotas = Quotas {
            folders: quota("LYRICDRAFT_MAX_FOLDERS")?,
            projects: quota("LYRICDRAFT_MAX_PROJECTS")?,
            phrases: quota("LYRICDRAFT_MAX_PHRASES")?,
            tags: quota("LYRICDRAFT_MAX_TAGS")?,
            genres: quota("LYRICDRAFT_MAX_GENRES")?,
        };

        Ok(Self {
            log_filter,
            locale,
            quotas,
        })
    }
}
