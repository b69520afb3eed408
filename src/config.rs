//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use thiserror::Error;
use url::Url;

use crate::api::{CommonsClient, DEFAULT_API_BASE, DEFAULT_PAGE_SIZE, HttpError};

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const MAX_PAGE_SIZE: u32 = 500;

/// Settings shared by the picker and the `search` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Base URL of the Flickr Commons search proxy
    #[arg(long, env = "COMMONS_PICKER_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    pub api_base: String,

    /// Results fetched per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, global = true)]
    pub page_size: u32,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,

    /// Host request, as inline JSON or a path to a JSON file
    #[arg(long, env = "COMMONS_PICKER_REQUEST", global = true)]
    pub request: Option<String>,

    /// Where to write the log (default: <cache dir>/commons-picker/picker.log)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Default for ConfigArgs {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            request: None,
            log_file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Page size must be between 1 and {MAX_PAGE_SIZE}, got {0}")]
    PageSize(u32),
    #[error("Timeout must be at least one second")]
    Timeout,
    #[error("Invalid API base URL {url:?}: {reason}")]
    ApiBase { url: String, reason: String },
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    pub api_base: Url,
    pub page_size: u32,
    pub timeout: Duration,
    pub request: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl PickerConfig {
    pub fn from_args(args: &ConfigArgs) -> Result<Self, ConfigError> {
        if args.page_size == 0 || args.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::PageSize(args.page_size));
        }
        if args.timeout_secs == 0 {
            return Err(ConfigError::Timeout);
        }

        let api_base = Url::parse(args.api_base.trim()).map_err(|err| ConfigError::ApiBase {
            url: args.api_base.clone(),
            reason: err.to_string(),
        })?;
        if !matches!(api_base.scheme(), "http" | "https") {
            return Err(ConfigError::ApiBase {
                url: args.api_base.clone(),
                reason: format!("unsupported scheme {}", api_base.scheme()),
            });
        }

        Ok(Self {
            api_base,
            page_size: args.page_size,
            timeout: Duration::from_secs(args.timeout_secs),
            request: args.request.clone().filter(|raw| !raw.trim().is_empty()),
            log_file: args.log_file.clone(),
        })
    }

    pub fn client(&self) -> Result<CommonsClient, HttpError> {
        CommonsClient::new(self.api_base.clone(), self.page_size, self.timeout)
    }
}
