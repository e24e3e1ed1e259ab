//! Environment-driven configuration for the server binary.
//!
//! Every variable is optional and falls back to a default. Empty values are
//! treated as unset. Values that are present but unparsable are reported as
//! a [`ConfigurationError`] rather than silently replaced.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::server::ServerConfig;

// =============================================================================
// Defaults
// =============================================================================

const DEFAULT_HOST: &str = "0.0.0.0";

const DEFAULT_PORT: u16 = 5000;

const DEFAULT_ITEM_COUNT: u64 = 1_000_000;

const DEFAULT_ITEM_SEED: u64 = 42;

const DEFAULT_PAGE_SIZE: u64 = 20;

const DEFAULT_MAX_PAGE_SIZE: u64 = 1000;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Invalid value for {name}: '{value}' ({message})")]
    InvalidValue {
        name: &'static str,
        value: String,
        message: String,
    },

    #[error("{name} must be greater than zero")]
    MustBePositive { name: &'static str },

    #[error("DEFAULT_PAGE_SIZE ({default}) must not exceed MAX_PAGE_SIZE ({max})")]
    PageSizeAboveMaximum { default: u64, max: u64 },
}

// =============================================================================
// Sections
// =============================================================================

/// Shape of the generated item collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetConfig {
    pub item_count: u64,

    /// Seeds the `random` field so datasets are reproducible.
    pub seed: u64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            item_count: DEFAULT_ITEM_COUNT,
            seed: DEFAULT_ITEM_SEED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingConfig {
    /// Page size used when a request omits `limit`.
    pub default_page_size: u64,

    /// Larger requested limits are clamped to this.
    pub max_page_size: u64,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

// =============================================================================
// AppConfig
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,

    pub dataset: DatasetConfig,

    pub paging: PagingConfig,

    /// Directory holding a built client bundle, served for non-API paths.
    pub static_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`, `PORT`: listen address (default `0.0.0.0:5000`)
    /// - `ITEM_COUNT`: number of generated items (default 1 000 000)
    /// - `ITEM_SEED`: seed for the `random` field (default 42)
    /// - `DEFAULT_PAGE_SIZE`, `MAX_PAGE_SIZE`: paging limits (default 20 and 1000)
    /// - `STATIC_DIR`: optional client bundle directory
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Self::from_env`] with an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but invalid.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigurationError> {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let host = read("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or("PORT", read("PORT"), DEFAULT_PORT)?;

        let dataset = DatasetConfig {
            item_count: parse_or("ITEM_COUNT", read("ITEM_COUNT"), DEFAULT_ITEM_COUNT)?,
            seed: parse_or("ITEM_SEED", read("ITEM_SEED"), DEFAULT_ITEM_SEED)?,
        };

        let paging = PagingConfig {
            default_page_size: parse_or(
                "DEFAULT_PAGE_SIZE",
                read("DEFAULT_PAGE_SIZE"),
                DEFAULT_PAGE_SIZE,
            )?,
            max_page_size: parse_or(
                "MAX_PAGE_SIZE",
                read("MAX_PAGE_SIZE"),
                DEFAULT_MAX_PAGE_SIZE,
            )?,
        };

        let config = Self {
            server: ServerConfig::new(host, port),
            dataset,
            paging,
            static_dir: read("STATIC_DIR").map(PathBuf::from),
        };

        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns an error if a count or page size is zero, or the default page
    /// size exceeds the maximum.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.dataset.item_count == 0 {
            return Err(ConfigurationError::MustBePositive { name: "ITEM_COUNT" });
        }
        if self.paging.default_page_size == 0 {
            return Err(ConfigurationError::MustBePositive {
                name: "DEFAULT_PAGE_SIZE",
            });
        }
        if self.paging.max_page_size == 0 {
            return Err(ConfigurationError::MustBePositive {
                name: "MAX_PAGE_SIZE",
            });
        }
        if self.paging.default_page_size > self.paging.max_page_size {
            return Err(ConfigurationError::PageSizeAboveMaximum {
                default: self.paging.default_page_size,
                max: self.paging.max_page_size,
            });
        }
        Ok(())
    }
}

fn parse_or<T>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigurationError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|error: T::Err| ConfigurationError::InvalidValue {
                name,
                message: error.to_string(),
                value,
            }),
    }
}

// =============================================================================
// Tests
// =============================================================================
