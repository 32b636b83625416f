//! Import settings and the configuration guard.
//!
//! Raw settings are modeled as optional JSON values so that an absent
//! variable, an explicit null, and a wrong-typed value are all
//! distinguishable before the loop starts. The guard is a pure function
//! over that struct; it performs no I/O and has no side effects.

use std::env;

use serde_json::Value;

use crate::error::ConfigError;

/// Environment variable holding the upstream endpoint.
pub const FETCH_URL_VAR: &str = "FETCH_URL";

/// Environment variable holding the enable flag.
pub const FETCH_FLAG_VAR: &str = "FETCH_FLAG";

/// Unvalidated fetch settings as supplied by the environment (or a test).
#[derive(Debug, Clone, Default)]
pub struct RawSettings {
    pub fetch_url: Option<Value>,
    pub fetch_flag: Option<Value>,
}

impl RawSettings {
    pub fn new(fetch_url: Option<Value>, fetch_flag: Option<Value>) -> Self {
        Self {
            fetch_url,
            fetch_flag,
        }
    }

    /// Read `FETCH_URL` and `FETCH_FLAG` from the process environment.
    ///
    /// `FETCH_FLAG` becomes a JSON boolean only for the literals `true`
    /// and `false` (case-insensitive); any other value stays a string so
    /// the guard reports it as a type error rather than guessing.
    pub fn from_env() -> Self {
        Self {
            fetch_url: env::var(FETCH_URL_VAR).ok().map(Value::String),
            fetch_flag: env::var(FETCH_FLAG_VAR).ok().map(|raw| {
                match raw.to_ascii_lowercase().as_str() {
                    "true" => Value::Bool(true),
                    "false" => Value::Bool(false),
                    _ => Value::String(raw),
                }
            }),
        }
    }
}

/// Validated settings handed to the import loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSettings {
    pub fetch_url: String,
    pub fetch_enabled: bool,
}

/// The configuration guard.
///
/// Checks run in a fixed, observable order: presence (null counts as
/// absent) for both settings first, then types for both settings.
pub fn validate(raw: &RawSettings) -> Result<ImportSettings, ConfigError> {
    let url = raw.fetch_url.as_ref().filter(|v| !v.is_null());
    let flag = raw.fetch_flag.as_ref().filter(|v| !v.is_null());

    let (url, flag) = match (url, flag) {
        (Some(url), Some(flag)) => (url, flag),
        _ => return Err(ConfigError::MissingSetting),
    };

    match (url.as_str(), flag.as_bool()) {
        (Some(url), Some(flag)) => Ok(ImportSettings {
            fetch_url: url.to_owned(),
            fetch_enabled: flag,
        }),
        _ => Err(ConfigError::WrongType),
    }
}
