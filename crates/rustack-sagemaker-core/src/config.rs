//! SageMaker client configuration.
//!
//! Provides [`SageMakerConfig`], which controls how requests are checked and
//! completed before they are handed to a runtime. Values are loaded from
//! environment variables, matching the conventions of the other services.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::PreflightError;

/// How client-side constraint checks are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Skip validation.
    Off,
    /// Log each violation and send the request anyway.
    #[default]
    Warn,
    /// Refuse requests with violations.
    Strict,
}

impl ValidationMode {
    /// Returns the configuration string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationMode {
    type Err = PreflightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            "warn" => Ok(Self::Warn),
            "strict" => Ok(Self::Strict),
            other => Err(PreflightError::Config(format!(
                "invalid validation mode {other:?}, expected off, warn or strict"
            ))),
        }
    }
}

/// SageMaker client configuration.
///
/// # Examples
///
/// ```
/// use rustack_sagemaker_core::config::{SageMakerConfig, ValidationMode};
///
/// let config = SageMakerConfig::default();
/// assert_eq!(config.validation_mode, ValidationMode::Warn);
/// assert!(config.fill_idempotency_tokens);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct SageMakerConfig {
    /// How request constraints are enforced.
    #[builder(default)]
    pub validation_mode: ValidationMode,

    /// Whether a missing idempotency token is filled with a fresh UUID.
    #[builder(default = true)]
    pub fill_idempotency_tokens: bool,

    /// Region requests are addressed to and resource ARNs are built in.
    #[builder(default = String::from("us-east-1"))]
    pub default_region: String,

    /// Tracing filter (e.g. `"info"`, `"debug"`) used when `RUST_LOG` is unset.
    #[builder(default = String::from("info"))]
    pub log_level: String,
}

impl Default for SageMakerConfig {
    fn default() -> Self {
        Self {
            validation_mode: ValidationMode::Warn,
            fill_idempotency_tokens: true,
            default_region: String::from("us-east-1"),
            log_level: String::from("info"),
        }
    }
}

impl SageMakerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `SAGEMAKER_VALIDATION_MODE` | `warn` |
    /// | `SAGEMAKER_FILL_IDEMPOTENCY_TOKENS` | `true` |
    /// | `DEFAULT_REGION` | `us-east-1` |
    /// | `LOG_LEVEL` | `info` |
    ///
    /// An unrecognised validation mode is an error rather than a silent
    /// fallback.
    pub fn from_env() -> Result<Self, PreflightError> {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("SAGEMAKER_VALIDATION_MODE") {
            config.validation_mode = v.parse()?;
        }
        if let Ok(v) = std::env::var("SAGEMAKER_FILL_IDEMPOTENCY_TOKENS") {
            config.fill_idempotency_tokens = parse_bool(&v);
        }
        if let Ok(v) = std::env::var("DEFAULT_REGION") {
            config.default_region = v;
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        Ok(config)
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
