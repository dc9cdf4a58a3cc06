//! SageMaker error types.
//!
//! Two families live here. [`ModelError`] is raised by this crate while
//! building, parsing or validating shapes. [`SageMakerError`] models the
//! faults the service itself reports: awsJson1_1 responses carry a `__type`
//! field naming the error, either short (`ResourceNotFound`) or qualified
//! (`com.amazonaws.sagemaker#ResourceNotFound`).

use std::fmt;

use crate::validate::ValidationErrors;

/// Errors raised while constructing or checking shapes on the client.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A map entry was added under a key that already has a value.
    #[error("Duplicated keys ({key}) are provided.")]
    DuplicateKey {
        /// The repeated key.
        key: String,
    },

    /// A raw string is not a member of the enumeration.
    #[error("unknown {enum_name} value: {value}")]
    UnknownEnumValue {
        /// Name of the enumeration type.
        enum_name: &'static str,
        /// The rejected input.
        value: String,
    },

    /// An ARN could not be parsed.
    #[error("invalid ARN {arn}: {reason}")]
    InvalidArn {
        /// The rejected input.
        arn: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// One or more field constraints were violated.
    #[error("{0}")]
    Validation(ValidationErrors),
}

const ERROR_NAMESPACE: &str = "com.amazonaws.sagemaker";

/// Well-known SageMaker error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum SageMakerErrorCode {
    /// Resource being accessed is in use.
    ResourceInUse,
    /// A service quota would be exceeded.
    ResourceLimitExceeded,
    /// Resource being accessed is not found.
    ResourceNotFound,
    /// The request conflicts with the current state of the resource.
    ConflictException,
    /// The input fails to satisfy the service constraints.
    #[default]
    ValidationException,
    /// Request was denied due to throttling.
    ThrottlingException,
    /// The caller lacks permission.
    AccessDeniedException,
    /// Internal service failure.
    InternalFailure,
    /// The service is temporarily unavailable.
    ServiceUnavailable,
}

impl SageMakerErrorCode {
    /// Every modelled code.
    pub const ALL: &'static [Self] = &[
        Self::ResourceInUse,
        Self::ResourceLimitExceeded,
        Self::ResourceNotFound,
        Self::ConflictException,
        Self::ValidationException,
        Self::ThrottlingException,
        Self::AccessDeniedException,
        Self::InternalFailure,
        Self::ServiceUnavailable,
    ];

    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResourceInUse => "ResourceInUse",
            Self::ResourceLimitExceeded => "ResourceLimitExceeded",
            Self::ResourceNotFound => "ResourceNotFound",
            Self::ConflictException => "ConflictException",
            Self::ValidationException => "ValidationException",
            Self::ThrottlingException => "ThrottlingException",
            Self::AccessDeniedException => "AccessDeniedException",
            Self::InternalFailure => "InternalFailure",
            Self::ServiceUnavailable => "ServiceUnavailable",
        }
    }

    /// Returns the fully-qualified error type string for the JSON `__type` field.
    #[must_use]
    pub fn error_type(&self) -> String {
        format!("{ERROR_NAMESPACE}#{}", self.as_str())
    }

    /// Resolves a `__type` value, short or namespace-qualified.
    ///
    /// Anything after a `:` is ignored, since some endpoints append a
    /// documentation URL to the type.
    #[must_use]
    pub fn from_error_type(error_type: &str) -> Option<Self> {
        let name = error_type.split(':').next().unwrap_or(error_type);
        let name = name.rsplit('#').next().unwrap_or(name);
        Self::ALL.iter().copied().find(|code| code.as_str() == name)
    }

    /// Whether a runtime may retry a request that failed with this code.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ThrottlingException | Self::InternalFailure | Self::ServiceUnavailable
        )
    }
}

impl fmt::Display for SageMakerErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A SageMaker error response.
#[derive(Debug)]
pub struct SageMakerError {
    /// The error code.
    pub code: SageMakerErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status the response carried; `None` for errors raised locally.
    pub status_code: Option<http::StatusCode>,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for SageMakerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SageMakerError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for SageMakerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl SageMakerError {
    /// Create a new `SageMakerError` from an error code.
    #[must_use]
    pub fn new(code: SageMakerErrorCode) -> Self {
        Self {
            status_code: None,
            message: code.as_str().to_owned(),
            code,
            source: None,
        }
    }

    /// Create a new `SageMakerError` with a custom message.
    #[must_use]
    pub fn with_message(code: SageMakerErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: None,
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Builds the error a runtime decoded from a failed response.
    ///
    /// Returns `None` when `error_type` names a fault this crate does not
    /// model, leaving the runtime to surface it as it sees fit.
    #[must_use]
    pub fn from_response(
        status: http::StatusCode,
        error_type: &str,
        message: impl Into<String>,
    ) -> Option<Self> {
        let code = SageMakerErrorCode::from_error_type(error_type)?;
        Some(Self::with_message(code, message).with_status(status))
    }

    /// Records the HTTP status of the response.
    #[must_use]
    pub fn with_status(mut self, status: http::StatusCode) -> Self {
        self.status_code = Some(status);
        self
    }

    /// Whether a runtime may resend the request.
    ///
    /// True for transient codes and for any 5xx response.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.code.is_retryable() || self.status_code.is_some_and(|s| s.is_server_error())
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the `__type` string for the JSON error response.
    #[must_use]
    pub fn error_type(&self) -> String {
        self.code.error_type()
    }

    // -- Convenience constructors --

    /// Resource is in use.
    #[must_use]
    pub fn resource_in_use(message: impl Into<String>) -> Self {
        Self::with_message(SageMakerErrorCode::ResourceInUse, message)
    }

    /// Quota exceeded.
    #[must_use]
    pub fn resource_limit_exceeded(message: impl Into<String>) -> Self {
        Self::with_message(SageMakerErrorCode::ResourceLimitExceeded, message)
    }

    /// Resource not found.
    #[must_use]
    pub fn resource_not_found(message: impl Into<String>) -> Self {
        Self::with_message(SageMakerErrorCode::ResourceNotFound, message)
    }

    /// Conflicting state.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::with_message(SageMakerErrorCode::ConflictException, message)
    }

    /// Validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(SageMakerErrorCode::ValidationException, message)
    }

    /// Internal failure.
    #[must_use]
    pub fn internal_failure(message: impl Into<String>) -> Self {
        Self::with_message(SageMakerErrorCode::InternalFailure, message)
    }
}

impl From<ModelError> for SageMakerError {
    fn from(err: ModelError) -> Self {
        Self::validation(err.to_string()).with_source(err)
    }
}

/// Create a `SageMakerError` from an error code.
///
/// # Examples
///
/// ```
/// use rustack_sagemaker_model::sagemaker_error;
/// use rustack_sagemaker_model::error::SageMakerErrorCode;
///
/// let err = sagemaker_error!(ValidationException);
/// assert_eq!(err.code, SageMakerErrorCode::ValidationException);
///
/// let err = sagemaker_error!(ResourceNotFound, "Training job not found");
/// assert_eq!(err.message, "Training job not found");
/// ```
#[macro_export]
macro_rules! sagemaker_error {
    ($code:ident) => {
        $crate::error::SageMakerError::new($crate::error::SageMakerErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::SageMakerError::with_message($crate::error::SageMakerErrorCode::$code, $msg)
    };
}
