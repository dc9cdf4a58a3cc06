//! Errors raised while preparing a request.

use rustack_sagemaker_model::{SageMakerOperation, ValidationErrors};

/// Why a request could not be prepared.
#[derive(Debug, thiserror::Error)]
pub enum PreflightError {
    /// Strict validation found constraint violations.
    #[error("{operation} request rejected: {errors}")]
    Validation {
        /// The operation the request was meant for.
        operation: SageMakerOperation,
        /// Every violation found.
        errors: ValidationErrors,
    },

    /// The configuration is unusable.
    #[error("invalid SageMaker configuration: {0}")]
    Config(String),
}
