//! Request preflight: the optional step between building a request and
//! sending it.
//!
//! [`Preflight::prepare`] fills a missing idempotency token and applies the
//! configured [`ValidationMode`]. The result is a [`PreparedRequest`] that
//! carries everything an awsJson1_1 runtime needs to dispatch the call.

use std::fmt;

use rustack_sagemaker_model::arn::SageMakerResourceType;
use rustack_sagemaker_model::validate::{Validator, Violation};
use rustack_sagemaker_model::{ModelError, OperationInput, SageMakerArn, SageMakerOperation};
use tracing::{debug, warn};

use crate::config::{SageMakerConfig, ValidationMode};
use crate::error::PreflightError;

/// A request ready to be sent.
#[derive(Debug, Clone)]
pub struct PreparedRequest<I> {
    /// The operation being invoked.
    pub operation: SageMakerOperation,
    /// Value of the `X-Amz-Target` header.
    pub target: &'static str,
    /// Region the request is addressed to.
    pub region: String,
    /// The completed request body.
    pub input: I,
}

impl<I> PreparedRequest<I> {
    /// Regional control-plane endpoint for this request.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("https://api.sagemaker.{}.amazonaws.com", self.region)
    }
}

impl<I: fmt::Display> fmt::Display for PreparedRequest<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.target, self.input)
    }
}

/// Applies a [`SageMakerConfig`] to outgoing requests.
#[derive(Debug, Clone, Default)]
pub struct Preflight {
    config: SageMakerConfig,
}

impl Preflight {
    /// Create a new preflight step.
    #[must_use]
    pub fn new(config: SageMakerConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &SageMakerConfig {
        &self.config
    }

    /// Completes and checks `input`.
    ///
    /// In [`ValidationMode::Warn`] every violation is logged and the request
    /// proceeds; in [`ValidationMode::Strict`] any violation fails the call.
    pub fn prepare<I: OperationInput>(
        &self,
        mut input: I,
    ) -> Result<PreparedRequest<I>, PreflightError> {
        let operation = I::OPERATION;

        if self.config.fill_idempotency_tokens {
            if let Some(slot) = input.idempotency_token_mut() {
                if slot.is_none() {
                    let token = uuid::Uuid::new_v4().to_string();
                    debug!(operation = %operation, token = %token, "filled idempotency token");
                    *slot = Some(token);
                }
            }
        }

        match self.config.validation_mode {
            ValidationMode::Off => {}
            ValidationMode::Warn => {
                for violation in Self::check(&input) {
                    warn!(
                        operation = %operation,
                        path = %violation.path,
                        "constraint violation: {}",
                        violation.kind
                    );
                }
            }
            ValidationMode::Strict => {
                if let Err(ModelError::Validation(errors)) = input.validate() {
                    debug!(
                        operation = %operation,
                        violations = errors.len(),
                        "request rejected"
                    );
                    return Err(PreflightError::Validation { operation, errors });
                }
            }
        }

        debug!(
            operation = %operation,
            mode = %self.config.validation_mode,
            "prepare completed"
        );

        Ok(PreparedRequest {
            operation,
            target: operation.target(),
            region: self.config.default_region.clone(),
            input,
        })
    }

    /// ARN of a resource in the configured region.
    #[must_use]
    pub fn resource_arn(
        &self,
        account_id: impl Into<String>,
        resource_type: SageMakerResourceType,
        resource_name: impl Into<String>,
    ) -> SageMakerArn {
        SageMakerArn::new(
            self.config.default_region.as_str(),
            account_id,
            resource_type,
            resource_name,
        )
    }

    /// Returns every violation in `input` without consuming it.
    #[must_use]
    pub fn check<I: OperationInput>(input: &I) -> Vec<Violation> {
        let mut v = Validator::new();
        input.check(&mut v);
        v.into_violations()
    }
}
