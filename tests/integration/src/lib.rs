//! Integration tests for the SageMaker client layer.
//!
//! These tests exercise the model and core crates together the way a runtime
//! would: build a request, run it through preflight, encode the awsJson1_1
//! body and decode canned service responses. No network is involved.
//!
//! Run them with:
//! ```text
//! cargo test -p rustack-integration
//! ```

use std::sync::Once;

use rustack_sagemaker_core::{Preflight, SageMakerConfig, ValidationMode};
use rustack_sagemaker_model::input::CreateTrainingJobInput;
use rustack_sagemaker_model::types::{
    AlgorithmSpecification, Channel, DataSource, OutputDataConfig, ResourceConfig, S3DataSource,
    S3DataType, StoppingCondition, Tag, TrainingInputMode, TrainingInstanceType,
};
use rustack_sagemaker_model::{PaginatedInput, PaginatedOutput};

static INIT: Once = Once::new();

/// Initialize tracing (once).
///
/// `RUST_LOG` wins; otherwise the configured `log_level` is the filter.
fn init_tracing() {
    INIT.call_once(|| {
        let log_level = SageMakerConfig::from_env()
            .unwrap_or_default()
            .log_level;
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
            )
            .with_test_writer()
            .init();
    });
}

/// Create a preflight step with the given validation mode.
#[must_use]
pub fn preflight(mode: ValidationMode) -> Preflight {
    init_tracing();
    Preflight::new(SageMakerConfig::builder().validation_mode(mode).build())
}

/// Generate a unique job name for a test.
#[must_use]
pub fn test_job_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

/// A training job request that passes every constraint.
#[must_use]
pub fn training_job(name: &str) -> CreateTrainingJobInput {
    CreateTrainingJobInput::builder()
        .training_job_name(name)
        .algorithm_specification(
            AlgorithmSpecification::builder()
                .training_image("123456789012.dkr.ecr.us-east-1.amazonaws.com/xgb:1")
                .training_input_mode(TrainingInputMode::File)
                .build(),
        )
        .role_arn("arn:aws:iam::123456789012:role/SageMakerRole")
        .input_data_config(
            Channel::builder()
                .channel_name("train")
                .data_source(
                    DataSource::builder()
                        .s3_data_source(
                            S3DataSource::builder()
                                .s3_data_type(S3DataType::S3Prefix)
                                .s3_uri("s3://bucket/train/")
                                .build(),
                        )
                        .build(),
                )
                .build(),
        )
        .output_data_config(
            OutputDataConfig::builder()
                .s3_output_path("s3://bucket/output/")
                .build(),
        )
        .resource_config(
            ResourceConfig::builder()
                .instance_type(TrainingInstanceType::MlM5Xlarge)
                .instance_count(1)
                .volume_size_in_gb(10)
                .build(),
        )
        .stopping_condition(
            StoppingCondition::builder()
                .max_runtime_in_seconds(3600)
                .build(),
        )
        .tags(Tag::new("team", "ml"))
        .build()
}

/// Follow `NextToken` through every page, collecting the responses.
///
/// `send` stands in for the runtime and receives each page request.
pub fn collect_pages<I, F>(mut input: I, mut send: F) -> anyhow::Result<Vec<I::Output>>
where
    I: PaginatedInput,
    I::Output: PaginatedOutput,
    F: FnMut(&I) -> anyhow::Result<I::Output>,
{
    let mut pages = Vec::new();
    loop {
        let page = send(&input)?;
        let next = page.next_token().map(str::to_owned);
        pages.push(page);
        match next {
            Some(token) => input.set_next_token(Some(token)),
            None => return Ok(pages),
        }
    }
}

mod test_errors;
mod test_notebook;
mod test_pagination;
mod test_preflight;
mod test_training;
