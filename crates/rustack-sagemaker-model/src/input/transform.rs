//! Batch transform requests.

use chrono::{DateTime, Utc};

use super::{check_page, check_tags};
use crate::patterns::{ANY_TEXT, ENTITY_NAME, ENVIRONMENT_KEY, NAME_CONTAINS};
use crate::types::{
    BatchStrategy, DataProcessing, ExperimentConfig, SortBy, SortOrder, Tag, TransformInput,
    TransformJobStatus, TransformOutput, TransformResources,
};
use crate::validate::{Validate, Validator};

fn check_transform_job_name(v: &mut Validator, name: Option<&str>) {
    v.string("TransformJobName", name)
        .required()
        .length(1, 63)
        .pattern(&ENTITY_NAME);
}

shape! {
    /// Input for the `CreateTransformJob` operation.
    pub struct CreateTransformJobInput {
        /// Name of the transform job, unique per account and region.
        transform_job_name("TransformJobName"): opt String,
        /// Model used for inference.
        model_name("ModelName"): opt String,
        /// Parallel requests per instance.
        max_concurrent_transforms("MaxConcurrentTransforms"): opt i32,
        /// Maximum payload per request.
        max_payload_in_mb("MaxPayloadInMB"): opt i32,
        /// Records per request.
        batch_strategy("BatchStrategy"): opt BatchStrategy,
        /// Environment variables of the inference container.
        environment("Environment"): map String,
        /// Input data.
        transform_input("TransformInput"): opt TransformInput,
        /// Where results are written.
        transform_output("TransformOutput"): opt TransformOutput,
        /// Compute resources.
        transform_resources("TransformResources"): opt TransformResources,
        /// Input and output filtering.
        data_processing("DataProcessing"): opt DataProcessing,
        /// Tags for the job.
        tags("Tags"): list Tag,
        /// Experiment association.
        experiment_config("ExperimentConfig"): opt ExperimentConfig,
    }
}

impl Validate for CreateTransformJobInput {
    fn check(&self, v: &mut Validator) {
        check_transform_job_name(v, self.transform_job_name.as_deref());
        v.string("ModelName", self.model_name.as_deref())
            .required()
            .length(0, 63)
            .pattern(&ENTITY_NAME);
        v.int("MaxConcurrentTransforms", self.max_concurrent_transforms)
            .min(0);
        v.int("MaxPayloadInMB", self.max_payload_in_mb).min(0);
        v.enumeration("BatchStrategy", self.batch_strategy.as_ref());
        v.map("Environment", self.environment.as_ref())
            .max_entries(16)
            .key_length(0, 1024)
            .key_pattern(&ENVIRONMENT_KEY)
            .value_length(0, 10_240)
            .value_pattern(&ANY_TEXT);
        v.nested("TransformInput", self.transform_input.as_ref())
            .required();
        v.nested("TransformOutput", self.transform_output.as_ref())
            .required();
        v.nested("TransformResources", self.transform_resources.as_ref())
            .required();
        v.nested("DataProcessing", self.data_processing.as_ref());
        check_tags(v, self.tags.as_deref());
        v.nested("ExperimentConfig", self.experiment_config.as_ref());
    }
}

shape! {
    /// Input for the `DescribeTransformJob` operation.
    pub struct DescribeTransformJobInput {
        /// Name of the transform job.
        transform_job_name("TransformJobName"): opt String,
    }
}

impl Validate for DescribeTransformJobInput {
    fn check(&self, v: &mut Validator) {
        check_transform_job_name(v, self.transform_job_name.as_deref());
    }
}

shape! {
    /// Input for the `ListTransformJobs` operation.
    pub struct ListTransformJobsInput {
        /// Only jobs created after this time.
        creation_time_after("CreationTimeAfter"): opt DateTime<Utc>,
        /// Only jobs created before this time.
        creation_time_before("CreationTimeBefore"): opt DateTime<Utc>,
        /// Only jobs modified after this time.
        last_modified_time_after("LastModifiedTimeAfter"): opt DateTime<Utc>,
        /// Only jobs modified before this time.
        last_modified_time_before("LastModifiedTimeBefore"): opt DateTime<Utc>,
        /// Only jobs whose name contains this string.
        name_contains("NameContains"): opt String,
        /// Only jobs in this state.
        status_equals("StatusEquals"): opt TransformJobStatus,
        /// Sort key.
        sort_by("SortBy"): opt SortBy,
        /// Sort direction.
        sort_order("SortOrder"): opt SortOrder,
        /// Continuation token from a previous page.
        next_token("NextToken"): opt String,
        /// Page size.
        max_results("MaxResults"): opt i32,
    }
}

impl Validate for ListTransformJobsInput {
    fn check(&self, v: &mut Validator) {
        v.string("NameContains", self.name_contains.as_deref())
            .length(0, 63)
            .pattern(&NAME_CONTAINS);
        v.enumeration("StatusEquals", self.status_equals.as_ref());
        v.enumeration("SortBy", self.sort_by.as_ref());
        v.enumeration("SortOrder", self.sort_order.as_ref());
        check_page(v, self.next_token.as_deref(), self.max_results);
    }
}

shape! {
    /// Input for the `StopTransformJob` operation.
    pub struct StopTransformJobInput {
        /// Name of the transform job.
        transform_job_name("TransformJobName"): opt String,
    }
}

impl Validate for StopTransformJobInput {
    fn check(&self, v: &mut Validator) {
        check_transform_job_name(v, self.transform_job_name.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelError;
    use crate::types::{
        S3DataType, TransformDataSource, TransformInstanceType, TransformS3DataSource,
    };

    fn valid_input() -> CreateTransformJobInput {
        CreateTransformJobInput::builder()
            .transform_job_name("nightly-scoring")
            .model_name("churn-model")
            .batch_strategy(BatchStrategy::MultiRecord)
            .environment("SAGEMAKER_MODEL_SERVER_WORKERS", "2")
            .unwrap()
            .transform_input(
                TransformInput::builder()
                    .data_source(
                        TransformDataSource::builder()
                            .s3_data_source(
                                TransformS3DataSource::builder()
                                    .s3_data_type(S3DataType::S3Prefix)
                                    .s3_uri("s3://bucket/batch/")
                                    .build(),
                            )
                            .build(),
                    )
                    .build(),
            )
            .transform_output(
                TransformOutput::builder()
                    .s3_output_path("s3://bucket/scored/")
                    .build(),
            )
            .transform_resources(
                TransformResources::builder()
                    .instance_type(TransformInstanceType::MlM5Xlarge)
                    .instance_count(2)
                    .build(),
            )
            .build()
    }

    #[test]
    fn test_should_accept_complete_transform_job() {
        valid_input().validate().unwrap();
    }

    #[test]
    fn test_should_reject_bad_environment_key_and_negative_payload() {
        let mut input = valid_input();
        input
            .environment
            .get_or_insert_with(Default::default)
            .add_entry("1BAD", "x")
            .unwrap();
        input.max_payload_in_mb = Some(-1);

        let Err(ModelError::Validation(errors)) = input.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors.paths().collect::<Vec<_>>(),
            ["MaxPayloadInMB", "Environment[1BAD]"]
        );
    }

    #[test]
    fn test_should_keep_first_environment_value_through_builder() {
        let rejected = CreateTransformJobInput::builder()
            .transform_job_name("nightly-scoring")
            .environment("K", "v1")
            .unwrap()
            .environment("K", "v2")
            .expect_err("repeated key");
        assert!(matches!(rejected.error(), ModelError::DuplicateKey { key } if key == "K"));

        let input = rejected.into_builder().build();
        assert_eq!(input.transform_job_name.as_deref(), Some("nightly-scoring"));
        let environment = input.environment.as_ref().unwrap();
        assert_eq!(environment.len(), 1);
        assert_eq!(environment.get("K").map(String::as_str), Some("v1"));
    }

    #[test]
    fn test_should_keep_first_environment_value_through_field() {
        let mut input = valid_input();
        let environment = input.environment.get_or_insert_with(Default::default);
        let err = environment
            .add_entry("SAGEMAKER_MODEL_SERVER_WORKERS", "8")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Duplicated keys (SAGEMAKER_MODEL_SERVER_WORKERS) are provided."
        );
        assert_eq!(
            input
                .environment
                .as_ref()
                .and_then(|env| env.get("SAGEMAKER_MODEL_SERVER_WORKERS"))
                .map(String::as_str),
            Some("2")
        );
    }

    #[test]
    fn test_should_reject_repeated_environment_key_on_decode() {
        let json = r#"{"TransformJobName":"j","Environment":{"K":"v1","K":"v2"}}"#;
        let err = serde_json::from_str::<CreateTransformJobInput>(json).unwrap_err();
        assert!(err.to_string().contains("Duplicated keys (K)"));
    }

    #[test]
    fn test_should_reject_unknown_batch_strategy_from_the_wire() {
        let json = r#"{"TransformJobName":"j","BatchStrategy":"Streaming"}"#;
        let input: CreateTransformJobInput = serde_json::from_str(json).unwrap();
        assert_eq!(
            input.batch_strategy,
            Some(BatchStrategy::Unknown("Streaming".to_owned()))
        );
        let err = input.validate().unwrap_err().to_string();
        assert!(err.contains("BatchStrategy has unknown value Streaming"), "{err}");
    }
}
