//! Batch transform responses.

use chrono::{DateTime, Utc};

use crate::types::{
    BatchStrategy, DataProcessing, ExperimentConfig, TransformInput, TransformJobStatus,
    TransformJobSummary, TransformOutput, TransformResources,
};

shape! {
    /// Output for the `CreateTransformJob` operation.
    pub struct CreateTransformJobOutput {
        /// ARN of the new transform job.
        transform_job_arn("TransformJobArn"): opt String,
    }
}

shape! {
    /// Output for the `DescribeTransformJob` operation.
    pub struct DescribeTransformJobOutput {
        /// Transform job name.
        transform_job_name("TransformJobName"): opt String,
        /// Transform job ARN.
        transform_job_arn("TransformJobArn"): opt String,
        /// Job status.
        transform_job_status("TransformJobStatus"): opt TransformJobStatus,
        /// Why the job failed.
        failure_reason("FailureReason"): opt String,
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
        /// Output location.
        transform_output("TransformOutput"): opt TransformOutput,
        /// Compute resources.
        transform_resources("TransformResources"): opt TransformResources,
        /// When the job was created.
        creation_time("CreationTime"): opt DateTime<Utc>,
        /// When the job started.
        transform_start_time("TransformStartTime"): opt DateTime<Utc>,
        /// When the job ended.
        transform_end_time("TransformEndTime"): opt DateTime<Utc>,
        /// Labeling job that produced the input manifest.
        labeling_job_arn("LabelingJobArn"): opt String,
        /// AutoML job that launched this job.
        auto_ml_job_arn("AutoMLJobArn"): opt String,
        /// Input and output filtering.
        data_processing("DataProcessing"): opt DataProcessing,
        /// Experiment association.
        experiment_config("ExperimentConfig"): opt ExperimentConfig,
    }
}

shape! {
    /// Output for the `ListTransformJobs` operation.
    pub struct ListTransformJobsOutput {
        /// One summary per job.
        transform_job_summaries("TransformJobSummaries"): list TransformJobSummary,
        /// Token of the next page.
        next_token("NextToken"): opt String,
    }
}

shape! {
    /// Output for the `StopTransformJob` operation.
    pub struct StopTransformJobOutput {}
}
