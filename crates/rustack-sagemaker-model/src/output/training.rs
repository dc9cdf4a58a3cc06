//! Training job responses.

use chrono::{DateTime, Utc};

use crate::types::{
    AlgorithmSpecification, Channel, CheckpointConfig, DebugHookConfig, DebugRuleConfiguration,
    DebugRuleEvaluationStatus, ExperimentConfig, MetricData, ModelArtifacts, OutputDataConfig,
    ResourceConfig, SecondaryStatus, SecondaryStatusTransition, StoppingCondition,
    TensorBoardOutputConfig, TrainingJobStatus, TrainingJobSummary, VpcConfig,
};

shape! {
    /// Output for the `CreateTrainingJob` operation.
    pub struct CreateTrainingJobOutput {
        /// ARN of the new training job.
        training_job_arn("TrainingJobArn"): opt String,
    }
}

shape! {
    /// Output for the `DescribeTrainingJob` operation.
    pub struct DescribeTrainingJobOutput {
        /// Training job name.
        training_job_name("TrainingJobName"): opt String,
        /// Training job ARN.
        training_job_arn("TrainingJobArn"): opt String,
        /// Tuning job that launched this job.
        tuning_job_arn("TuningJobArn"): opt String,
        /// Labeling job that produced the input manifest.
        labeling_job_arn("LabelingJobArn"): opt String,
        /// AutoML job that launched this job.
        auto_ml_job_arn("AutoMLJobArn"): opt String,
        /// Where the model artifacts were written.
        model_artifacts("ModelArtifacts"): opt ModelArtifacts,
        /// Job status.
        training_job_status("TrainingJobStatus"): opt TrainingJobStatus,
        /// Detailed status.
        secondary_status("SecondaryStatus"): opt SecondaryStatus,
        /// Why the job failed.
        failure_reason("FailureReason"): opt String,
        /// Hyperparameters the job ran with.
        hyper_parameters("HyperParameters"): map String,
        /// Algorithm and input mode.
        algorithm_specification("AlgorithmSpecification"): opt AlgorithmSpecification,
        /// IAM role the job ran as.
        role_arn("RoleArn"): opt String,
        /// Input channels.
        input_data_config("InputDataConfig"): list Channel,
        /// Output location.
        output_data_config("OutputDataConfig"): opt OutputDataConfig,
        /// Compute resources.
        resource_config("ResourceConfig"): opt ResourceConfig,
        /// VPC attachment.
        vpc_config("VpcConfig"): opt VpcConfig,
        /// Time limits.
        stopping_condition("StoppingCondition"): opt StoppingCondition,
        /// When the job was created.
        creation_time("CreationTime"): opt DateTime<Utc>,
        /// When training started.
        training_start_time("TrainingStartTime"): opt DateTime<Utc>,
        /// When training ended.
        training_end_time("TrainingEndTime"): opt DateTime<Utc>,
        /// When the status last changed.
        last_modified_time("LastModifiedTime"): opt DateTime<Utc>,
        /// History of detailed status changes.
        secondary_status_transitions("SecondaryStatusTransitions"): list SecondaryStatusTransition,
        /// Final values of the tracked metrics.
        final_metric_data_list("FinalMetricDataList"): list MetricData,
        /// Whether outbound network calls were blocked.
        enable_network_isolation("EnableNetworkIsolation"): opt bool,
        /// Whether inter-instance traffic was encrypted.
        enable_inter_container_traffic_encryption("EnableInterContainerTrafficEncryption"): opt bool,
        /// Whether spot instances were used.
        enable_managed_spot_training("EnableManagedSpotTraining"): opt bool,
        /// Checkpoint location.
        checkpoint_config("CheckpointConfig"): opt CheckpointConfig,
        /// Seconds of training.
        training_time_in_seconds("TrainingTimeInSeconds"): opt i32,
        /// Seconds billed.
        billable_time_in_seconds("BillableTimeInSeconds"): opt i32,
        /// Debugger hook.
        debug_hook_config("DebugHookConfig"): opt DebugHookConfig,
        /// Experiment association.
        experiment_config("ExperimentConfig"): opt ExperimentConfig,
        /// Debugger rules.
        debug_rule_configurations("DebugRuleConfigurations"): list DebugRuleConfiguration,
        /// TensorBoard output.
        tensor_board_output_config("TensorBoardOutputConfig"): opt TensorBoardOutputConfig,
        /// Status of each debugger rule.
        debug_rule_evaluation_statuses("DebugRuleEvaluationStatuses"): list DebugRuleEvaluationStatus,
    }
}

shape! {
    /// Output for the `ListTrainingJobs` operation.
    pub struct ListTrainingJobsOutput {
        /// One summary per job.
        training_job_summaries("TrainingJobSummaries"): list TrainingJobSummary,
        /// Token of the next page.
        next_token("NextToken"): opt String,
    }
}

shape! {
    /// Output for the `StopTrainingJob` operation.
    pub struct StopTrainingJobOutput {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MetricValue;

    #[test]
    fn test_should_decode_describe_response() {
        let json = r#"{
            "TrainingJobName": "xgb-1",
            "TrainingJobArn": "arn:aws:sagemaker:us-east-1:123456789012:training-job/xgb-1",
            "TrainingJobStatus": "Completed",
            "SecondaryStatus": "Completed",
            "HyperParameters": {"max_depth": "5", "eta": "0.2"},
            "ModelArtifacts": {"S3ModelArtifacts": "s3://bucket/output/model.tar.gz"},
            "CreationTime": "2024-03-01T10:00:00Z",
            "FinalMetricDataList": [
                {"MetricName": "validation:auc", "Value": 0.91, "Timestamp": "2024-03-01T10:30:00Z"}
            ],
            "BillableTimeInSeconds": 1200,
            "WarmPoolStatus": {"Status": "Available"}
        }"#;
        let output: DescribeTrainingJobOutput = serde_json::from_str(json).unwrap();

        assert_eq!(output.training_job_status, Some(TrainingJobStatus::Completed));
        assert_eq!(
            output.hyper_parameters.as_ref().unwrap().get("eta").map(String::as_str),
            Some("0.2")
        );
        let metric = &output.final_metric_data_list.as_ref().unwrap()[0];
        assert_eq!(metric.value, Some(MetricValue::new(0.91)));
        assert_eq!(output.billable_time_in_seconds, Some(1200));
        assert_eq!(output.vpc_config, None);
    }

    #[test]
    fn test_should_keep_unknown_status_from_newer_service() {
        let json = r#"{"TrainingJobSummaries":[{"TrainingJobName":"a","TrainingJobStatus":"Paused"}],"NextToken":"t"}"#;
        let output: ListTrainingJobsOutput = serde_json::from_str(json).unwrap();
        let summary = &output.training_job_summaries.as_ref().unwrap()[0];
        assert_eq!(
            summary.training_job_status,
            Some(TrainingJobStatus::Unknown("Paused".to_owned()))
        );
        assert_eq!(output.next_token.as_deref(), Some("t"));
    }

    #[test]
    fn test_should_encode_void_output_as_empty_object() {
        assert_eq!(serde_json::to_string(&StopTrainingJobOutput {}).unwrap(), "{}");
        assert_eq!(StopTrainingJobOutput::default().to_string(), "{}");
    }
}
