//! Hyperparameter tuning responses.

use chrono::{DateTime, Utc};

use crate::types::{
    HyperParameterTrainingJobDefinition, HyperParameterTrainingJobSummary,
    HyperParameterTuningJobConfig, HyperParameterTuningJobStatus, HyperParameterTuningJobSummary,
    HyperParameterTuningJobWarmStartConfig, ObjectiveStatusCounters, TrainingJobStatusCounters,
};

shape! {
    /// Output for the `CreateHyperParameterTuningJob` operation.
    pub struct CreateHyperParameterTuningJobOutput {
        /// ARN of the new tuning job.
        hyper_parameter_tuning_job_arn("HyperParameterTuningJobArn"): opt String,
    }
}

shape! {
    /// Output for the `DescribeHyperParameterTuningJob` operation.
    pub struct DescribeHyperParameterTuningJobOutput {
        /// Tuning job name.
        hyper_parameter_tuning_job_name("HyperParameterTuningJobName"): opt String,
        /// Tuning job ARN.
        hyper_parameter_tuning_job_arn("HyperParameterTuningJobArn"): opt String,
        /// Strategy, objective, limits and ranges.
        hyper_parameter_tuning_job_config("HyperParameterTuningJobConfig"): opt HyperParameterTuningJobConfig,
        /// Training jobs launched by the tuner.
        training_job_definition("TrainingJobDefinition"): opt HyperParameterTrainingJobDefinition,
        /// Several training job definitions.
        training_job_definitions("TrainingJobDefinitions"): list HyperParameterTrainingJobDefinition,
        /// Job status.
        hyper_parameter_tuning_job_status("HyperParameterTuningJobStatus"): opt HyperParameterTuningJobStatus,
        /// When the job was created.
        creation_time("CreationTime"): opt DateTime<Utc>,
        /// When the job ended.
        hyper_parameter_tuning_end_time("HyperParameterTuningEndTime"): opt DateTime<Utc>,
        /// When the status last changed.
        last_modified_time("LastModifiedTime"): opt DateTime<Utc>,
        /// Training jobs by status.
        training_job_status_counters("TrainingJobStatusCounters"): opt TrainingJobStatusCounters,
        /// Objective evaluations by status.
        objective_status_counters("ObjectiveStatusCounters"): opt ObjectiveStatusCounters,
        /// Best training job of this tuning job.
        best_training_job("BestTrainingJob"): opt HyperParameterTrainingJobSummary,
        /// Best training job including warm-start parents.
        overall_best_training_job("OverallBestTrainingJob"): opt HyperParameterTrainingJobSummary,
        /// Warm start configuration.
        warm_start_config("WarmStartConfig"): opt HyperParameterTuningJobWarmStartConfig,
        /// Why the job failed.
        failure_reason("FailureReason"): opt String,
    }
}

shape! {
    /// Output for the `ListHyperParameterTuningJobs` operation.
    pub struct ListHyperParameterTuningJobsOutput {
        /// One summary per job.
        hyper_parameter_tuning_job_summaries("HyperParameterTuningJobSummaries"): list HyperParameterTuningJobSummary,
        /// Token of the next page.
        next_token("NextToken"): opt String,
    }
}

shape! {
    /// Output for the `StopHyperParameterTuningJob` operation.
    pub struct StopHyperParameterTuningJobOutput {}
}
