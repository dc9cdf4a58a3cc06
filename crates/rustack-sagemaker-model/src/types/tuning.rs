//! Hyperparameter tuning types.

use chrono::{DateTime, Utc};

use super::{
    Channel, CheckpointConfig, MetricDefinition, MetricValue, OutputDataConfig, ResourceConfig,
    StoppingCondition, TrainingInputMode, TrainingJobStatus, VpcConfig,
};
use crate::patterns::{ANY_TEXT, ENTITY_NAME, NAME_OR_ARN, ROLE_ARN};
use crate::validate::{Validate, Validator};

string_enum! {
    /// Search strategy of a tuning job.
    pub enum HyperParameterTuningJobStrategyType {
        Bayesian => "Bayesian",
        Random => "Random",
    }
}

string_enum! {
    /// Whether the objective metric is maximized or minimized.
    pub enum HyperParameterTuningJobObjectiveType {
        Maximize => "Maximize",
        Minimize => "Minimize",
    }
}

string_enum! {
    /// Status of a tuning job.
    pub enum HyperParameterTuningJobStatus {
        Completed => "Completed",
        InProgress => "InProgress",
        Failed => "Failed",
        Stopped => "Stopped",
        Stopping => "Stopping",
    }
}

string_enum! {
    /// Scale on which a numeric range is searched.
    pub enum HyperParameterScalingType {
        Auto => "Auto",
        Linear => "Linear",
        Logarithmic => "Logarithmic",
        ReverseLogarithmic => "ReverseLogarithmic",
    }
}

string_enum! {
    /// Whether training jobs that are not improving are stopped early.
    pub enum TrainingJobEarlyStoppingType {
        Off => "Off",
        Auto => "Auto",
    }
}

string_enum! {
    /// How a warm-started tuning job reuses its parents.
    pub enum HyperParameterTuningJobWarmStartType {
        IdenticalDataAndAlgorithm => "IdenticalDataAndAlgorithm",
        TransferLearning => "TransferLearning",
    }
}

string_enum! {
    /// Whether a training job's objective metric was evaluated.
    pub enum ObjectiveStatus {
        Succeeded => "Succeeded",
        Pending => "Pending",
        Failed => "Failed",
    }
}

string_enum! {
    /// Sort key for tuning job listings.
    pub enum HyperParameterTuningJobSortByOptions {
        Name => "Name",
        Status => "Status",
        CreationTime => "CreationTime",
    }
}

shape! {
    /// Search configuration of a tuning job.
    pub struct HyperParameterTuningJobConfig {
        /// Search strategy.
        strategy("Strategy"): opt HyperParameterTuningJobStrategyType,
        /// Objective metric.
        hyper_parameter_tuning_job_objective("HyperParameterTuningJobObjective"): opt HyperParameterTuningJobObjective,
        /// Job count limits.
        resource_limits("ResourceLimits"): opt ResourceLimits,
        /// Ranges to search.
        parameter_ranges("ParameterRanges"): opt ParameterRanges,
        /// Early stopping behavior.
        training_job_early_stopping_type("TrainingJobEarlyStoppingType"): opt TrainingJobEarlyStoppingType,
    }
}

impl Validate for HyperParameterTuningJobConfig {
    fn check(&self, v: &mut Validator) {
        v.enumeration("Strategy", self.strategy.as_ref()).required();
        v.nested(
            "HyperParameterTuningJobObjective",
            self.hyper_parameter_tuning_job_objective.as_ref(),
        );
        v.nested("ResourceLimits", self.resource_limits.as_ref()).required();
        v.nested("ParameterRanges", self.parameter_ranges.as_ref());
        v.enumeration(
            "TrainingJobEarlyStoppingType",
            self.training_job_early_stopping_type.as_ref(),
        );
    }
}

shape! {
    /// The metric a tuning job optimizes.
    pub struct HyperParameterTuningJobObjective {
        /// Maximize or minimize.
        r#type("Type"): opt HyperParameterTuningJobObjectiveType,
        /// Name of the metric.
        metric_name("MetricName"): opt String,
    }
}

impl Validate for HyperParameterTuningJobObjective {
    fn check(&self, v: &mut Validator) {
        v.enumeration("Type", self.r#type.as_ref()).required();
        v.string("MetricName", self.metric_name.as_deref())
            .required()
            .length(1, 255);
    }
}

shape! {
    /// Limits on the training jobs a tuning job launches.
    pub struct ResourceLimits {
        /// Total training jobs.
        max_number_of_training_jobs("MaxNumberOfTrainingJobs"): opt i32,
        /// Concurrent training jobs.
        max_parallel_training_jobs("MaxParallelTrainingJobs"): opt i32,
    }
}

impl Validate for ResourceLimits {
    fn check(&self, v: &mut Validator) {
        v.int("MaxNumberOfTrainingJobs", self.max_number_of_training_jobs)
            .required()
            .min(1);
        v.int("MaxParallelTrainingJobs", self.max_parallel_training_jobs)
            .required()
            .min(1);
    }
}

shape! {
    /// Hyperparameter ranges to search.
    pub struct ParameterRanges {
        /// Integer ranges.
        integer_parameter_ranges("IntegerParameterRanges"): list IntegerParameterRange,
        /// Continuous ranges.
        continuous_parameter_ranges("ContinuousParameterRanges"): list ContinuousParameterRange,
        /// Categorical ranges.
        categorical_parameter_ranges("CategoricalParameterRanges"): list CategoricalParameterRange,
    }
}

impl Validate for ParameterRanges {
    fn check(&self, v: &mut Validator) {
        v.list(
            "IntegerParameterRanges",
            self.integer_parameter_ranges.as_deref(),
        )
        .length(0, 20)
        .each();
        v.list(
            "ContinuousParameterRanges",
            self.continuous_parameter_ranges.as_deref(),
        )
        .length(0, 20)
        .each();
        v.list(
            "CategoricalParameterRanges",
            self.categorical_parameter_ranges.as_deref(),
        )
        .length(0, 20)
        .each();
    }
}

shape! {
    /// Range of an integer hyperparameter.
    pub struct IntegerParameterRange {
        /// Hyperparameter name.
        name("Name"): opt String,
        /// Lower bound, as a string.
        min_value("MinValue"): opt String,
        /// Upper bound, as a string.
        max_value("MaxValue"): opt String,
        /// Search scale.
        scaling_type("ScalingType"): opt HyperParameterScalingType,
    }
}

impl Validate for IntegerParameterRange {
    fn check(&self, v: &mut Validator) {
        check_numeric_range(
            v,
            self.name.as_deref(),
            self.min_value.as_deref(),
            self.max_value.as_deref(),
        );
        v.enumeration("ScalingType", self.scaling_type.as_ref());
    }
}

shape! {
    /// Range of a continuous hyperparameter.
    pub struct ContinuousParameterRange {
        /// Hyperparameter name.
        name("Name"): opt String,
        /// Lower bound, as a string.
        min_value("MinValue"): opt String,
        /// Upper bound, as a string.
        max_value("MaxValue"): opt String,
        /// Search scale.
        scaling_type("ScalingType"): opt HyperParameterScalingType,
    }
}

impl Validate for ContinuousParameterRange {
    fn check(&self, v: &mut Validator) {
        check_numeric_range(
            v,
            self.name.as_deref(),
            self.min_value.as_deref(),
            self.max_value.as_deref(),
        );
        v.enumeration("ScalingType", self.scaling_type.as_ref());
    }
}

fn check_numeric_range(
    v: &mut Validator,
    name: Option<&str>,
    min_value: Option<&str>,
    max_value: Option<&str>,
) {
    v.string("Name", name)
        .required()
        .length(0, 256)
        .pattern(&ANY_TEXT);
    v.string("MinValue", min_value)
        .required()
        .length(0, 256)
        .pattern(&ANY_TEXT);
    v.string("MaxValue", max_value)
        .required()
        .length(0, 256)
        .pattern(&ANY_TEXT);
}

shape! {
    /// Values of a categorical hyperparameter.
    pub struct CategoricalParameterRange {
        /// Hyperparameter name.
        name("Name"): opt String,
        /// Candidate values.
        values("Values"): list String,
    }
}

impl Validate for CategoricalParameterRange {
    fn check(&self, v: &mut Validator) {
        v.string("Name", self.name.as_deref())
            .required()
            .length(0, 256)
            .pattern(&ANY_TEXT);
        v.list("Values", self.values.as_deref())
            .required()
            .length(1, 20)
            .item_length(0, 256)
            .item_pattern(&ANY_TEXT);
    }
}

shape! {
    /// Algorithm used by the training jobs of a tuning job.
    pub struct HyperParameterAlgorithmSpecification {
        /// Registry path of the training image.
        training_image("TrainingImage"): opt String,
        /// How the algorithm reads its input.
        training_input_mode("TrainingInputMode"): opt TrainingInputMode,
        /// Name or ARN of an algorithm resource.
        algorithm_name("AlgorithmName"): opt String,
        /// Metrics to scrape from the algorithm logs.
        metric_definitions("MetricDefinitions"): list MetricDefinition,
    }
}

impl Validate for HyperParameterAlgorithmSpecification {
    fn check(&self, v: &mut Validator) {
        v.string("TrainingImage", self.training_image.as_deref())
            .length(0, 255)
            .pattern(&ANY_TEXT);
        v.enumeration("TrainingInputMode", self.training_input_mode.as_ref())
            .required();
        v.string("AlgorithmName", self.algorithm_name.as_deref())
            .length(1, 170)
            .pattern(&NAME_OR_ARN);
        v.list("MetricDefinitions", self.metric_definitions.as_deref())
            .length(0, 40)
            .each();
    }
}

shape! {
    /// Template for the training jobs a tuning job launches.
    pub struct HyperParameterTrainingJobDefinition {
        /// Name of this definition, for tuning jobs with several.
        definition_name("DefinitionName"): opt String,
        /// Objective metric for this definition.
        tuning_objective("TuningObjective"): opt HyperParameterTuningJobObjective,
        /// Ranges to search.
        hyper_parameter_ranges("HyperParameterRanges"): opt ParameterRanges,
        /// Hyperparameters that stay fixed.
        static_hyper_parameters("StaticHyperParameters"): map String,
        /// Algorithm and input mode.
        algorithm_specification("AlgorithmSpecification"): opt HyperParameterAlgorithmSpecification,
        /// IAM role the jobs run as.
        role_arn("RoleArn"): opt String,
        /// Input channels.
        input_data_config("InputDataConfig"): list Channel,
        /// VPC attachment.
        vpc_config("VpcConfig"): opt VpcConfig,
        /// Artifact location.
        output_data_config("OutputDataConfig"): opt OutputDataConfig,
        /// Compute resources.
        resource_config("ResourceConfig"): opt ResourceConfig,
        /// Time limits.
        stopping_condition("StoppingCondition"): opt StoppingCondition,
        /// Whether outbound network calls are blocked.
        enable_network_isolation("EnableNetworkIsolation"): opt bool,
        /// Whether traffic between instances is encrypted.
        enable_inter_container_traffic_encryption("EnableInterContainerTrafficEncryption"): opt bool,
        /// Whether managed spot capacity is used.
        enable_managed_spot_training("EnableManagedSpotTraining"): opt bool,
        /// Checkpoint storage.
        checkpoint_config("CheckpointConfig"): opt CheckpointConfig,
    }
}

impl Validate for HyperParameterTrainingJobDefinition {
    fn check(&self, v: &mut Validator) {
        v.string("DefinitionName", self.definition_name.as_deref())
            .length(1, 64)
            .pattern(&ENTITY_NAME);
        v.nested("TuningObjective", self.tuning_objective.as_ref());
        v.nested("HyperParameterRanges", self.hyper_parameter_ranges.as_ref());
        v.map("StaticHyperParameters", self.static_hyper_parameters.as_ref())
            .max_entries(100)
            .key_length(0, 256)
            .value_length(0, 2500);
        v.nested(
            "AlgorithmSpecification",
            self.algorithm_specification.as_ref(),
        )
        .required();
        v.string("RoleArn", self.role_arn.as_deref())
            .required()
            .length(20, 2048)
            .pattern(&ROLE_ARN);
        v.list("InputDataConfig", self.input_data_config.as_deref())
            .length(1, 20)
            .each();
        v.nested("VpcConfig", self.vpc_config.as_ref());
        v.nested("OutputDataConfig", self.output_data_config.as_ref())
            .required();
        v.nested("ResourceConfig", self.resource_config.as_ref())
            .required();
        v.nested("StoppingCondition", self.stopping_condition.as_ref())
            .required();
        v.nested("CheckpointConfig", self.checkpoint_config.as_ref());
    }
}

shape! {
    /// Tuning jobs whose results seed a new tuning job.
    pub struct HyperParameterTuningJobWarmStartConfig {
        /// Parent tuning jobs.
        parent_hyper_parameter_tuning_jobs("ParentHyperParameterTuningJobs"): list ParentHyperParameterTuningJob,
        /// How the parents are reused.
        warm_start_type("WarmStartType"): opt HyperParameterTuningJobWarmStartType,
    }
}

impl Validate for HyperParameterTuningJobWarmStartConfig {
    fn check(&self, v: &mut Validator) {
        v.list(
            "ParentHyperParameterTuningJobs",
            self.parent_hyper_parameter_tuning_jobs.as_deref(),
        )
        .required()
        .length(1, 5)
        .each();
        v.enumeration("WarmStartType", self.warm_start_type.as_ref())
            .required();
    }
}

shape! {
    /// A parent of a warm-started tuning job.
    pub struct ParentHyperParameterTuningJob {
        /// Name of the parent tuning job.
        hyper_parameter_tuning_job_name("HyperParameterTuningJobName"): opt String,
    }
}

impl Validate for ParentHyperParameterTuningJob {
    fn check(&self, v: &mut Validator) {
        v.string(
            "HyperParameterTuningJobName",
            self.hyper_parameter_tuning_job_name.as_deref(),
        )
        .length(1, 32)
        .pattern(&ENTITY_NAME);
    }
}

shape! {
    /// Training job counts by status within a tuning job.
    pub struct TrainingJobStatusCounters {
        completed("Completed"): opt i32,
        in_progress("InProgress"): opt i32,
        retryable_error("RetryableError"): opt i32,
        non_retryable_error("NonRetryableError"): opt i32,
        stopped("Stopped"): opt i32,
    }
}

shape! {
    /// Training job counts by objective status within a tuning job.
    pub struct ObjectiveStatusCounters {
        succeeded("Succeeded"): opt i32,
        pending("Pending"): opt i32,
        failed("Failed"): opt i32,
    }
}

shape! {
    /// Final objective metric of a training job launched by a tuning job.
    pub struct FinalHyperParameterTuningJobObjectiveMetric {
        /// Maximize or minimize.
        r#type("Type"): opt HyperParameterTuningJobObjectiveType,
        /// Metric name.
        metric_name("MetricName"): opt String,
        /// Metric value.
        value("Value"): opt MetricValue,
    }
}

shape! {
    /// Summary of a training job launched by a tuning job.
    pub struct HyperParameterTrainingJobSummary {
        /// Definition the job was launched from.
        training_job_definition_name("TrainingJobDefinitionName"): opt String,
        /// Training job name.
        training_job_name("TrainingJobName"): opt String,
        /// Training job ARN.
        training_job_arn("TrainingJobArn"): opt String,
        /// Tuning job that launched it.
        tuning_job_name("TuningJobName"): opt String,
        /// When the job was created.
        creation_time("CreationTime"): opt DateTime<Utc>,
        /// When training started.
        training_start_time("TrainingStartTime"): opt DateTime<Utc>,
        /// When training ended.
        training_end_time("TrainingEndTime"): opt DateTime<Utc>,
        /// Training job status.
        training_job_status("TrainingJobStatus"): opt TrainingJobStatus,
        /// Hyperparameter values chosen for this job.
        tuned_hyper_parameters("TunedHyperParameters"): map String,
        /// Why the job failed.
        failure_reason("FailureReason"): opt String,
        /// Final objective metric.
        final_hyper_parameter_tuning_job_objective_metric("FinalHyperParameterTuningJobObjectiveMetric"): opt FinalHyperParameterTuningJobObjectiveMetric,
        /// Whether the objective metric was evaluated.
        objective_status("ObjectiveStatus"): opt ObjectiveStatus,
    }
}

shape! {
    /// Summary of a tuning job in a listing.
    pub struct HyperParameterTuningJobSummary {
        /// Tuning job name.
        hyper_parameter_tuning_job_name("HyperParameterTuningJobName"): opt String,
        /// Tuning job ARN.
        hyper_parameter_tuning_job_arn("HyperParameterTuningJobArn"): opt String,
        /// Tuning job status.
        hyper_parameter_tuning_job_status("HyperParameterTuningJobStatus"): opt HyperParameterTuningJobStatus,
        /// Search strategy.
        strategy("Strategy"): opt HyperParameterTuningJobStrategyType,
        /// When the job was created.
        creation_time("CreationTime"): opt DateTime<Utc>,
        /// When the job ended.
        hyper_parameter_tuning_end_time("HyperParameterTuningEndTime"): opt DateTime<Utc>,
        /// When the status last changed.
        last_modified_time("LastModifiedTime"): opt DateTime<Utc>,
        /// Training job counts by status.
        training_job_status_counters("TrainingJobStatusCounters"): opt TrainingJobStatusCounters,
        /// Training job counts by objective status.
        objective_status_counters("ObjectiveStatusCounters"): opt ObjectiveStatusCounters,
        /// Job count limits.
        resource_limits("ResourceLimits"): opt ResourceLimits,
    }
}
