//! Training job requests.

use chrono::{DateTime, Utc};

use super::{check_page, check_tags};
use crate::patterns::{ANY_TEXT, ENTITY_NAME, NAME_CONTAINS, ROLE_ARN};
use crate::types::{
    AlgorithmSpecification, Channel, CheckpointConfig, DebugHookConfig, DebugRuleConfiguration,
    ExperimentConfig, OutputDataConfig, ResourceConfig, SortBy, SortOrder, StoppingCondition, Tag,
    TensorBoardOutputConfig, TrainingJobStatus, VpcConfig,
};
use crate::validate::{Validate, Validator};

fn check_training_job_name(v: &mut Validator, name: Option<&str>) {
    v.string("TrainingJobName", name)
        .required()
        .length(1, 63)
        .pattern(&ENTITY_NAME);
}

shape! {
    /// Input for the `CreateTrainingJob` operation.
    pub struct CreateTrainingJobInput {
        /// Name of the training job, unique per account and region.
        training_job_name("TrainingJobName"): opt String,
        /// Algorithm-specific hyperparameters.
        hyper_parameters("HyperParameters"): map String,
        /// Training image or algorithm resource.
        algorithm_specification("AlgorithmSpecification"): opt AlgorithmSpecification,
        /// IAM role assumed by the job.
        role_arn("RoleArn"): opt String,
        /// Input channels.
        input_data_config("InputDataConfig"): list Channel,
        /// Where model artifacts are written.
        output_data_config("OutputDataConfig"): opt OutputDataConfig,
        /// Compute resources.
        resource_config("ResourceConfig"): opt ResourceConfig,
        /// VPC attachment.
        vpc_config("VpcConfig"): opt VpcConfig,
        /// Time limits.
        stopping_condition("StoppingCondition"): opt StoppingCondition,
        /// Tags for the job.
        tags("Tags"): list Tag,
        /// Block outbound network calls from the container.
        enable_network_isolation("EnableNetworkIsolation"): opt bool,
        /// Encrypt traffic between training instances.
        enable_inter_container_traffic_encryption("EnableInterContainerTrafficEncryption"): opt bool,
        /// Train on spot instances.
        enable_managed_spot_training("EnableManagedSpotTraining"): opt bool,
        /// Checkpoint location for spot training.
        checkpoint_config("CheckpointConfig"): opt CheckpointConfig,
        /// Debugger hook.
        debug_hook_config("DebugHookConfig"): opt DebugHookConfig,
        /// Debugger rules.
        debug_rule_configurations("DebugRuleConfigurations"): list DebugRuleConfiguration,
        /// TensorBoard output.
        tensor_board_output_config("TensorBoardOutputConfig"): opt TensorBoardOutputConfig,
        /// Experiment association.
        experiment_config("ExperimentConfig"): opt ExperimentConfig,
    }
}

impl Validate for CreateTrainingJobInput {
    fn check(&self, v: &mut Validator) {
        check_training_job_name(v, self.training_job_name.as_deref());
        v.map("HyperParameters", self.hyper_parameters.as_ref())
            .max_entries(100)
            .key_length(0, 256)
            .key_pattern(&ANY_TEXT)
            .value_length(0, 2500)
            .value_pattern(&ANY_TEXT);
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
        v.nested("OutputDataConfig", self.output_data_config.as_ref())
            .required();
        v.nested("ResourceConfig", self.resource_config.as_ref())
            .required();
        v.nested("VpcConfig", self.vpc_config.as_ref());
        v.nested("StoppingCondition", self.stopping_condition.as_ref())
            .required();
        check_tags(v, self.tags.as_deref());
        v.nested("CheckpointConfig", self.checkpoint_config.as_ref());
        v.nested("DebugHookConfig", self.debug_hook_config.as_ref());
        v.list(
            "DebugRuleConfigurations",
            self.debug_rule_configurations.as_deref(),
        )
        .length(0, 20)
        .each();
        v.nested(
            "TensorBoardOutputConfig",
            self.tensor_board_output_config.as_ref(),
        );
        v.nested("ExperimentConfig", self.experiment_config.as_ref());
    }
}

shape! {
    /// Input for the `DescribeTrainingJob` operation.
    pub struct DescribeTrainingJobInput {
        /// Name of the training job.
        training_job_name("TrainingJobName"): opt String,
    }
}

impl Validate for DescribeTrainingJobInput {
    fn check(&self, v: &mut Validator) {
        check_training_job_name(v, self.training_job_name.as_deref());
    }
}

shape! {
    /// Input for the `ListTrainingJobs` operation.
    pub struct ListTrainingJobsInput {
        /// Continuation token from a previous page.
        next_token("NextToken"): opt String,
        /// Page size.
        max_results("MaxResults"): opt i32,
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
        status_equals("StatusEquals"): opt TrainingJobStatus,
        /// Sort key.
        sort_by("SortBy"): opt SortBy,
        /// Sort direction.
        sort_order("SortOrder"): opt SortOrder,
    }
}

impl Validate for ListTrainingJobsInput {
    fn check(&self, v: &mut Validator) {
        check_page(v, self.next_token.as_deref(), self.max_results);
        v.string("NameContains", self.name_contains.as_deref())
            .length(0, 63)
            .pattern(&NAME_CONTAINS);
        v.enumeration("StatusEquals", self.status_equals.as_ref());
        v.enumeration("SortBy", self.sort_by.as_ref());
        v.enumeration("SortOrder", self.sort_order.as_ref());
    }
}

shape! {
    /// Input for the `StopTrainingJob` operation.
    pub struct StopTrainingJobInput {
        /// Name of the training job.
        training_job_name("TrainingJobName"): opt String,
    }
}

impl Validate for StopTrainingJobInput {
    fn check(&self, v: &mut Validator) {
        check_training_job_name(v, self.training_job_name.as_deref());
    }
}
