//! Model monitoring types.

use chrono::{DateTime, Utc};

use super::{ProcessingInstanceType, VpcConfig};
use crate::patterns::{
    ANY_MULTILINE, ANY_TEXT, ENTITY_NAME, ENVIRONMENT_KEY, ROLE_ARN, S3_URI, SCHEDULE_EXPRESSION,
};
use crate::validate::{Validate, Validator};

string_enum! {
    /// State of a monitoring schedule.
    pub enum ScheduleStatus {
        Pending => "Pending",
        Failed => "Failed",
        Scheduled => "Scheduled",
        Stopped => "Stopped",
    }
}

string_enum! {
    /// State of one monitoring execution.
    pub enum ExecutionStatus {
        Pending => "Pending",
        Completed => "Completed",
        CompletedWithViolations => "CompletedWithViolations",
        InProgress => "InProgress",
        Failed => "Failed",
        Stopping => "Stopping",
        Stopped => "Stopped",
    }
}

string_enum! {
    /// What a monitoring schedule checks.
    pub enum MonitoringType {
        DataQuality => "DataQuality",
        ModelQuality => "ModelQuality",
        ModelBias => "ModelBias",
        ModelExplainability => "ModelExplainability",
    }
}

string_enum! {
    /// Sort key for monitoring schedule listings.
    pub enum MonitoringScheduleSortKey {
        Name => "Name",
        CreationTime => "CreationTime",
        Status => "Status",
    }
}

string_enum! {
    /// Sort key for monitoring execution listings.
    pub enum MonitoringExecutionSortKey {
        CreationTime => "CreationTime",
        ScheduledTime => "ScheduledTime",
        Status => "Status",
    }
}

string_enum! {
    /// How captured data reaches the monitoring container.
    pub enum ProcessingS3InputMode {
        Pipe => "Pipe",
        File => "File",
    }
}

string_enum! {
    /// How captured data is distributed across monitoring instances.
    pub enum ProcessingS3DataDistributionType {
        FullyReplicated => "FullyReplicated",
        ShardedByS3Key => "ShardedByS3Key",
    }
}

string_enum! {
    /// When monitoring results are uploaded.
    pub enum ProcessingS3UploadMode {
        Continuous => "Continuous",
        EndOfJob => "EndOfJob",
    }
}

shape! {
    /// Schedule and job definition of a monitoring schedule.
    pub struct MonitoringScheduleConfig {
        /// When executions run.
        schedule_config("ScheduleConfig"): opt ScheduleConfig,
        /// What each execution does.
        monitoring_job_definition("MonitoringJobDefinition"): opt MonitoringJobDefinition,
        /// Name of a separately created job definition.
        monitoring_job_definition_name("MonitoringJobDefinitionName"): opt String,
        /// What the schedule checks.
        monitoring_type("MonitoringType"): opt MonitoringType,
    }
}

impl Validate for MonitoringScheduleConfig {
    fn check(&self, v: &mut Validator) {
        v.nested("ScheduleConfig", self.schedule_config.as_ref());
        v.nested(
            "MonitoringJobDefinition",
            self.monitoring_job_definition.as_ref(),
        );
        v.string(
            "MonitoringJobDefinitionName",
            self.monitoring_job_definition_name.as_deref(),
        )
        .length(1, 63)
        .pattern(&ENTITY_NAME);
        v.enumeration("MonitoringType", self.monitoring_type.as_ref());
    }
}

shape! {
    /// Cron schedule of a monitoring schedule.
    pub struct ScheduleConfig {
        /// Cron expression, such as `cron(0 * ? * * *)`.
        schedule_expression("ScheduleExpression"): opt String,
    }
}

impl Validate for ScheduleConfig {
    fn check(&self, v: &mut Validator) {
        v.string("ScheduleExpression", self.schedule_expression.as_deref())
            .required()
            .length(1, 256)
            .pattern(&SCHEDULE_EXPRESSION);
    }
}

shape! {
    /// The processing job run by each monitoring execution.
    pub struct MonitoringJobDefinition {
        /// Baseline constraints and statistics.
        baseline_config("BaselineConfig"): opt MonitoringBaselineConfig,
        /// Captured data to analyze.
        monitoring_inputs("MonitoringInputs"): list MonitoringInput,
        /// Where results are written.
        monitoring_output_config("MonitoringOutputConfig"): opt MonitoringOutputConfig,
        /// Compute resources.
        monitoring_resources("MonitoringResources"): opt MonitoringResources,
        /// Container that performs the analysis.
        monitoring_app_specification("MonitoringAppSpecification"): opt MonitoringAppSpecification,
        /// Time limit.
        stopping_condition("StoppingCondition"): opt MonitoringStoppingCondition,
        /// Environment variables of the container.
        environment("Environment"): map String,
        /// Networking options.
        network_config("NetworkConfig"): opt NetworkConfig,
        /// IAM role the job runs as.
        role_arn("RoleArn"): opt String,
    }
}

impl Validate for MonitoringJobDefinition {
    fn check(&self, v: &mut Validator) {
        v.nested("BaselineConfig", self.baseline_config.as_ref());
        v.list("MonitoringInputs", self.monitoring_inputs.as_deref())
            .required()
            .length(1, 1)
            .each();
        v.nested(
            "MonitoringOutputConfig",
            self.monitoring_output_config.as_ref(),
        )
        .required();
        v.nested("MonitoringResources", self.monitoring_resources.as_ref())
            .required();
        v.nested(
            "MonitoringAppSpecification",
            self.monitoring_app_specification.as_ref(),
        )
        .required();
        v.nested("StoppingCondition", self.stopping_condition.as_ref());
        v.map("Environment", self.environment.as_ref())
            .max_entries(50)
            .key_length(0, 256)
            .key_pattern(&ENVIRONMENT_KEY)
            .value_length(0, 256)
            .value_pattern(&ANY_MULTILINE);
        v.nested("NetworkConfig", self.network_config.as_ref());
        v.string("RoleArn", self.role_arn.as_deref())
            .required()
            .length(20, 2048)
            .pattern(&ROLE_ARN);
    }
}

shape! {
    /// Baseline resources results are compared against.
    pub struct MonitoringBaselineConfig {
        /// Baseline constraints.
        constraints_resource("ConstraintsResource"): opt MonitoringConstraintsResource,
        /// Baseline statistics.
        statistics_resource("StatisticsResource"): opt MonitoringStatisticsResource,
    }
}

impl Validate for MonitoringBaselineConfig {
    fn check(&self, v: &mut Validator) {
        v.nested("ConstraintsResource", self.constraints_resource.as_ref());
        v.nested("StatisticsResource", self.statistics_resource.as_ref());
    }
}

shape! {
    /// Baseline constraints file.
    pub struct MonitoringConstraintsResource {
        /// S3 URI of the constraints file.
        s3_uri("S3Uri"): opt String,
    }
}

impl Validate for MonitoringConstraintsResource {
    fn check(&self, v: &mut Validator) {
        v.string("S3Uri", self.s3_uri.as_deref())
            .length(0, 1024)
            .pattern(&S3_URI);
    }
}

shape! {
    /// Baseline statistics file.
    pub struct MonitoringStatisticsResource {
        /// S3 URI of the statistics file.
        s3_uri("S3Uri"): opt String,
    }
}

impl Validate for MonitoringStatisticsResource {
    fn check(&self, v: &mut Validator) {
        v.string("S3Uri", self.s3_uri.as_deref())
            .length(0, 1024)
            .pattern(&S3_URI);
    }
}

shape! {
    /// One input of a monitoring job.
    pub struct MonitoringInput {
        /// Endpoint whose captured data is analyzed.
        endpoint_input("EndpointInput"): opt EndpointInput,
    }
}

impl Validate for MonitoringInput {
    fn check(&self, v: &mut Validator) {
        v.nested("EndpointInput", self.endpoint_input.as_ref())
            .required();
    }
}

shape! {
    /// Endpoint data captured for monitoring.
    pub struct EndpointInput {
        /// Endpoint name.
        endpoint_name("EndpointName"): opt String,
        /// Where the data is mounted in the container.
        local_path("LocalPath"): opt String,
        /// Pipe or file input.
        s3_input_mode("S3InputMode"): opt ProcessingS3InputMode,
        /// Replicated or sharded input.
        s3_data_distribution_type("S3DataDistributionType"): opt ProcessingS3DataDistributionType,
    }
}

impl Validate for EndpointInput {
    fn check(&self, v: &mut Validator) {
        v.string("EndpointName", self.endpoint_name.as_deref())
            .required()
            .length(0, 63)
            .pattern(&ENTITY_NAME);
        v.string("LocalPath", self.local_path.as_deref())
            .required()
            .length(0, 256)
            .pattern(&ANY_TEXT);
        v.enumeration("S3InputMode", self.s3_input_mode.as_ref());
        v.enumeration(
            "S3DataDistributionType",
            self.s3_data_distribution_type.as_ref(),
        );
    }
}

shape! {
    /// Outputs of a monitoring job.
    pub struct MonitoringOutputConfig {
        /// Output locations.
        monitoring_outputs("MonitoringOutputs"): list MonitoringOutput,
        /// KMS key used to encrypt results.
        kms_key_id("KmsKeyId"): opt String,
    }
}

impl Validate for MonitoringOutputConfig {
    fn check(&self, v: &mut Validator) {
        v.list("MonitoringOutputs", self.monitoring_outputs.as_deref())
            .required()
            .length(1, 1)
            .each();
        v.string("KmsKeyId", self.kms_key_id.as_deref())
            .length(0, 2048)
            .pattern(&ANY_TEXT);
    }
}

shape! {
    /// One output location of a monitoring job.
    pub struct MonitoringOutput {
        /// S3 destination.
        s3_output("S3Output"): opt MonitoringS3Output,
    }
}

impl Validate for MonitoringOutput {
    fn check(&self, v: &mut Validator) {
        v.nested("S3Output", self.s3_output.as_ref()).required();
    }
}

shape! {
    /// S3 destination of monitoring results.
    pub struct MonitoringS3Output {
        /// S3 URI results are uploaded to.
        s3_uri("S3Uri"): opt String,
        /// Local directory results are read from.
        local_path("LocalPath"): opt String,
        /// When results are uploaded.
        s3_upload_mode("S3UploadMode"): opt ProcessingS3UploadMode,
    }
}

impl Validate for MonitoringS3Output {
    fn check(&self, v: &mut Validator) {
        v.string("S3Uri", self.s3_uri.as_deref())
            .required()
            .length(0, 512)
            .pattern(&S3_URI);
        v.string("LocalPath", self.local_path.as_deref())
            .required()
            .length(0, 256)
            .pattern(&ANY_TEXT);
        v.enumeration("S3UploadMode", self.s3_upload_mode.as_ref());
    }
}

shape! {
    /// Compute resources of a monitoring job.
    pub struct MonitoringResources {
        /// Cluster configuration.
        cluster_config("ClusterConfig"): opt MonitoringClusterConfig,
    }
}

impl Validate for MonitoringResources {
    fn check(&self, v: &mut Validator) {
        v.nested("ClusterConfig", self.cluster_config.as_ref())
            .required();
    }
}

shape! {
    /// Cluster that runs a monitoring job.
    pub struct MonitoringClusterConfig {
        /// Number of instances.
        instance_count("InstanceCount"): opt i32,
        /// Instance type.
        instance_type("InstanceType"): opt ProcessingInstanceType,
        /// Storage volume size.
        volume_size_in_gb("VolumeSizeInGB"): opt i32,
        /// KMS key for the storage volume.
        volume_kms_key_id("VolumeKmsKeyId"): opt String,
    }
}

impl Validate for MonitoringClusterConfig {
    fn check(&self, v: &mut Validator) {
        v.int("InstanceCount", self.instance_count)
            .required()
            .range(1, 100);
        v.enumeration("InstanceType", self.instance_type.as_ref())
            .required();
        v.int("VolumeSizeInGB", self.volume_size_in_gb)
            .required()
            .range(1, 16384);
        v.string("VolumeKmsKeyId", self.volume_kms_key_id.as_deref())
            .length(0, 2048)
            .pattern(&ANY_TEXT);
    }
}

shape! {
    /// Container that analyzes captured data.
    pub struct MonitoringAppSpecification {
        /// Container image.
        image_uri("ImageUri"): opt String,
        /// Entrypoint override.
        container_entrypoint("ContainerEntrypoint"): list String,
        /// Arguments passed to the container.
        container_arguments("ContainerArguments"): list String,
        /// Script run on each record before analysis.
        record_preprocessor_source_uri("RecordPreprocessorSourceUri"): opt String,
        /// Script run after analysis.
        post_analytics_processor_source_uri("PostAnalyticsProcessorSourceUri"): opt String,
    }
}

impl Validate for MonitoringAppSpecification {
    fn check(&self, v: &mut Validator) {
        v.string("ImageUri", self.image_uri.as_deref())
            .required()
            .length(0, 255)
            .pattern(&ANY_TEXT);
        v.list("ContainerEntrypoint", self.container_entrypoint.as_deref())
            .length(1, 100)
            .item_length(1, 256)
            .item_pattern(&ANY_TEXT);
        v.list("ContainerArguments", self.container_arguments.as_deref())
            .length(1, 50)
            .item_length(1, 256)
            .item_pattern(&ANY_TEXT);
        v.string(
            "RecordPreprocessorSourceUri",
            self.record_preprocessor_source_uri.as_deref(),
        )
        .length(0, 1024)
        .pattern(&S3_URI);
        v.string(
            "PostAnalyticsProcessorSourceUri",
            self.post_analytics_processor_source_uri.as_deref(),
        )
        .length(0, 1024)
        .pattern(&S3_URI);
    }
}

shape! {
    /// Time limit of a monitoring job.
    pub struct MonitoringStoppingCondition {
        /// Maximum run time.
        max_runtime_in_seconds("MaxRuntimeInSeconds"): opt i32,
    }
}

impl Validate for MonitoringStoppingCondition {
    fn check(&self, v: &mut Validator) {
        v.int("MaxRuntimeInSeconds", self.max_runtime_in_seconds)
            .required()
            .range(1, 86400);
    }
}

shape! {
    /// Networking options of a monitoring job.
    pub struct NetworkConfig {
        /// Whether traffic between instances is encrypted.
        enable_inter_container_traffic_encryption("EnableInterContainerTrafficEncryption"): opt bool,
        /// Whether outbound network calls are blocked.
        enable_network_isolation("EnableNetworkIsolation"): opt bool,
        /// VPC attachment.
        vpc_config("VpcConfig"): opt VpcConfig,
    }
}

impl Validate for NetworkConfig {
    fn check(&self, v: &mut Validator) {
        v.nested("VpcConfig", self.vpc_config.as_ref());
    }
}

shape! {
    /// Summary of one monitoring execution.
    pub struct MonitoringExecutionSummary {
        /// Schedule that ran the execution.
        monitoring_schedule_name("MonitoringScheduleName"): opt String,
        /// When the execution was scheduled.
        scheduled_time("ScheduledTime"): opt DateTime<Utc>,
        /// When the execution was created.
        creation_time("CreationTime"): opt DateTime<Utc>,
        /// When the status last changed.
        last_modified_time("LastModifiedTime"): opt DateTime<Utc>,
        /// Execution state.
        monitoring_execution_status("MonitoringExecutionStatus"): opt ExecutionStatus,
        /// ARN of the processing job that ran.
        processing_job_arn("ProcessingJobArn"): opt String,
        /// Endpoint that was monitored.
        endpoint_name("EndpointName"): opt String,
        /// Why the execution failed.
        failure_reason("FailureReason"): opt String,
    }
}

shape! {
    /// Summary of a monitoring schedule in a listing.
    pub struct MonitoringScheduleSummary {
        /// Schedule name.
        monitoring_schedule_name("MonitoringScheduleName"): opt String,
        /// Schedule ARN.
        monitoring_schedule_arn("MonitoringScheduleArn"): opt String,
        /// When the schedule was created.
        creation_time("CreationTime"): opt DateTime<Utc>,
        /// When the schedule was last modified.
        last_modified_time("LastModifiedTime"): opt DateTime<Utc>,
        /// Schedule state.
        monitoring_schedule_status("MonitoringScheduleStatus"): opt ScheduleStatus,
        /// Endpoint being monitored.
        endpoint_name("EndpointName"): opt String,
    }
}
