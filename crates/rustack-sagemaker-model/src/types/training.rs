//! Training job types.

use chrono::{DateTime, Utc};

use super::{ExperimentConfig, MetricData, ProcessingInstanceType, Tag, VpcConfig};
use crate::patterns::{
    ANY_TEXT, CHANNEL_NAME, CONTAINER_IMAGE, DIRECTORY_PATH, NAME_OR_ARN, S3_URI,
};
use crate::validate::{Validate, Validator};

string_enum! {
    /// Primary status of a training job.
    pub enum TrainingJobStatus {
        InProgress => "InProgress",
        Completed => "Completed",
        Failed => "Failed",
        Stopping => "Stopping",
        Stopped => "Stopped",
    }
}

string_enum! {
    /// Detailed progress of a training job.
    pub enum SecondaryStatus {
        Starting => "Starting",
        LaunchingMlInstances => "LaunchingMLInstances",
        PreparingTrainingStack => "PreparingTrainingStack",
        Downloading => "Downloading",
        DownloadingTrainingImage => "DownloadingTrainingImage",
        Training => "Training",
        Uploading => "Uploading",
        Stopping => "Stopping",
        Stopped => "Stopped",
        MaxRuntimeExceeded => "MaxRuntimeExceeded",
        Completed => "Completed",
        Failed => "Failed",
        Interrupted => "Interrupted",
        MaxWaitTimeExceeded => "MaxWaitTimeExceeded",
    }
}

string_enum! {
    /// ML compute instance types for training.
    pub enum TrainingInstanceType {
        MlM4Xlarge => "ml.m4.xlarge",
        MlM42xlarge => "ml.m4.2xlarge",
        MlM44xlarge => "ml.m4.4xlarge",
        MlM410xlarge => "ml.m4.10xlarge",
        MlM416xlarge => "ml.m4.16xlarge",
        MlG4dnXlarge => "ml.g4dn.xlarge",
        MlG4dn2xlarge => "ml.g4dn.2xlarge",
        MlG4dn4xlarge => "ml.g4dn.4xlarge",
        MlG4dn8xlarge => "ml.g4dn.8xlarge",
        MlG4dn12xlarge => "ml.g4dn.12xlarge",
        MlG4dn16xlarge => "ml.g4dn.16xlarge",
        MlM5Large => "ml.m5.large",
        MlM5Xlarge => "ml.m5.xlarge",
        MlM52xlarge => "ml.m5.2xlarge",
        MlM54xlarge => "ml.m5.4xlarge",
        MlM512xlarge => "ml.m5.12xlarge",
        MlM524xlarge => "ml.m5.24xlarge",
        MlC4Xlarge => "ml.c4.xlarge",
        MlC42xlarge => "ml.c4.2xlarge",
        MlC44xlarge => "ml.c4.4xlarge",
        MlC48xlarge => "ml.c4.8xlarge",
        MlP2Xlarge => "ml.p2.xlarge",
        MlP28xlarge => "ml.p2.8xlarge",
        MlP216xlarge => "ml.p2.16xlarge",
        MlP32xlarge => "ml.p3.2xlarge",
        MlP38xlarge => "ml.p3.8xlarge",
        MlP316xlarge => "ml.p3.16xlarge",
        MlP3dn24xlarge => "ml.p3dn.24xlarge",
        MlC5Xlarge => "ml.c5.xlarge",
        MlC52xlarge => "ml.c5.2xlarge",
        MlC54xlarge => "ml.c5.4xlarge",
        MlC59xlarge => "ml.c5.9xlarge",
        MlC518xlarge => "ml.c5.18xlarge",
        MlC5nXlarge => "ml.c5n.xlarge",
        MlC5n2xlarge => "ml.c5n.2xlarge",
        MlC5n4xlarge => "ml.c5n.4xlarge",
        MlC5n9xlarge => "ml.c5n.9xlarge",
        MlC5n18xlarge => "ml.c5n.18xlarge",
    }
}

string_enum! {
    /// How training data reaches the algorithm container.
    pub enum TrainingInputMode {
        /// Streamed through a Unix named pipe.
        Pipe => "Pipe",
        /// Downloaded to the ML storage volume first.
        File => "File",
    }
}

string_enum! {
    /// How an S3 URI selects training objects.
    pub enum S3DataType {
        ManifestFile => "ManifestFile",
        S3Prefix => "S3Prefix",
        AugmentedManifestFile => "AugmentedManifestFile",
    }
}

string_enum! {
    /// How objects are distributed across training instances.
    pub enum S3DataDistribution {
        FullyReplicated => "FullyReplicated",
        ShardedByS3Key => "ShardedByS3Key",
    }
}

string_enum! {
    /// Compression applied to input data.
    pub enum CompressionType {
        None => "None",
        Gzip => "Gzip",
    }
}

string_enum! {
    /// Record wrapping applied to input data.
    pub enum RecordWrapper {
        None => "None",
        RecordIo => "RecordIO",
    }
}

string_enum! {
    /// Access mode of a file-system data source.
    pub enum FileSystemAccessMode {
        ReadWrite => "rw",
        ReadOnly => "ro",
    }
}

string_enum! {
    /// Kind of file system backing a data source.
    pub enum FileSystemType {
        Efs => "EFS",
        FsxLustre => "FSxLustre",
    }
}

string_enum! {
    /// Status of a debugger rule evaluation job.
    pub enum RuleEvaluationStatus {
        InProgress => "InProgress",
        NoIssuesFound => "NoIssuesFound",
        IssuesFound => "IssuesFound",
        Error => "Error",
        Stopping => "Stopping",
        Stopped => "Stopped",
    }
}

shape! {
    /// The training algorithm and its input mode.
    pub struct AlgorithmSpecification {
        /// Registry path of the training image.
        training_image("TrainingImage"): opt String,
        /// Name or ARN of an algorithm resource.
        algorithm_name("AlgorithmName"): opt String,
        /// How the algorithm reads its input.
        training_input_mode("TrainingInputMode"): opt TrainingInputMode,
        /// Metrics to scrape from the algorithm logs.
        metric_definitions("MetricDefinitions"): list MetricDefinition,
        /// Publish metrics as a time series to the experiments service.
        enable_sage_maker_metrics_time_series("EnableSageMakerMetricsTimeSeries"): opt bool,
    }
}

impl Validate for AlgorithmSpecification {
    fn check(&self, v: &mut Validator) {
        v.string("TrainingImage", self.training_image.as_deref())
            .length(0, 255)
            .pattern(&ANY_TEXT);
        v.string("AlgorithmName", self.algorithm_name.as_deref())
            .length(1, 170)
            .pattern(&NAME_OR_ARN);
        v.enumeration("TrainingInputMode", self.training_input_mode.as_ref())
            .required();
        v.list("MetricDefinitions", self.metric_definitions.as_deref())
            .length(0, 40)
            .each();
    }
}

shape! {
    /// A metric and the regex that extracts it from the algorithm logs.
    pub struct MetricDefinition {
        /// The metric name.
        name("Name"): opt String,
        /// Regular expression searched in the logs.
        regex("Regex"): opt String,
    }
}

impl Validate for MetricDefinition {
    fn check(&self, v: &mut Validator) {
        v.string("Name", self.name.as_deref()).required().length(1, 255);
        v.string("Regex", self.regex.as_deref()).required().length(1, 500);
    }
}

shape! {
    /// A named input channel for training.
    pub struct Channel {
        /// Channel name, such as `train` or `validation`.
        channel_name("ChannelName"): opt String,
        /// Where the channel data lives.
        data_source("DataSource"): opt DataSource,
        /// MIME type of the data.
        content_type("ContentType"): opt String,
        /// Compression of the data.
        compression_type("CompressionType"): opt CompressionType,
        /// RecordIO wrapping of the data.
        record_wrapper_type("RecordWrapperType"): opt RecordWrapper,
        /// Overrides the algorithm's input mode for this channel.
        input_mode("InputMode"): opt TrainingInputMode,
        /// Shuffles S3 objects between epochs.
        shuffle_config("ShuffleConfig"): opt ShuffleConfig,
    }
}

impl Validate for Channel {
    fn check(&self, v: &mut Validator) {
        v.string("ChannelName", self.channel_name.as_deref())
            .required()
            .length(1, 64)
            .pattern(&CHANNEL_NAME);
        v.nested("DataSource", self.data_source.as_ref()).required();
        v.string("ContentType", self.content_type.as_deref())
            .length(0, 256)
            .pattern(&ANY_TEXT);
        v.enumeration("CompressionType", self.compression_type.as_ref());
        v.enumeration("RecordWrapperType", self.record_wrapper_type.as_ref());
        v.enumeration("InputMode", self.input_mode.as_ref());
        v.nested("ShuffleConfig", self.shuffle_config.as_ref());
    }
}

shape! {
    /// Location of channel data.
    pub struct DataSource {
        /// Data in S3.
        s3_data_source("S3DataSource"): opt S3DataSource,
        /// Data on an EFS or FSx for Lustre file system.
        file_system_data_source("FileSystemDataSource"): opt FileSystemDataSource,
    }
}

impl Validate for DataSource {
    fn check(&self, v: &mut Validator) {
        v.nested("S3DataSource", self.s3_data_source.as_ref());
        v.nested("FileSystemDataSource", self.file_system_data_source.as_ref());
    }
}

shape! {
    /// Training data stored in S3.
    pub struct S3DataSource {
        /// How `S3Uri` selects objects.
        s3_data_type("S3DataType"): opt S3DataType,
        /// Key prefix or manifest location.
        s3_uri("S3Uri"): opt String,
        /// Whether every instance receives the full data set.
        s3_data_distribution_type("S3DataDistributionType"): opt S3DataDistribution,
        /// Attribute names to use from an augmented manifest.
        attribute_names("AttributeNames"): list String,
    }
}

impl Validate for S3DataSource {
    fn check(&self, v: &mut Validator) {
        v.enumeration("S3DataType", self.s3_data_type.as_ref()).required();
        v.string("S3Uri", self.s3_uri.as_deref())
            .required()
            .length(0, 1024)
            .pattern(&S3_URI);
        v.enumeration(
            "S3DataDistributionType",
            self.s3_data_distribution_type.as_ref(),
        );
        v.list("AttributeNames", self.attribute_names.as_deref())
            .length(0, 16)
            .item_length(1, 256);
    }
}

shape! {
    /// Training data stored on a file system.
    pub struct FileSystemDataSource {
        /// File system ID.
        file_system_id("FileSystemId"): opt String,
        /// Read-write or read-only access.
        file_system_access_mode("FileSystemAccessMode"): opt FileSystemAccessMode,
        /// EFS or FSx for Lustre.
        file_system_type("FileSystemType"): opt FileSystemType,
        /// Full path to the directory.
        directory_path("DirectoryPath"): opt String,
    }
}

impl Validate for FileSystemDataSource {
    fn check(&self, v: &mut Validator) {
        v.string("FileSystemId", self.file_system_id.as_deref())
            .required()
            .min_length(11);
        v.enumeration("FileSystemAccessMode", self.file_system_access_mode.as_ref())
            .required();
        v.enumeration("FileSystemType", self.file_system_type.as_ref())
            .required();
        v.string("DirectoryPath", self.directory_path.as_deref())
            .required()
            .length(0, 4096)
            .pattern(&DIRECTORY_PATH);
    }
}

shape! {
    /// Seed for shuffling S3 objects between epochs.
    pub struct ShuffleConfig {
        /// Shuffle seed.
        seed("Seed"): opt i64,
    }
}

impl Validate for ShuffleConfig {
    fn check(&self, v: &mut Validator) {
        v.int("Seed", self.seed).required();
    }
}

shape! {
    /// Where model artifacts are written.
    pub struct OutputDataConfig {
        /// KMS key used to encrypt artifacts at rest.
        kms_key_id("KmsKeyId"): opt String,
        /// S3 prefix for artifacts.
        s3_output_path("S3OutputPath"): opt String,
    }
}

impl Validate for OutputDataConfig {
    fn check(&self, v: &mut Validator) {
        v.string("KmsKeyId", self.kms_key_id.as_deref())
            .length(0, 2048)
            .pattern(&ANY_TEXT);
        v.string("S3OutputPath", self.s3_output_path.as_deref())
            .required()
            .length(0, 1024)
            .pattern(&S3_URI);
    }
}

shape! {
    /// Compute resources for a training job.
    pub struct ResourceConfig {
        /// ML compute instance type.
        instance_type("InstanceType"): opt TrainingInstanceType,
        /// Number of instances; more than one runs distributed training.
        instance_count("InstanceCount"): opt i32,
        /// Size of the attached ML storage volume.
        volume_size_in_gb("VolumeSizeInGB"): opt i32,
        /// KMS key for the storage volume.
        volume_kms_key_id("VolumeKmsKeyId"): opt String,
    }
}

impl Validate for ResourceConfig {
    fn check(&self, v: &mut Validator) {
        v.enumeration("InstanceType", self.instance_type.as_ref()).required();
        v.int("InstanceCount", self.instance_count).required().min(1);
        v.int("VolumeSizeInGB", self.volume_size_in_gb).required().min(1);
        v.string("VolumeKmsKeyId", self.volume_kms_key_id.as_deref())
            .length(0, 2048)
            .pattern(&ANY_TEXT);
    }
}

shape! {
    /// Time limits for a job.
    pub struct StoppingCondition {
        /// Maximum run time before the job is stopped.
        max_runtime_in_seconds("MaxRuntimeInSeconds"): opt i32,
        /// Maximum time to wait for spot capacity, run time included.
        max_wait_time_in_seconds("MaxWaitTimeInSeconds"): opt i32,
    }
}

impl Validate for StoppingCondition {
    fn check(&self, v: &mut Validator) {
        v.int("MaxRuntimeInSeconds", self.max_runtime_in_seconds).min(1);
        v.int("MaxWaitTimeInSeconds", self.max_wait_time_in_seconds).min(1);
    }
}

shape! {
    /// Checkpoint storage for spot training.
    pub struct CheckpointConfig {
        /// S3 location for checkpoints.
        s3_uri("S3Uri"): opt String,
        /// Local checkpoint directory in the container.
        local_path("LocalPath"): opt String,
    }
}

impl Validate for CheckpointConfig {
    fn check(&self, v: &mut Validator) {
        v.string("S3Uri", self.s3_uri.as_deref())
            .required()
            .length(0, 1024)
            .pattern(&S3_URI);
        v.string("LocalPath", self.local_path.as_deref())
            .length(0, 4096)
            .pattern(&DIRECTORY_PATH);
    }
}

shape! {
    /// Location of the trained model.
    pub struct ModelArtifacts {
        /// S3 path of the model artifacts.
        s3_model_artifacts("S3ModelArtifacts"): opt String,
    }
}

shape! {
    /// One step in a training job's secondary status history.
    pub struct SecondaryStatusTransition {
        /// Status entered.
        status("Status"): opt SecondaryStatus,
        /// When the status was entered.
        start_time("StartTime"): opt DateTime<Utc>,
        /// When the status was left.
        end_time("EndTime"): opt DateTime<Utc>,
        /// Details of the transition.
        status_message("StatusMessage"): opt String,
    }
}

shape! {
    /// Debugger hook configuration.
    pub struct DebugHookConfig {
        /// Local path tensors are written to.
        local_path("LocalPath"): opt String,
        /// S3 path tensors are uploaded to.
        s3_output_path("S3OutputPath"): opt String,
        /// Hook parameters.
        hook_parameters("HookParameters"): map String,
        /// Tensor collections to save.
        collection_configurations("CollectionConfigurations"): list CollectionConfiguration,
    }
}

impl Validate for DebugHookConfig {
    fn check(&self, v: &mut Validator) {
        v.string("LocalPath", self.local_path.as_deref())
            .length(0, 4096)
            .pattern(&DIRECTORY_PATH);
        v.string("S3OutputPath", self.s3_output_path.as_deref())
            .required()
            .length(0, 1024)
            .pattern(&S3_URI);
        v.map("HookParameters", self.hook_parameters.as_ref())
            .max_entries(20)
            .key_length(1, 256)
            .value_length(0, 256);
        v.list(
            "CollectionConfigurations",
            self.collection_configurations.as_deref(),
        )
        .length(0, 20)
        .each();
    }
}

shape! {
    /// A tensor collection saved by the debugger hook.
    pub struct CollectionConfiguration {
        /// Collection name.
        collection_name("CollectionName"): opt String,
        /// Collection parameters.
        collection_parameters("CollectionParameters"): map String,
    }
}

impl Validate for CollectionConfiguration {
    fn check(&self, v: &mut Validator) {
        v.string("CollectionName", self.collection_name.as_deref())
            .length(1, 256)
            .pattern(&ANY_TEXT);
        v.map("CollectionParameters", self.collection_parameters.as_ref())
            .max_entries(20)
            .key_length(1, 256)
            .value_length(0, 256);
    }
}

shape! {
    /// A debugger rule evaluated against a training job.
    pub struct DebugRuleConfiguration {
        /// Rule name.
        rule_configuration_name("RuleConfigurationName"): opt String,
        /// Local path for rule output.
        local_path("LocalPath"): opt String,
        /// S3 path for rule output.
        s3_output_path("S3OutputPath"): opt String,
        /// Image of the rule evaluator.
        rule_evaluator_image("RuleEvaluatorImage"): opt String,
        /// Instance type for the evaluation job.
        instance_type("InstanceType"): opt ProcessingInstanceType,
        /// Storage volume size of the evaluation job.
        volume_size_in_gb("VolumeSizeInGB"): opt i32,
        /// Rule parameters.
        rule_parameters("RuleParameters"): map String,
    }
}

impl Validate for DebugRuleConfiguration {
    fn check(&self, v: &mut Validator) {
        v.string("RuleConfigurationName", self.rule_configuration_name.as_deref())
            .required()
            .length(1, 256)
            .pattern(&ANY_TEXT);
        v.string("LocalPath", self.local_path.as_deref())
            .length(0, 4096)
            .pattern(&DIRECTORY_PATH);
        v.string("S3OutputPath", self.s3_output_path.as_deref())
            .length(0, 1024)
            .pattern(&S3_URI);
        v.string("RuleEvaluatorImage", self.rule_evaluator_image.as_deref())
            .required()
            .length(0, 255)
            .pattern(&CONTAINER_IMAGE);
        v.enumeration("InstanceType", self.instance_type.as_ref());
        v.int("VolumeSizeInGB", self.volume_size_in_gb).min(0);
        v.map("RuleParameters", self.rule_parameters.as_ref())
            .max_entries(20)
            .key_length(1, 256)
            .value_length(0, 256);
    }
}

shape! {
    /// Progress of one debugger rule evaluation.
    pub struct DebugRuleEvaluationStatus {
        /// Rule name.
        rule_configuration_name("RuleConfigurationName"): opt String,
        /// ARN of the evaluation job.
        rule_evaluation_job_arn("RuleEvaluationJobArn"): opt String,
        /// Evaluation status.
        rule_evaluation_status("RuleEvaluationStatus"): opt RuleEvaluationStatus,
        /// Details of the status.
        status_details("StatusDetails"): opt String,
        /// Last time the status changed.
        last_modified_time("LastModifiedTime"): opt DateTime<Utc>,
    }
}

shape! {
    /// TensorBoard output location.
    pub struct TensorBoardOutputConfig {
        /// Local path of the TensorBoard output.
        local_path("LocalPath"): opt String,
        /// S3 path the output is uploaded to.
        s3_output_path("S3OutputPath"): opt String,
    }
}

impl Validate for TensorBoardOutputConfig {
    fn check(&self, v: &mut Validator) {
        v.string("LocalPath", self.local_path.as_deref())
            .length(0, 4096)
            .pattern(&DIRECTORY_PATH);
        v.string("S3OutputPath", self.s3_output_path.as_deref())
            .required()
            .length(0, 1024)
            .pattern(&S3_URI);
    }
}

shape! {
    /// Complete description of a training job, as returned by search.
    pub struct TrainingJob {
        /// Training job name.
        training_job_name("TrainingJobName"): opt String,
        /// Training job ARN.
        training_job_arn("TrainingJobArn"): opt String,
        /// ARN of the tuning job that launched this job.
        tuning_job_arn("TuningJobArn"): opt String,
        /// ARN of the labeling job that created the input manifest.
        labeling_job_arn("LabelingJobArn"): opt String,
        /// ARN of the AutoML job that launched this job.
        auto_ml_job_arn("AutoMLJobArn"): opt String,
        /// Location of the trained model.
        model_artifacts("ModelArtifacts"): opt ModelArtifacts,
        /// Primary status.
        training_job_status("TrainingJobStatus"): opt TrainingJobStatus,
        /// Detailed status.
        secondary_status("SecondaryStatus"): opt SecondaryStatus,
        /// Why the job failed.
        failure_reason("FailureReason"): opt String,
        /// Algorithm hyperparameters.
        hyper_parameters("HyperParameters"): map String,
        /// Algorithm and input mode.
        algorithm_specification("AlgorithmSpecification"): opt AlgorithmSpecification,
        /// IAM role the job runs as.
        role_arn("RoleArn"): opt String,
        /// Input channels.
        input_data_config("InputDataConfig"): list Channel,
        /// Artifact location.
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
        /// Secondary status history.
        secondary_status_transitions("SecondaryStatusTransitions"): list SecondaryStatusTransition,
        /// Final metric values.
        final_metric_data_list("FinalMetricDataList"): list MetricData,
        /// Whether outbound network calls are blocked.
        enable_network_isolation("EnableNetworkIsolation"): opt bool,
        /// Whether traffic between instances is encrypted.
        enable_inter_container_traffic_encryption("EnableInterContainerTrafficEncryption"): opt bool,
        /// Whether managed spot capacity is used.
        enable_managed_spot_training("EnableManagedSpotTraining"): opt bool,
        /// Checkpoint storage.
        checkpoint_config("CheckpointConfig"): opt CheckpointConfig,
        /// Time spent training.
        training_time_in_seconds("TrainingTimeInSeconds"): opt i32,
        /// Time billed.
        billable_time_in_seconds("BillableTimeInSeconds"): opt i32,
        /// Debugger hook.
        debug_hook_config("DebugHookConfig"): opt DebugHookConfig,
        /// Experiment association.
        experiment_config("ExperimentConfig"): opt ExperimentConfig,
        /// Debugger rules.
        debug_rule_configurations("DebugRuleConfigurations"): list DebugRuleConfiguration,
        /// TensorBoard output.
        tensor_board_output_config("TensorBoardOutputConfig"): opt TensorBoardOutputConfig,
        /// Debugger rule evaluation progress.
        debug_rule_evaluation_statuses("DebugRuleEvaluationStatuses"): list DebugRuleEvaluationStatus,
        /// Resource tags.
        tags("Tags"): list Tag,
    }
}

shape! {
    /// Summary of a training job in a listing.
    pub struct TrainingJobSummary {
        /// Training job name.
        training_job_name("TrainingJobName"): opt String,
        /// Training job ARN.
        training_job_arn("TrainingJobArn"): opt String,
        /// When the job was created.
        creation_time("CreationTime"): opt DateTime<Utc>,
        /// When training ended.
        training_end_time("TrainingEndTime"): opt DateTime<Utc>,
        /// When the status last changed.
        last_modified_time("LastModifiedTime"): opt DateTime<Utc>,
        /// Primary status.
        training_job_status("TrainingJobStatus"): opt TrainingJobStatus,
    }
}
