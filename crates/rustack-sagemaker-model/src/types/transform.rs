//! Batch transform types.

use chrono::{DateTime, Utc};

use super::{CompressionType, S3DataType};
use crate::patterns::{ANY_TEXT, S3_URI};
use crate::validate::{Validate, Validator};

string_enum! {
    /// Status of a batch transform job.
    pub enum TransformJobStatus {
        InProgress => "InProgress",
        Completed => "Completed",
        Failed => "Failed",
        Stopping => "Stopping",
        Stopped => "Stopped",
    }
}

string_enum! {
    /// ML compute instance types for batch transform.
    pub enum TransformInstanceType {
        MlM4Xlarge => "ml.m4.xlarge",
        MlM42xlarge => "ml.m4.2xlarge",
        MlM44xlarge => "ml.m4.4xlarge",
        MlM410xlarge => "ml.m4.10xlarge",
        MlM416xlarge => "ml.m4.16xlarge",
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
        MlC5Xlarge => "ml.c5.xlarge",
        MlC52xlarge => "ml.c5.2xlarge",
        MlC54xlarge => "ml.c5.4xlarge",
        MlC59xlarge => "ml.c5.9xlarge",
        MlC518xlarge => "ml.c5.18xlarge",
        MlM5Large => "ml.m5.large",
        MlM5Xlarge => "ml.m5.xlarge",
        MlM52xlarge => "ml.m5.2xlarge",
        MlM54xlarge => "ml.m5.4xlarge",
        MlM512xlarge => "ml.m5.12xlarge",
        MlM524xlarge => "ml.m5.24xlarge",
    }
}

string_enum! {
    /// How many records go into one request to the model container.
    pub enum BatchStrategy {
        MultiRecord => "MultiRecord",
        SingleRecord => "SingleRecord",
    }
}

string_enum! {
    /// How input files are split into records.
    pub enum SplitType {
        None => "None",
        Line => "Line",
        RecordIo => "RecordIO",
        TfRecord => "TFRecord",
    }
}

string_enum! {
    /// How results are assembled into output files.
    pub enum AssemblyType {
        None => "None",
        Line => "Line",
    }
}

string_enum! {
    /// Whether input records are joined to their results.
    pub enum JoinSource {
        Input => "Input",
        None => "None",
    }
}

shape! {
    /// Input of a batch transform job.
    pub struct TransformInput {
        /// Where the input lives.
        data_source("DataSource"): opt TransformDataSource,
        /// MIME type of the input.
        content_type("ContentType"): opt String,
        /// Compression of the input.
        compression_type("CompressionType"): opt CompressionType,
        /// How to split input files into records.
        split_type("SplitType"): opt SplitType,
    }
}

impl Validate for TransformInput {
    fn check(&self, v: &mut Validator) {
        v.nested("DataSource", self.data_source.as_ref()).required();
        v.string("ContentType", self.content_type.as_deref())
            .length(0, 256)
            .pattern(&ANY_TEXT);
        v.enumeration("CompressionType", self.compression_type.as_ref());
        v.enumeration("SplitType", self.split_type.as_ref());
    }
}

shape! {
    /// Data source of a batch transform job.
    pub struct TransformDataSource {
        /// Input in S3.
        s3_data_source("S3DataSource"): opt TransformS3DataSource,
    }
}

impl Validate for TransformDataSource {
    fn check(&self, v: &mut Validator) {
        v.nested("S3DataSource", self.s3_data_source.as_ref()).required();
    }
}

shape! {
    /// Batch transform input stored in S3.
    pub struct TransformS3DataSource {
        /// How `S3Uri` selects objects.
        s3_data_type("S3DataType"): opt S3DataType,
        /// Key prefix or manifest location.
        s3_uri("S3Uri"): opt String,
    }
}

impl Validate for TransformS3DataSource {
    fn check(&self, v: &mut Validator) {
        v.enumeration("S3DataType", self.s3_data_type.as_ref()).required();
        v.string("S3Uri", self.s3_uri.as_deref())
            .required()
            .length(0, 1024)
            .pattern(&S3_URI);
    }
}

shape! {
    /// Where batch transform results are written.
    pub struct TransformOutput {
        /// S3 prefix for results.
        s3_output_path("S3OutputPath"): opt String,
        /// MIME type of the results.
        accept("Accept"): opt String,
        /// How results are assembled.
        assemble_with("AssembleWith"): opt AssemblyType,
        /// KMS key used to encrypt results.
        kms_key_id("KmsKeyId"): opt String,
    }
}

impl Validate for TransformOutput {
    fn check(&self, v: &mut Validator) {
        v.string("S3OutputPath", self.s3_output_path.as_deref())
            .required()
            .length(0, 1024)
            .pattern(&S3_URI);
        v.string("Accept", self.accept.as_deref())
            .length(0, 256)
            .pattern(&ANY_TEXT);
        v.enumeration("AssembleWith", self.assemble_with.as_ref());
        v.string("KmsKeyId", self.kms_key_id.as_deref())
            .length(0, 2048)
            .pattern(&ANY_TEXT);
    }
}

shape! {
    /// Compute resources for a batch transform job.
    pub struct TransformResources {
        /// ML compute instance type.
        instance_type("InstanceType"): opt TransformInstanceType,
        /// Number of instances.
        instance_count("InstanceCount"): opt i32,
        /// KMS key for the storage volume.
        volume_kms_key_id("VolumeKmsKeyId"): opt String,
    }
}

impl Validate for TransformResources {
    fn check(&self, v: &mut Validator) {
        v.enumeration("InstanceType", self.instance_type.as_ref()).required();
        v.int("InstanceCount", self.instance_count).required().min(1);
        v.string("VolumeKmsKeyId", self.volume_kms_key_id.as_deref())
            .length(0, 2048)
            .pattern(&ANY_TEXT);
    }
}

shape! {
    /// JSONPath filters that join inputs with results.
    pub struct DataProcessing {
        /// Selects the portion of each input record sent to the model.
        input_filter("InputFilter"): opt String,
        /// Selects the portion of each joined record written out.
        output_filter("OutputFilter"): opt String,
        /// Whether input records are joined to their results.
        join_source("JoinSource"): opt JoinSource,
    }
}

impl Validate for DataProcessing {
    fn check(&self, v: &mut Validator) {
        v.string("InputFilter", self.input_filter.as_deref())
            .length(0, 63);
        v.string("OutputFilter", self.output_filter.as_deref())
            .length(0, 63);
        v.enumeration("JoinSource", self.join_source.as_ref());
    }
}

shape! {
    /// Summary of a batch transform job in a listing.
    pub struct TransformJobSummary {
        /// Transform job name.
        transform_job_name("TransformJobName"): opt String,
        /// Transform job ARN.
        transform_job_arn("TransformJobArn"): opt String,
        /// When the job was created.
        creation_time("CreationTime"): opt DateTime<Utc>,
        /// When the job ended.
        transform_end_time("TransformEndTime"): opt DateTime<Utc>,
        /// When the status last changed.
        last_modified_time("LastModifiedTime"): opt DateTime<Utc>,
        /// Job status.
        transform_job_status("TransformJobStatus"): opt TransformJobStatus,
        /// Why the job failed.
        failure_reason("FailureReason"): opt String,
    }
}
