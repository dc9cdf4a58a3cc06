//! Types shared across every SageMaker API area.

use chrono::{DateTime, Utc};

use super::MetricValue;
use crate::patterns::{EXPERIMENT_ENTITY_NAME, TAG_KEY, TAG_VALUE, VPC_ID};
use crate::validate::{Validate, Validator};

string_enum! {
    /// Sort direction for list operations.
    pub enum SortOrder {
        Ascending => "Ascending",
        Descending => "Descending",
    }
}

string_enum! {
    /// Sort key for training and transform job listings.
    pub enum SortBy {
        Name => "Name",
        CreationTime => "CreationTime",
        Status => "Status",
    }
}

string_enum! {
    /// Instance types available to processing, debugger and monitoring jobs.
    pub enum ProcessingInstanceType {
        MlT3Medium => "ml.t3.medium",
        MlT3Large => "ml.t3.large",
        MlT3Xlarge => "ml.t3.xlarge",
        MlT32xlarge => "ml.t3.2xlarge",
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
        MlR5Large => "ml.r5.large",
        MlR5Xlarge => "ml.r5.xlarge",
        MlR52xlarge => "ml.r5.2xlarge",
        MlR54xlarge => "ml.r5.4xlarge",
        MlR58xlarge => "ml.r5.8xlarge",
        MlR512xlarge => "ml.r5.12xlarge",
        MlR516xlarge => "ml.r5.16xlarge",
        MlR524xlarge => "ml.r5.24xlarge",
    }
}

shape! {
    /// A key-value pair attached to a resource.
    pub struct Tag {
        /// The tag key.
        key("Key"): opt String,
        /// The tag value.
        value("Value"): opt String,
    }
}

impl Tag {
    /// Shorthand for a fully set tag.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

impl Validate for Tag {
    fn check(&self, v: &mut Validator) {
        v.string("Key", self.key.as_deref())
            .required()
            .length(1, 128)
            .pattern(&TAG_KEY);
        v.string("Value", self.value.as_deref())
            .required()
            .length(0, 256)
            .pattern(&TAG_VALUE);
    }
}

shape! {
    /// The VPC subnets and security groups a job's containers attach to.
    pub struct VpcConfig {
        /// Security group IDs, in the form `sg-xxxxxxxx`.
        security_group_ids("SecurityGroupIds"): list String,
        /// Subnet IDs.
        subnets("Subnets"): list String,
    }
}

impl Validate for VpcConfig {
    fn check(&self, v: &mut Validator) {
        v.list("SecurityGroupIds", self.security_group_ids.as_deref())
            .required()
            .length(1, 5)
            .item_length(0, 32)
            .item_pattern(&VPC_ID);
        v.list("Subnets", self.subnets.as_deref())
            .required()
            .length(1, 16)
            .item_length(0, 32)
            .item_pattern(&VPC_ID);
    }
}

shape! {
    /// Associates a job with an experiment, trial and trial component.
    pub struct ExperimentConfig {
        /// Name of an existing experiment.
        experiment_name("ExperimentName"): opt String,
        /// Name of an existing trial.
        trial_name("TrialName"): opt String,
        /// Display name for the trial component.
        trial_component_display_name("TrialComponentDisplayName"): opt String,
    }
}

impl Validate for ExperimentConfig {
    fn check(&self, v: &mut Validator) {
        v.string("ExperimentName", self.experiment_name.as_deref())
            .length(1, 120)
            .pattern(&EXPERIMENT_ENTITY_NAME);
        v.string("TrialName", self.trial_name.as_deref())
            .length(1, 120)
            .pattern(&EXPERIMENT_ENTITY_NAME);
        v.string(
            "TrialComponentDisplayName",
            self.trial_component_display_name.as_deref(),
        )
        .length(1, 120)
        .pattern(&EXPERIMENT_ENTITY_NAME);
    }
}

shape! {
    /// One metric reading emitted by a job.
    pub struct MetricData {
        /// The metric name.
        metric_name("MetricName"): opt String,
        /// The metric value.
        value("Value"): opt MetricValue,
        /// When the algorithm emitted the metric.
        timestamp("Timestamp"): opt DateTime<Utc>,
    }
}
