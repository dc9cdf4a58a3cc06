//! Notebook instance types.

use chrono::{DateTime, Utc};

string_enum! {
    /// ML compute instance types for notebook instances.
    pub enum InstanceType {
        MlT2Medium => "ml.t2.medium",
        MlT2Large => "ml.t2.large",
        MlT2Xlarge => "ml.t2.xlarge",
        MlT22xlarge => "ml.t2.2xlarge",
        MlT3Medium => "ml.t3.medium",
        MlT3Large => "ml.t3.large",
        MlT3Xlarge => "ml.t3.xlarge",
        MlT32xlarge => "ml.t3.2xlarge",
        MlM4Xlarge => "ml.m4.xlarge",
        MlM42xlarge => "ml.m4.2xlarge",
        MlM44xlarge => "ml.m4.4xlarge",
        MlM410xlarge => "ml.m4.10xlarge",
        MlM416xlarge => "ml.m4.16xlarge",
        MlM5Xlarge => "ml.m5.xlarge",
        MlM52xlarge => "ml.m5.2xlarge",
        MlM54xlarge => "ml.m5.4xlarge",
        MlM512xlarge => "ml.m5.12xlarge",
        MlM524xlarge => "ml.m5.24xlarge",
        MlC4Xlarge => "ml.c4.xlarge",
        MlC42xlarge => "ml.c4.2xlarge",
        MlC44xlarge => "ml.c4.4xlarge",
        MlC48xlarge => "ml.c4.8xlarge",
        MlC5Xlarge => "ml.c5.xlarge",
        MlC52xlarge => "ml.c5.2xlarge",
        MlC54xlarge => "ml.c5.4xlarge",
        MlC59xlarge => "ml.c5.9xlarge",
        MlC518xlarge => "ml.c5.18xlarge",
        MlC5dXlarge => "ml.c5d.xlarge",
        MlC5d2xlarge => "ml.c5d.2xlarge",
        MlC5d4xlarge => "ml.c5d.4xlarge",
        MlC5d9xlarge => "ml.c5d.9xlarge",
        MlC5d18xlarge => "ml.c5d.18xlarge",
        MlP2Xlarge => "ml.p2.xlarge",
        MlP28xlarge => "ml.p2.8xlarge",
        MlP216xlarge => "ml.p2.16xlarge",
        MlP32xlarge => "ml.p3.2xlarge",
        MlP38xlarge => "ml.p3.8xlarge",
        MlP316xlarge => "ml.p3.16xlarge",
    }
}

string_enum! {
    /// Elastic Inference accelerators attachable to a notebook instance.
    pub enum NotebookInstanceAcceleratorType {
        MlEia1Medium => "ml.eia1.medium",
        MlEia1Large => "ml.eia1.large",
        MlEia1Xlarge => "ml.eia1.xlarge",
        MlEia2Medium => "ml.eia2.medium",
        MlEia2Large => "ml.eia2.large",
        MlEia2Xlarge => "ml.eia2.xlarge",
    }
}

string_enum! {
    /// Whether a notebook instance reaches the internet through SageMaker.
    pub enum DirectInternetAccess {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

string_enum! {
    /// Whether notebook users have root access.
    pub enum RootAccess {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

string_enum! {
    /// Lifecycle state of a notebook instance.
    pub enum NotebookInstanceStatus {
        Pending => "Pending",
        InService => "InService",
        Stopping => "Stopping",
        Stopped => "Stopped",
        Failed => "Failed",
        Deleting => "Deleting",
        Updating => "Updating",
    }
}

string_enum! {
    /// Sort key for notebook instance listings.
    pub enum NotebookInstanceSortKey {
        Name => "Name",
        CreationTime => "CreationTime",
        Status => "Status",
    }
}

string_enum! {
    /// Sort direction for notebook instance listings.
    pub enum NotebookInstanceSortOrder {
        Ascending => "Ascending",
        Descending => "Descending",
    }
}

shape! {
    /// Summary of a notebook instance in a listing.
    pub struct NotebookInstanceSummary {
        /// Notebook instance name.
        notebook_instance_name("NotebookInstanceName"): opt String,
        /// Notebook instance ARN.
        notebook_instance_arn("NotebookInstanceArn"): opt String,
        /// Lifecycle state.
        notebook_instance_status("NotebookInstanceStatus"): opt NotebookInstanceStatus,
        /// URL for connecting to Jupyter.
        url("Url"): opt String,
        /// Instance type.
        instance_type("InstanceType"): opt InstanceType,
        /// When the instance was created.
        creation_time("CreationTime"): opt DateTime<Utc>,
        /// When the instance was last modified.
        last_modified_time("LastModifiedTime"): opt DateTime<Utc>,
        /// Lifecycle configuration attached to the instance.
        notebook_instance_lifecycle_config_name("NotebookInstanceLifecycleConfigName"): opt String,
        /// Default git repository.
        default_code_repository("DefaultCodeRepository"): opt String,
        /// Additional git repositories.
        additional_code_repositories("AdditionalCodeRepositories"): list String,
    }
}
