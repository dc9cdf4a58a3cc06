//! Notebook instance responses.

use chrono::{DateTime, Utc};

use crate::types::{
    DirectInternetAccess, InstanceType, NotebookInstanceAcceleratorType, NotebookInstanceStatus,
    NotebookInstanceSummary, RootAccess,
};

shape! {
    /// Output for the `CreateNotebookInstance` operation.
    pub struct CreateNotebookInstanceOutput {
        /// ARN of the new notebook instance.
        notebook_instance_arn("NotebookInstanceArn"): opt String,
    }
}

shape! {
    /// Output for the `DescribeNotebookInstance` operation.
    pub struct DescribeNotebookInstanceOutput {
        /// Notebook instance ARN.
        notebook_instance_arn("NotebookInstanceArn"): opt String,
        /// Notebook instance name.
        notebook_instance_name("NotebookInstanceName"): opt String,
        /// Lifecycle state.
        notebook_instance_status("NotebookInstanceStatus"): opt NotebookInstanceStatus,
        /// Why the instance failed.
        failure_reason("FailureReason"): opt String,
        /// URL for connecting to Jupyter.
        url("Url"): opt String,
        /// Instance type.
        instance_type("InstanceType"): opt InstanceType,
        /// VPC subnet.
        subnet_id("SubnetId"): opt String,
        /// Security groups.
        security_groups("SecurityGroups"): list String,
        /// IAM role the instance runs as.
        role_arn("RoleArn"): opt String,
        /// KMS key for the storage volume.
        kms_key_id("KmsKeyId"): opt String,
        /// Network interface in the customer VPC.
        network_interface_id("NetworkInterfaceId"): opt String,
        /// When the instance was last modified.
        last_modified_time("LastModifiedTime"): opt DateTime<Utc>,
        /// When the instance was created.
        creation_time("CreationTime"): opt DateTime<Utc>,
        /// Attached lifecycle configuration.
        notebook_instance_lifecycle_config_name("NotebookInstanceLifecycleConfigName"): opt String,
        /// Internet access setting.
        direct_internet_access("DirectInternetAccess"): opt DirectInternetAccess,
        /// Storage volume size.
        volume_size_in_gb("VolumeSizeInGB"): opt i32,
        /// Attached accelerators.
        accelerator_types("AcceleratorTypes"): list NotebookInstanceAcceleratorType,
        /// Default git repository.
        default_code_repository("DefaultCodeRepository"): opt String,
        /// Additional git repositories.
        additional_code_repositories("AdditionalCodeRepositories"): list String,
        /// Root access setting.
        root_access("RootAccess"): opt RootAccess,
    }
}

shape! {
    /// Output for the `UpdateNotebookInstance` operation.
    pub struct UpdateNotebookInstanceOutput {}
}

shape! {
    /// Output for the `ListNotebookInstances` operation.
    pub struct ListNotebookInstancesOutput {
        /// Token of the next page.
        next_token("NextToken"): opt String,
        /// One summary per instance.
        notebook_instances("NotebookInstances"): list NotebookInstanceSummary,
    }
}

shape! {
    /// Output for the `StartNotebookInstance` operation.
    pub struct StartNotebookInstanceOutput {}
}

shape! {
    /// Output for the `StopNotebookInstance` operation.
    pub struct StopNotebookInstanceOutput {}
}

shape! {
    /// Output for the `DeleteNotebookInstance` operation.
    pub struct DeleteNotebookInstanceOutput {}
}
