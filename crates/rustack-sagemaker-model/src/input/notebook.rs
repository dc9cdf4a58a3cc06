//! Notebook instance requests.

use chrono::{DateTime, Utc};

use super::{check_page, check_tags};
use crate::patterns::{ANY_TEXT, CODE_REPOSITORY, ENTITY_NAME, NAME_CONTAINS, ROLE_ARN, VPC_ID};
use crate::types::{
    DirectInternetAccess, InstanceType, NotebookInstanceAcceleratorType, NotebookInstanceSortKey,
    NotebookInstanceSortOrder, NotebookInstanceStatus, RootAccess, Tag,
};
use crate::validate::{Validate, Validator};

fn check_notebook_instance_name(v: &mut Validator, name: Option<&str>) {
    v.string("NotebookInstanceName", name)
        .required()
        .length(0, 63)
        .pattern(&ENTITY_NAME);
}

fn check_lifecycle_config_name(v: &mut Validator, name: Option<&str>) {
    v.string("LifecycleConfigName", name)
        .length(0, 63)
        .pattern(&ENTITY_NAME);
}

fn check_code_repositories(
    v: &mut Validator,
    default_repository: Option<&str>,
    additional_repositories: Option<&[String]>,
) {
    v.string("DefaultCodeRepository", default_repository)
        .length(1, 1024)
        .pattern(&CODE_REPOSITORY);
    v.list("AdditionalCodeRepositories", additional_repositories)
        .length(0, 3)
        .item_length(1, 1024)
        .item_pattern(&CODE_REPOSITORY);
}

shape! {
    /// Input for the `CreateNotebookInstance` operation.
    pub struct CreateNotebookInstanceInput {
        /// Name of the notebook instance.
        notebook_instance_name("NotebookInstanceName"): opt String,
        /// ML compute instance type.
        instance_type("InstanceType"): opt InstanceType,
        /// VPC subnet the instance attaches to.
        subnet_id("SubnetId"): opt String,
        /// Security groups of the attached network interface.
        security_group_ids("SecurityGroupIds"): list String,
        /// IAM role the instance runs as.
        role_arn("RoleArn"): opt String,
        /// KMS key for the storage volume.
        kms_key_id("KmsKeyId"): opt String,
        /// Tags for the instance.
        tags("Tags"): list Tag,
        /// Lifecycle configuration run on create and start.
        lifecycle_config_name("LifecycleConfigName"): opt String,
        /// Whether the instance reaches the internet through SageMaker.
        direct_internet_access("DirectInternetAccess"): opt DirectInternetAccess,
        /// Size of the ML storage volume.
        volume_size_in_gb("VolumeSizeInGB"): opt i32,
        /// Elastic Inference accelerators.
        accelerator_types("AcceleratorTypes"): list NotebookInstanceAcceleratorType,
        /// Default git repository.
        default_code_repository("DefaultCodeRepository"): opt String,
        /// Up to three additional git repositories.
        additional_code_repositories("AdditionalCodeRepositories"): list String,
        /// Whether users have root access.
        root_access("RootAccess"): opt RootAccess,
    }
}

impl Validate for CreateNotebookInstanceInput {
    fn check(&self, v: &mut Validator) {
        check_notebook_instance_name(v, self.notebook_instance_name.as_deref());
        v.enumeration("InstanceType", self.instance_type.as_ref())
            .required();
        v.string("SubnetId", self.subnet_id.as_deref())
            .length(0, 32)
            .pattern(&VPC_ID);
        v.list("SecurityGroupIds", self.security_group_ids.as_deref())
            .length(0, 5)
            .item_length(0, 32)
            .item_pattern(&VPC_ID);
        v.string("RoleArn", self.role_arn.as_deref())
            .required()
            .length(20, 2048)
            .pattern(&ROLE_ARN);
        v.string("KmsKeyId", self.kms_key_id.as_deref())
            .length(0, 2048)
            .pattern(&ANY_TEXT);
        check_tags(v, self.tags.as_deref());
        check_lifecycle_config_name(v, self.lifecycle_config_name.as_deref());
        v.enumeration(
            "DirectInternetAccess",
            self.direct_internet_access.as_ref(),
        );
        v.int("VolumeSizeInGB", self.volume_size_in_gb)
            .range(5, 16384);
        v.list("AcceleratorTypes", self.accelerator_types.as_deref())
            .known();
        check_code_repositories(
            v,
            self.default_code_repository.as_deref(),
            self.additional_code_repositories.as_deref(),
        );
        v.enumeration("RootAccess", self.root_access.as_ref());
    }
}

shape! {
    /// Input for the `DescribeNotebookInstance` operation.
    pub struct DescribeNotebookInstanceInput {
        /// Name of the notebook instance.
        notebook_instance_name("NotebookInstanceName"): opt String,
    }
}

impl Validate for DescribeNotebookInstanceInput {
    fn check(&self, v: &mut Validator) {
        check_notebook_instance_name(v, self.notebook_instance_name.as_deref());
    }
}

shape! {
    /// Input for the `UpdateNotebookInstance` operation.
    ///
    /// The `Disassociate*` flags remove a setting; sending a flag together
    /// with a new value for the same setting is rejected by the service.
    pub struct UpdateNotebookInstanceInput {
        /// Name of the notebook instance.
        notebook_instance_name("NotebookInstanceName"): opt String,
        /// New instance type.
        instance_type("InstanceType"): opt InstanceType,
        /// New IAM role.
        role_arn("RoleArn"): opt String,
        /// New lifecycle configuration.
        lifecycle_config_name("LifecycleConfigName"): opt String,
        /// Remove the lifecycle configuration.
        disassociate_lifecycle_config("DisassociateLifecycleConfig"): opt bool,
        /// New volume size; volumes can only grow.
        volume_size_in_gb("VolumeSizeInGB"): opt i32,
        /// New default git repository.
        default_code_repository("DefaultCodeRepository"): opt String,
        /// New additional git repositories.
        additional_code_repositories("AdditionalCodeRepositories"): list String,
        /// New Elastic Inference accelerators.
        accelerator_types("AcceleratorTypes"): list NotebookInstanceAcceleratorType,
        /// Remove every accelerator.
        disassociate_accelerator_types("DisassociateAcceleratorTypes"): opt bool,
        /// Remove the default git repository.
        disassociate_default_code_repository("DisassociateDefaultCodeRepository"): opt bool,
        /// Remove the additional git repositories.
        disassociate_additional_code_repositories("DisassociateAdditionalCodeRepositories"): opt bool,
        /// New root access setting.
        root_access("RootAccess"): opt RootAccess,
    }
}

impl Validate for UpdateNotebookInstanceInput {
    fn check(&self, v: &mut Validator) {
        check_notebook_instance_name(v, self.notebook_instance_name.as_deref());
        v.enumeration("InstanceType", self.instance_type.as_ref());
        v.string("RoleArn", self.role_arn.as_deref())
            .length(20, 2048)
            .pattern(&ROLE_ARN);
        check_lifecycle_config_name(v, self.lifecycle_config_name.as_deref());
        v.int("VolumeSizeInGB", self.volume_size_in_gb)
            .range(5, 16384);
        check_code_repositories(
            v,
            self.default_code_repository.as_deref(),
            self.additional_code_repositories.as_deref(),
        );
        v.list("AcceleratorTypes", self.accelerator_types.as_deref())
            .known();
        v.enumeration("RootAccess", self.root_access.as_ref());
    }
}

shape! {
    /// Input for the `ListNotebookInstances` operation.
    pub struct ListNotebookInstancesInput {
        /// Continuation token from a previous page.
        next_token("NextToken"): opt String,
        /// Page size.
        max_results("MaxResults"): opt i32,
        /// Sort key.
        sort_by("SortBy"): opt NotebookInstanceSortKey,
        /// Sort direction.
        sort_order("SortOrder"): opt NotebookInstanceSortOrder,
        /// Only instances whose name contains this string.
        name_contains("NameContains"): opt String,
        /// Only instances created before this time.
        creation_time_before("CreationTimeBefore"): opt DateTime<Utc>,
        /// Only instances created after this time.
        creation_time_after("CreationTimeAfter"): opt DateTime<Utc>,
        /// Only instances modified before this time.
        last_modified_time_before("LastModifiedTimeBefore"): opt DateTime<Utc>,
        /// Only instances modified after this time.
        last_modified_time_after("LastModifiedTimeAfter"): opt DateTime<Utc>,
        /// Only instances in this state.
        status_equals("StatusEquals"): opt NotebookInstanceStatus,
        /// Only instances whose lifecycle configuration name contains this string.
        notebook_instance_lifecycle_config_name_contains("NotebookInstanceLifecycleConfigNameContains"): opt String,
        /// Only instances whose default repository contains this string.
        default_code_repository_contains("DefaultCodeRepositoryContains"): opt String,
        /// Only instances with this additional repository.
        additional_code_repository_equals("AdditionalCodeRepositoryEquals"): opt String,
    }
}

impl Validate for ListNotebookInstancesInput {
    fn check(&self, v: &mut Validator) {
        check_page(v, self.next_token.as_deref(), self.max_results);
        v.enumeration("SortBy", self.sort_by.as_ref());
        v.enumeration("SortOrder", self.sort_order.as_ref());
        v.string("NameContains", self.name_contains.as_deref())
            .length(0, 63)
            .pattern(&NAME_CONTAINS);
        v.enumeration("StatusEquals", self.status_equals.as_ref());
        v.string(
            "NotebookInstanceLifecycleConfigNameContains",
            self.notebook_instance_lifecycle_config_name_contains
                .as_deref(),
        )
        .length(0, 63)
        .pattern(&ENTITY_NAME);
        v.string(
            "DefaultCodeRepositoryContains",
            self.default_code_repository_contains.as_deref(),
        )
        .length(0, 1024)
        .pattern(&NAME_CONTAINS);
        v.string(
            "AdditionalCodeRepositoryEquals",
            self.additional_code_repository_equals.as_deref(),
        )
        .length(1, 1024)
        .pattern(&CODE_REPOSITORY);
    }
}

shape! {
    /// Input for the `StartNotebookInstance` operation.
    pub struct StartNotebookInstanceInput {
        /// Name of the notebook instance.
        notebook_instance_name("NotebookInstanceName"): opt String,
    }
}

impl Validate for StartNotebookInstanceInput {
    fn check(&self, v: &mut Validator) {
        check_notebook_instance_name(v, self.notebook_instance_name.as_deref());
    }
}

shape! {
    /// Input for the `StopNotebookInstance` operation.
    pub struct StopNotebookInstanceInput {
        /// Name of the notebook instance.
        notebook_instance_name("NotebookInstanceName"): opt String,
    }
}

impl Validate for StopNotebookInstanceInput {
    fn check(&self, v: &mut Validator) {
        check_notebook_instance_name(v, self.notebook_instance_name.as_deref());
    }
}

shape! {
    /// Input for the `DeleteNotebookInstance` operation.
    pub struct DeleteNotebookInstanceInput {
        /// Name of the notebook instance.
        notebook_instance_name("NotebookInstanceName"): opt String,
    }
}

impl Validate for DeleteNotebookInstanceInput {
    fn check(&self, v: &mut Validator) {
        check_notebook_instance_name(v, self.notebook_instance_name.as_deref());
    }
}
