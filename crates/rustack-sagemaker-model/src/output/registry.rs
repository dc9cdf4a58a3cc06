//! Model registry responses.

use chrono::{DateTime, Utc};

use crate::types::{
    InferenceSpecification, MetadataProperties, ModelApprovalStatus, ModelPackageStatus,
    ModelPackageStatusDetails, ModelPackageSummary,
};

shape! {
    /// Output for the `CreateModelPackage` operation.
    pub struct CreateModelPackageOutput {
        /// ARN of the new model package.
        model_package_arn("ModelPackageArn"): opt String,
    }
}

shape! {
    /// Output for the `DescribeModelPackage` operation.
    pub struct DescribeModelPackageOutput {
        /// Model package name.
        model_package_name("ModelPackageName"): opt String,
        /// Group of a versioned package.
        model_package_group_name("ModelPackageGroupName"): opt String,
        /// Version within the group.
        model_package_version("ModelPackageVersion"): opt i32,
        /// Model package ARN.
        model_package_arn("ModelPackageArn"): opt String,
        /// Description.
        model_package_description("ModelPackageDescription"): opt String,
        /// When the package was created.
        creation_time("CreationTime"): opt DateTime<Utc>,
        /// Inference containers and supported instance types.
        inference_specification("InferenceSpecification"): opt InferenceSpecification,
        /// Lifecycle state.
        model_package_status("ModelPackageStatus"): opt ModelPackageStatus,
        /// Validation and scan progress.
        model_package_status_details("ModelPackageStatusDetails"): opt ModelPackageStatusDetails,
        /// Whether the package is listed on AWS Marketplace.
        certify_for_marketplace("CertifyForMarketplace"): opt bool,
        /// Approval state.
        model_approval_status("ModelApprovalStatus"): opt ModelApprovalStatus,
        /// Provenance.
        metadata_properties("MetadataProperties"): opt MetadataProperties,
        /// When the package was last modified.
        last_modified_time("LastModifiedTime"): opt DateTime<Utc>,
        /// Why the approval state changed.
        approval_description("ApprovalDescription"): opt String,
    }
}

shape! {
    /// Output for the `ListModelPackages` operation.
    pub struct ListModelPackagesOutput {
        /// One summary per package.
        model_package_summary_list("ModelPackageSummaryList"): list ModelPackageSummary,
        /// Token of the next page.
        next_token("NextToken"): opt String,
    }
}

shape! {
    /// Output for the `UpdateModelPackage` operation.
    pub struct UpdateModelPackageOutput {
        /// ARN of the updated package.
        model_package_arn("ModelPackageArn"): opt String,
    }
}

shape! {
    /// Output for the `DeleteModelPackage` operation.
    pub struct DeleteModelPackageOutput {}
}
