//! Model registry types.

use chrono::{DateTime, Utc};

use super::TransformInstanceType;
use crate::patterns::{
    ANY_TEXT, CONTAINER_HOSTNAME, CONTAINER_IMAGE, IMAGE_DIGEST, S3_URI,
};
use crate::validate::{Validate, Validator};

string_enum! {
    /// Lifecycle state of a model package.
    pub enum ModelPackageStatus {
        Pending => "Pending",
        InProgress => "InProgress",
        Completed => "Completed",
        Failed => "Failed",
        Deleting => "Deleting",
    }
}

string_enum! {
    /// Approval state of a versioned model package.
    pub enum ModelApprovalStatus {
        Approved => "Approved",
        Rejected => "Rejected",
        PendingManualApproval => "PendingManualApproval",
    }
}

string_enum! {
    /// Sort key for model package listings.
    pub enum ModelPackageSortBy {
        Name => "Name",
        CreationTime => "CreationTime",
    }
}

string_enum! {
    /// Which model packages a listing includes.
    pub enum ModelPackageType {
        Versioned => "Versioned",
        Unversioned => "Unversioned",
        Both => "Both",
    }
}

string_enum! {
    /// State of one validation or scan step of a model package.
    pub enum DetailedModelPackageStatus {
        NotStarted => "NotStarted",
        InProgress => "InProgress",
        Completed => "Completed",
        Failed => "Failed",
    }
}

string_enum! {
    /// Instance types for real-time inference endpoints.
    pub enum ProductionVariantInstanceType {
        MlT2Medium => "ml.t2.medium",
        MlT2Large => "ml.t2.large",
        MlT2Xlarge => "ml.t2.xlarge",
        MlT22xlarge => "ml.t2.2xlarge",
        MlM4Xlarge => "ml.m4.xlarge",
        MlM42xlarge => "ml.m4.2xlarge",
        MlM44xlarge => "ml.m4.4xlarge",
        MlM410xlarge => "ml.m4.10xlarge",
        MlM416xlarge => "ml.m4.16xlarge",
        MlM5Large => "ml.m5.large",
        MlM5Xlarge => "ml.m5.xlarge",
        MlM52xlarge => "ml.m5.2xlarge",
        MlM54xlarge => "ml.m5.4xlarge",
        MlM512xlarge => "ml.m5.12xlarge",
        MlM524xlarge => "ml.m5.24xlarge",
        MlC4Large => "ml.c4.large",
        MlC4Xlarge => "ml.c4.xlarge",
        MlC42xlarge => "ml.c4.2xlarge",
        MlC44xlarge => "ml.c4.4xlarge",
        MlC48xlarge => "ml.c4.8xlarge",
        MlC5Large => "ml.c5.large",
        MlC5Xlarge => "ml.c5.xlarge",
        MlC52xlarge => "ml.c5.2xlarge",
        MlC54xlarge => "ml.c5.4xlarge",
        MlC59xlarge => "ml.c5.9xlarge",
        MlC518xlarge => "ml.c5.18xlarge",
        MlG4dnXlarge => "ml.g4dn.xlarge",
        MlG4dn2xlarge => "ml.g4dn.2xlarge",
        MlG4dn4xlarge => "ml.g4dn.4xlarge",
        MlG4dn8xlarge => "ml.g4dn.8xlarge",
        MlG4dn12xlarge => "ml.g4dn.12xlarge",
        MlG4dn16xlarge => "ml.g4dn.16xlarge",
        MlP2Xlarge => "ml.p2.xlarge",
        MlP28xlarge => "ml.p2.8xlarge",
        MlP216xlarge => "ml.p2.16xlarge",
        MlP32xlarge => "ml.p3.2xlarge",
        MlP38xlarge => "ml.p3.8xlarge",
        MlP316xlarge => "ml.p3.16xlarge",
        MlR5Large => "ml.r5.large",
        MlR5Xlarge => "ml.r5.xlarge",
        MlR52xlarge => "ml.r5.2xlarge",
        MlR54xlarge => "ml.r5.4xlarge",
        MlR512xlarge => "ml.r5.12xlarge",
        MlR524xlarge => "ml.r5.24xlarge",
    }
}

shape! {
    /// Inference code and the instance types it supports.
    pub struct InferenceSpecification {
        /// Containers holding the inference code.
        containers("Containers"): list ModelPackageContainerDefinition,
        /// Instance types for batch transform.
        supported_transform_instance_types("SupportedTransformInstanceTypes"): list TransformInstanceType,
        /// Instance types for real-time endpoints.
        supported_realtime_inference_instance_types("SupportedRealtimeInferenceInstanceTypes"): list ProductionVariantInstanceType,
        /// Accepted input MIME types.
        supported_content_types("SupportedContentTypes"): list String,
        /// Produced output MIME types.
        supported_response_mime_types("SupportedResponseMIMETypes"): list String,
    }
}

impl Validate for InferenceSpecification {
    fn check(&self, v: &mut Validator) {
        v.list("Containers", self.containers.as_deref())
            .required()
            .length(1, 5)
            .each();
        v.list(
            "SupportedTransformInstanceTypes",
            self.supported_transform_instance_types.as_deref(),
        )
        .length(1, 100)
        .known();
        v.list(
            "SupportedRealtimeInferenceInstanceTypes",
            self.supported_realtime_inference_instance_types.as_deref(),
        )
        .known();
        v.list(
            "SupportedContentTypes",
            self.supported_content_types.as_deref(),
        )
        .required()
        .item_length(0, 256)
        .item_pattern(&ANY_TEXT);
        v.list(
            "SupportedResponseMIMETypes",
            self.supported_response_mime_types.as_deref(),
        )
        .required()
        .item_length(0, 1024)
        .item_pattern(&ANY_TEXT);
    }
}

shape! {
    /// A container image holding inference code.
    pub struct ModelPackageContainerDefinition {
        /// DNS host name of the container.
        container_hostname("ContainerHostname"): opt String,
        /// Image path in ECR.
        image("Image"): opt String,
        /// Digest of the image.
        image_digest("ImageDigest"): opt String,
        /// S3 path of the model artifacts.
        model_data_url("ModelDataUrl"): opt String,
        /// Marketplace product ID.
        product_id("ProductId"): opt String,
    }
}

impl Validate for ModelPackageContainerDefinition {
    fn check(&self, v: &mut Validator) {
        v.string("ContainerHostname", self.container_hostname.as_deref())
            .length(0, 63)
            .pattern(&CONTAINER_HOSTNAME);
        v.string("Image", self.image.as_deref())
            .required()
            .length(0, 255)
            .pattern(&CONTAINER_IMAGE);
        v.string("ImageDigest", self.image_digest.as_deref())
            .length(0, 72)
            .pattern(&IMAGE_DIGEST);
        v.string("ModelDataUrl", self.model_data_url.as_deref())
            .length(0, 1024)
            .pattern(&S3_URI);
        v.string("ProductId", self.product_id.as_deref())
            .length(0, 256)
            .pattern(&ANY_TEXT);
    }
}

shape! {
    /// Provenance of a model package.
    pub struct MetadataProperties {
        /// Commit ID.
        commit_id("CommitId"): opt String,
        /// Repository.
        repository("Repository"): opt String,
        /// Entity that generated the model.
        generated_by("GeneratedBy"): opt String,
        /// Project ID.
        project_id("ProjectId"): opt String,
    }
}

impl Validate for MetadataProperties {
    fn check(&self, v: &mut Validator) {
        v.string("CommitId", self.commit_id.as_deref())
            .length(0, 1024)
            .pattern(&ANY_TEXT);
        v.string("Repository", self.repository.as_deref())
            .length(0, 1024)
            .pattern(&ANY_TEXT);
        v.string("GeneratedBy", self.generated_by.as_deref())
            .length(0, 1024)
            .pattern(&ANY_TEXT);
        v.string("ProjectId", self.project_id.as_deref())
            .length(0, 1024)
            .pattern(&ANY_TEXT);
    }
}

shape! {
    /// Validation and image-scan progress of a model package.
    pub struct ModelPackageStatusDetails {
        /// Validation steps.
        validation_statuses("ValidationStatuses"): list ModelPackageStatusItem,
        /// Image scan steps.
        image_scan_statuses("ImageScanStatuses"): list ModelPackageStatusItem,
    }
}

shape! {
    /// One validation or scan step of a model package.
    pub struct ModelPackageStatusItem {
        /// Step name.
        name("Name"): opt String,
        /// Step state.
        status("Status"): opt DetailedModelPackageStatus,
        /// Why the step failed.
        failure_reason("FailureReason"): opt String,
    }
}

shape! {
    /// Summary of a model package in a listing.
    pub struct ModelPackageSummary {
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
        /// Lifecycle state.
        model_package_status("ModelPackageStatus"): opt ModelPackageStatus,
        /// Approval state.
        model_approval_status("ModelApprovalStatus"): opt ModelApprovalStatus,
    }
}
