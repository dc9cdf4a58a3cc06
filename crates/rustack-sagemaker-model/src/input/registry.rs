//! Model registry requests.

use chrono::{DateTime, Utc};

use super::{check_page, check_tags};
use crate::patterns::{
    ANY_TEXT, CLIENT_TOKEN, MODEL_PACKAGE_NAME, NAME_CONTAINS, NAME_OR_ARN, PACKAGE_DESCRIPTION,
    SAGEMAKER_ARN,
};
use crate::types::{
    InferenceSpecification, MetadataProperties, ModelApprovalStatus, ModelPackageSortBy,
    ModelPackageType, SortOrder, Tag,
};
use crate::validate::{Validate, Validator};

fn check_model_package_reference(v: &mut Validator, name: Option<&str>) {
    v.string("ModelPackageName", name)
        .required()
        .length(1, 170)
        .pattern(&NAME_OR_ARN);
}

shape! {
    /// Input for the `CreateModelPackage` operation.
    ///
    /// Set `ModelPackageName` for an unversioned package or
    /// `ModelPackageGroupName` for a new version in a group.
    pub struct CreateModelPackageInput {
        /// Name of an unversioned package.
        model_package_name("ModelPackageName"): opt String,
        /// Group that receives a new version.
        model_package_group_name("ModelPackageGroupName"): opt String,
        /// Description.
        model_package_description("ModelPackageDescription"): opt String,
        /// Inference containers and supported instance types.
        inference_specification("InferenceSpecification"): opt InferenceSpecification,
        /// List the package on AWS Marketplace.
        certify_for_marketplace("CertifyForMarketplace"): opt bool,
        /// Tags for the package.
        tags("Tags"): list Tag,
        /// Initial approval state of a versioned package.
        model_approval_status("ModelApprovalStatus"): opt ModelApprovalStatus,
        /// Provenance.
        metadata_properties("MetadataProperties"): opt MetadataProperties,
        /// Idempotency token.
        client_token("ClientToken"): opt String,
    }
}

impl Validate for CreateModelPackageInput {
    fn check(&self, v: &mut Validator) {
        v.string("ModelPackageName", self.model_package_name.as_deref())
            .length(1, 63)
            .pattern(&MODEL_PACKAGE_NAME);
        v.string(
            "ModelPackageGroupName",
            self.model_package_group_name.as_deref(),
        )
        .length(1, 170)
        .pattern(&NAME_OR_ARN);
        v.string(
            "ModelPackageDescription",
            self.model_package_description.as_deref(),
        )
        .length(0, 1024)
        .pattern(&PACKAGE_DESCRIPTION);
        v.nested(
            "InferenceSpecification",
            self.inference_specification.as_ref(),
        );
        check_tags(v, self.tags.as_deref());
        v.enumeration("ModelApprovalStatus", self.model_approval_status.as_ref());
        v.nested("MetadataProperties", self.metadata_properties.as_ref());
        v.string("ClientToken", self.client_token.as_deref())
            .length(1, 36)
            .pattern(&CLIENT_TOKEN);
    }
}

shape! {
    /// Input for the `DescribeModelPackage` operation.
    pub struct DescribeModelPackageInput {
        /// Name or ARN of the model package.
        model_package_name("ModelPackageName"): opt String,
    }
}

impl Validate for DescribeModelPackageInput {
    fn check(&self, v: &mut Validator) {
        check_model_package_reference(v, self.model_package_name.as_deref());
    }
}

shape! {
    /// Input for the `ListModelPackages` operation.
    pub struct ListModelPackagesInput {
        /// Only packages created after this time.
        creation_time_after("CreationTimeAfter"): opt DateTime<Utc>,
        /// Only packages created before this time.
        creation_time_before("CreationTimeBefore"): opt DateTime<Utc>,
        /// Page size.
        max_results("MaxResults"): opt i32,
        /// Only packages whose name contains this string.
        name_contains("NameContains"): opt String,
        /// Only packages in this approval state.
        model_approval_status("ModelApprovalStatus"): opt ModelApprovalStatus,
        /// Only versions in this group.
        model_package_group_name("ModelPackageGroupName"): opt String,
        /// Versioned, unversioned or both.
        model_package_type("ModelPackageType"): opt ModelPackageType,
        /// Continuation token from a previous page.
        next_token("NextToken"): opt String,
        /// Sort key.
        sort_by("SortBy"): opt ModelPackageSortBy,
        /// Sort direction.
        sort_order("SortOrder"): opt SortOrder,
    }
}

impl Validate for ListModelPackagesInput {
    fn check(&self, v: &mut Validator) {
        v.string("NameContains", self.name_contains.as_deref())
            .length(0, 63)
            .pattern(&NAME_CONTAINS);
        v.enumeration("ModelApprovalStatus", self.model_approval_status.as_ref());
        v.string(
            "ModelPackageGroupName",
            self.model_package_group_name.as_deref(),
        )
        .length(1, 170)
        .pattern(&NAME_OR_ARN);
        v.enumeration("ModelPackageType", self.model_package_type.as_ref());
        check_page(v, self.next_token.as_deref(), self.max_results);
        v.enumeration("SortBy", self.sort_by.as_ref());
        v.enumeration("SortOrder", self.sort_order.as_ref());
    }
}

shape! {
    /// Input for the `UpdateModelPackage` operation.
    pub struct UpdateModelPackageInput {
        /// ARN of the model package version.
        model_package_arn("ModelPackageArn"): opt String,
        /// New approval state.
        model_approval_status("ModelApprovalStatus"): opt ModelApprovalStatus,
        /// Why the state changed.
        approval_description("ApprovalDescription"): opt String,
    }
}

impl Validate for UpdateModelPackageInput {
    fn check(&self, v: &mut Validator) {
        v.string("ModelPackageArn", self.model_package_arn.as_deref())
            .required()
            .length(1, 2048)
            .pattern(&SAGEMAKER_ARN);
        v.enumeration("ModelApprovalStatus", self.model_approval_status.as_ref())
            .required();
        v.string(
            "ApprovalDescription",
            self.approval_description.as_deref(),
        )
        .length(0, 1024)
        .pattern(&ANY_TEXT);
    }
}

shape! {
    /// Input for the `DeleteModelPackage` operation.
    pub struct DeleteModelPackageInput {
        /// Name or ARN of the model package.
        model_package_name("ModelPackageName"): opt String,
    }
}

impl Validate for DeleteModelPackageInput {
    fn check(&self, v: &mut Validator) {
        check_model_package_reference(v, self.model_package_name.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelError;
    use crate::types::{ModelPackageContainerDefinition, TransformInstanceType};

    #[test]
    fn test_should_accept_versioned_package_with_inference_spec() {
        let input = CreateModelPackageInput::builder()
            .model_package_group_name("churn")
            .model_package_description("Gradient boosted churn model")
            .model_approval_status(ModelApprovalStatus::PendingManualApproval)
            .inference_specification(
                InferenceSpecification::builder()
                    .containers(
                        ModelPackageContainerDefinition::builder()
                            .image("123456789012.dkr.ecr.us-east-1.amazonaws.com/xgb:1")
                            .model_data_url("s3://bucket/model.tar.gz")
                            .build(),
                    )
                    .supported_transform_instance_types(TransformInstanceType::MlM5Xlarge)
                    .supported_content_types("text/csv")
                    .supported_response_mime_types("text/csv")
                    .build(),
            )
            .client_token("3f0c5c0e-8d2b-4d8e-9c55-1f1c7f0e4b11")
            .build();
        input.validate().unwrap();
    }

    #[test]
    fn test_should_reject_malformed_client_token() {
        let input = CreateModelPackageInput::builder()
            .model_package_name("pkg")
            .client_token("not a token")
            .build();
        let Err(ModelError::Validation(errors)) = input.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.paths().collect::<Vec<_>>(), ["ClientToken"]);
    }

    #[test]
    fn test_should_require_arn_and_status_to_update() {
        let Err(ModelError::Validation(errors)) = UpdateModelPackageInput::default().validate()
        else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors.paths().collect::<Vec<_>>(),
            ["ModelPackageArn", "ModelApprovalStatus"]
        );
    }

    #[test]
    fn test_should_accept_package_arn_as_reference() {
        DescribeModelPackageInput::builder()
            .model_package_name("arn:aws:sagemaker:us-east-1:123456789012:model-package/churn")
            .build()
            .validate()
            .unwrap();
    }
}
