//! Preflight integration tests across API areas.

#[cfg(test)]
mod tests {
    use rustack_sagemaker_core::{Preflight, PreflightError, SageMakerConfig, ValidationMode};
    use rustack_sagemaker_model::input::{
        CreateFlowDefinitionInput, CreateModelPackageInput, ListModelPackagesInput,
        StopHyperParameterTuningJobInput,
    };
    use rustack_sagemaker_model::types::{
        FlowDefinitionOutputConfig, HumanLoopConfig, ModelApprovalStatus,
    };
    use rustack_sagemaker_model::{OperationInput, SageMakerOperation};

    use crate::{preflight, test_job_name};

    fn flow_definition(name: &str) -> CreateFlowDefinitionInput {
        CreateFlowDefinitionInput::builder()
            .flow_definition_name(name)
            .human_loop_config(
                HumanLoopConfig::builder()
                    .workteam_arn(
                        "arn:aws:sagemaker:us-east-1:123456789012:workteam/private-crowd/reviewers",
                    )
                    .human_task_ui_arn(
                        "arn:aws:sagemaker:us-east-1:123456789012:human-task-ui/review-template",
                    )
                    .task_title("Review predictions")
                    .task_description("Check that each label is correct.")
                    .task_count(1)
                    .build(),
            )
            .output_config(
                FlowDefinitionOutputConfig::builder()
                    .s3_output_path("s3://bucket/reviews/")
                    .build(),
            )
            .role_arn("arn:aws:iam::123456789012:role/ReviewRole")
            .build()
    }

    #[test]
    fn test_should_prepare_flow_definition() {
        let prepared = preflight(ValidationMode::Strict)
            .prepare(flow_definition("loan-review"))
            .expect("valid flow definition");
        assert_eq!(prepared.operation, SageMakerOperation::CreateFlowDefinition);
        assert_eq!(prepared.target, "SageMaker.CreateFlowDefinition");
    }

    #[test]
    fn test_should_reject_flow_definition_in_strict_mode_only() {
        let mut input = flow_definition("Loan_Review");
        if let Some(config) = input.human_loop_config.as_mut() {
            config.task_count = Some(4);
        }

        let err = preflight(ValidationMode::Strict)
            .prepare(input.clone())
            .expect_err("two violations");
        let PreflightError::Validation { operation, errors } = err else {
            panic!("expected validation error");
        };
        assert_eq!(operation, SageMakerOperation::CreateFlowDefinition);
        assert_eq!(
            errors.paths().collect::<Vec<_>>(),
            ["FlowDefinitionName", "HumanLoopConfig.TaskCount"]
        );

        let prepared = preflight(ValidationMode::Warn)
            .prepare(input.clone())
            .expect("warn mode proceeds");
        assert_eq!(prepared.input, input);
        assert_eq!(Preflight::check(&input).len(), 2);
    }

    #[test]
    fn test_should_fill_token_only_where_the_operation_has_one() {
        let preflight = preflight(ValidationMode::Strict);

        let package = preflight
            .prepare(
                CreateModelPackageInput::builder()
                    .model_package_group_name("churn")
                    .model_approval_status(ModelApprovalStatus::PendingManualApproval)
                    .build(),
            )
            .expect("valid package");
        let token = package.input.client_token.clone().expect("filled");
        assert_eq!(token.len(), 36);

        let body = serde_json::to_value(&package.input).expect("encode");
        assert_eq!(body["ClientToken"], token.as_str());

        let mut stop = StopHyperParameterTuningJobInput::builder()
            .hyper_parameter_tuning_job_name(test_job_name("tune"))
            .build();
        assert!(stop.idempotency_token_mut().is_none());
        preflight.prepare(stop).expect("valid stop");
    }

    #[test]
    fn test_should_give_each_request_its_own_token() {
        let preflight = preflight(ValidationMode::Off);
        let first = preflight
            .prepare(CreateModelPackageInput::default())
            .expect("no validation");
        let second = preflight
            .prepare(CreateModelPackageInput::default())
            .expect("no validation");
        assert_ne!(first.input.client_token, second.input.client_token);
    }

    #[test]
    fn test_should_load_config_from_env() {
        let config = SageMakerConfig::from_env().unwrap_or_default();
        let region = config.default_region.clone();

        let prepared = Preflight::new(config)
            .prepare(ListModelPackagesInput::builder().max_results(10).build())
            .expect("valid list request");
        assert_eq!(prepared.target, "SageMaker.ListModelPackages");
        assert_eq!(prepared.region, region);
        assert!(prepared.endpoint().ends_with(&format!("{region}.amazonaws.com")));
    }
}
