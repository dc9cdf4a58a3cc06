//! Notebook instance integration tests.

#[cfg(test)]
mod tests {
    use rustack_sagemaker_core::ValidationMode;
    use rustack_sagemaker_model::input::{
        CreateNotebookInstanceInput, DeleteNotebookInstanceInput, StartNotebookInstanceInput,
        StopNotebookInstanceInput, UpdateNotebookInstanceInput,
    };
    use rustack_sagemaker_model::output::{
        DescribeNotebookInstanceOutput, UpdateNotebookInstanceOutput,
    };
    use rustack_sagemaker_model::types::{
        DirectInternetAccess, InstanceType, NotebookInstanceAcceleratorType,
        NotebookInstanceStatus, RootAccess,
    };
    use rustack_sagemaker_model::{ModelError, OperationInput, SageMakerOperation};

    use crate::{preflight, test_job_name};

    fn notebook(name: &str) -> CreateNotebookInstanceInput {
        CreateNotebookInstanceInput::builder()
            .notebook_instance_name(name)
            .instance_type(InstanceType::MlT3Medium)
            .role_arn("arn:aws:iam::123456789012:role/service-role/NotebookRole")
            .direct_internet_access(DirectInternetAccess::Disabled)
            .subnet_id("subnet-0abc")
            .security_group_ids("sg-0123")
            .accelerator_types(NotebookInstanceAcceleratorType::MlEia2Medium)
            .root_access(RootAccess::Disabled)
            .build()
    }

    #[test]
    fn test_should_prepare_notebook_lifecycle() {
        let name = test_job_name("nb");
        let preflight = preflight(ValidationMode::Strict);

        let created = preflight.prepare(notebook(&name)).expect("create");
        assert_eq!(created.operation, SageMakerOperation::CreateNotebookInstance);

        let started = preflight
            .prepare(
                StartNotebookInstanceInput::builder()
                    .notebook_instance_name(name.as_str())
                    .build(),
            )
            .expect("start");
        let stopped = preflight
            .prepare(
                StopNotebookInstanceInput::builder()
                    .notebook_instance_name(name.as_str())
                    .build(),
            )
            .expect("stop");
        let deleted = preflight
            .prepare(
                DeleteNotebookInstanceInput::builder()
                    .notebook_instance_name(name.as_str())
                    .build(),
            )
            .expect("delete");

        assert_eq!(
            [started.target, stopped.target, deleted.target],
            [
                "SageMaker.StartNotebookInstance",
                "SageMaker.StopNotebookInstance",
                "SageMaker.DeleteNotebookInstance"
            ]
        );
    }

    #[test]
    fn test_should_encode_sparse_update() {
        let update = UpdateNotebookInstanceInput::builder()
            .notebook_instance_name("research")
            .volume_size_in_gb(50)
            .disassociate_accelerator_types(true)
            .build();
        let prepared = preflight(ValidationMode::Strict)
            .prepare(update)
            .expect("valid update");
        assert_eq!(
            serde_json::to_value(&prepared.input).expect("encode"),
            serde_json::json!({
                "NotebookInstanceName": "research",
                "VolumeSizeInGB": 50,
                "DisassociateAcceleratorTypes": true
            })
        );

        let output: <UpdateNotebookInstanceInput as OperationInput>::Output =
            serde_json::from_str("{}").expect("empty response");
        assert_eq!(output, UpdateNotebookInstanceOutput::default());
    }

    #[test]
    fn test_should_decode_instance_type_added_after_build() {
        let body = r#"{
            "NotebookInstanceName": "research",
            "NotebookInstanceStatus": "InService",
            "InstanceType": "ml.z9.mega",
            "Url": "research.notebook.us-east-1.sagemaker.aws"
        }"#;
        let described: DescribeNotebookInstanceOutput =
            serde_json::from_str(body).expect("lenient decode");
        let instance_type = described.instance_type.expect("instance type present");
        assert!(!instance_type.is_known());
        assert_eq!(instance_type.as_str(), "ml.z9.mega");
        assert_eq!(
            described.notebook_instance_status,
            Some(NotebookInstanceStatus::InService)
        );

        let err = "ml.z9.mega"
            .parse::<InstanceType>()
            .expect_err("strict parse");
        assert!(matches!(err, ModelError::UnknownEnumValue { enum_name: "InstanceType", .. }));
    }

    #[test]
    fn test_should_reject_unknown_instance_type_on_request() {
        let mut input = notebook("research");
        input.instance_type = Some(InstanceType::Unknown("ml.z9.mega".to_owned()));
        let err = preflight(ValidationMode::Strict)
            .prepare(input)
            .expect_err("unknown enum rejected");
        assert!(err.to_string().contains("InstanceType has unknown value ml.z9.mega"));
    }
}
