//! Error surface integration tests.

#[cfg(test)]
mod tests {
    use rustack_sagemaker_core::{PreflightError, ValidationMode};
    use rustack_sagemaker_model::arn::SageMakerResourceType;
    use rustack_sagemaker_model::input::CreateExperimentInput;
    use rustack_sagemaker_model::types::Tag;
    use rustack_sagemaker_model::{
        EntryMap, ModelError, SageMakerArn, SageMakerError, SageMakerErrorCode, ViolationKind,
        sagemaker_error,
    };

    use crate::preflight;

    /// Decode an awsJson1_1 error body the way a runtime would.
    fn decode_error(status: u16, body: &str) -> anyhow::Result<SageMakerError> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        let error_type = value["__type"].as_str().unwrap_or_default();
        let message = value["message"]
            .as_str()
            .or_else(|| value["Message"].as_str())
            .unwrap_or_default();
        let status = http::StatusCode::from_u16(status)?;
        SageMakerError::from_response(status, error_type, message)
            .ok_or_else(|| anyhow::anyhow!("unmodelled error type {error_type} ({status})"))
    }

    #[test]
    fn test_should_decode_service_fault_bodies() {
        let err = decode_error(
            400,
            r#"{"__type": "com.amazonaws.sagemaker#ResourceNotFound", "message": "Experiment churn does not exist"}"#,
        )
        .expect("modelled fault");
        assert_eq!(err.code, SageMakerErrorCode::ResourceNotFound);
        assert_eq!(err.message, "Experiment churn does not exist");
        assert_eq!(err.status_code.map(|s| s.as_u16()), Some(400));
        assert!(!err.is_retryable());

        let err = decode_error(400, r#"{"__type": "ThrottlingException", "Message": "Rate exceeded"}"#)
            .expect("modelled fault");
        assert!(err.is_retryable());
        assert_eq!(err.message, "Rate exceeded");

        assert!(decode_error(500, r#"{"__type": "SomethingNew"}"#).is_err());
        assert!(decode_error(400, r#"{"__type": "UnknownOperationException"}"#).is_err());
    }

    #[test]
    fn test_should_build_errors_with_macro() {
        let err = sagemaker_error!(ResourceInUse, "Notebook research is InService");
        assert_eq!(err.code, SageMakerErrorCode::ResourceInUse);
        assert_eq!(err.status_code, None);
        assert_eq!(
            err.to_string(),
            "SageMakerError(ResourceInUse): Notebook research is InService"
        );
    }

    #[test]
    fn test_should_expose_violation_kinds_through_preflight() {
        let mut input = CreateExperimentInput::builder()
            .experiment_name("churn")
            .build();
        for i in 0..51 {
            input
                .tags
                .get_or_insert_with(Vec::new)
                .push(Tag::new(format!("k{i}"), "v"));
        }

        let err = preflight(ValidationMode::Strict)
            .prepare(input)
            .expect_err("too many tags");
        let PreflightError::Validation { errors, .. } = err else {
            panic!("expected validation error");
        };
        let violation = errors.iter().next().expect("one violation");
        assert_eq!(violation.path, "Tags");
        assert_eq!(
            violation.kind,
            ViolationKind::ItemCount {
                min: 0,
                max: Some(50),
                actual: 51
            }
        );
    }

    #[test]
    fn test_should_map_duplicate_entry_to_model_error() {
        let result = EntryMap::<String>::try_from_entries([("EPOCHS", "1"), ("EPOCHS", "2")]);
        let Err(ModelError::DuplicateKey { key }) = result else {
            panic!("expected duplicate key");
        };
        assert_eq!(key, "EPOCHS");
    }

    #[test]
    fn test_should_build_arn_for_described_resource() {
        let arn = SageMakerArn::new(
            "eu-west-1",
            "123456789012",
            SageMakerResourceType::Experiment,
            "churn",
        );
        let text = arn.to_string();
        assert_eq!(text, "arn:aws:sagemaker:eu-west-1:123456789012:experiment/churn");
        assert_eq!(text.parse::<SageMakerArn>().expect("round trip"), arn);

        let err = "arn:aws:s3:::bucket"
            .parse::<SageMakerArn>()
            .expect_err("not a SageMaker ARN");
        assert!(matches!(err, ModelError::InvalidArn { .. }));
    }
}
