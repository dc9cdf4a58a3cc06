//! Training job request and response integration tests.

#[cfg(test)]
mod tests {
    use rustack_sagemaker_core::ValidationMode;
    use rustack_sagemaker_model::output::DescribeTrainingJobOutput;
    use rustack_sagemaker_model::types::{
        MetricValue, SecondaryStatus, TrainingJobStatus, TrainingInstanceType,
    };
    use rustack_sagemaker_model::input::StopTrainingJobInput;
    use rustack_sagemaker_model::{ModelError, SageMakerArn, Validate};

    use crate::{preflight, test_job_name, training_job};

    #[test]
    fn test_should_prepare_and_encode_training_job() {
        let name = test_job_name("train");
        let prepared = preflight(ValidationMode::Strict)
            .prepare(training_job(&name))
            .expect("valid training job");

        assert_eq!(prepared.target, "SageMaker.CreateTrainingJob");
        let body = serde_json::to_value(&prepared.input).expect("encode body");
        assert_eq!(body["TrainingJobName"], name.as_str());
        assert_eq!(body["ResourceConfig"]["InstanceType"], "ml.m5.xlarge");
        assert_eq!(
            body["InputDataConfig"][0]["DataSource"]["S3DataSource"]["S3DataType"],
            "S3Prefix"
        );
        assert_eq!(body["Tags"][0]["Key"], "team");
        assert!(body.get("VpcConfig").is_none());
        assert!(body.get("HyperParameters").is_none());
    }

    #[test]
    fn test_should_report_every_violation_at_once() {
        let mut input = training_job("ok-name");
        input.training_job_name = Some("-bad".to_owned());
        input.resource_config = None;
        if let Some(stop) = input.stopping_condition.as_mut() {
            stop.max_runtime_in_seconds = Some(0);
        }

        let Err(ModelError::Validation(errors)) = input.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors.paths().collect::<Vec<_>>(),
            [
                "TrainingJobName",
                "ResourceConfig",
                "StoppingCondition.MaxRuntimeInSeconds"
            ]
        );
    }

    #[test]
    fn test_should_decode_describe_response() {
        let body = r#"{
            "TrainingJobName": "xgboost-churn-1",
            "TrainingJobArn": "arn:aws:sagemaker:us-east-1:123456789012:training-job/xgboost-churn-1",
            "TrainingJobStatus": "Completed",
            "SecondaryStatus": "Completed",
            "ResourceConfig": {"InstanceType": "ml.p3.2xlarge", "InstanceCount": 2, "VolumeSizeInGB": 50},
            "HyperParameters": {"max_depth": "5", "eta": "0.2"},
            "ModelArtifacts": {"S3ModelArtifacts": "s3://bucket/output/model.tar.gz"},
            "SecondaryStatusTransitions": [
                {"Status": "Starting", "StartTime": "2024-03-01T10:00:00Z", "EndTime": "2024-03-01T10:02:00Z"},
                {"Status": "Training", "StartTime": "2024-03-01T10:02:00Z"}
            ],
            "FinalMetricDataList": [{"MetricName": "validation:auc", "Value": 0.87}],
            "TrainingTimeInSeconds": 420,
            "SomeFieldAddedLater": {"Nested": true}
        }"#;
        let described: DescribeTrainingJobOutput =
            serde_json::from_str(body).expect("decode describe output");
        assert_eq!(described.training_job_status, Some(TrainingJobStatus::Completed));
        assert_eq!(
            described
                .resource_config
                .as_ref()
                .and_then(|c| c.instance_type.clone()),
            Some(TrainingInstanceType::MlP32xlarge)
        );
        let transitions = described.secondary_status_transitions.as_deref().unwrap_or_default();
        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions[0].status, Some(SecondaryStatus::Starting));
        assert_eq!(transitions[1].end_time, None);
        assert_eq!(
            described.final_metric_data_list.as_deref().unwrap_or_default()[0].value,
            Some(MetricValue::new(0.87))
        );
        assert_eq!(
            described
                .hyper_parameters
                .as_ref()
                .and_then(|p| p.get("eta"))
                .map(String::as_str),
            Some("0.2")
        );

        let arn: SageMakerArn = described
            .training_job_arn
            .as_deref()
            .unwrap_or_default()
            .parse()
            .expect("service ARN");
        assert_eq!(arn.resource_name, "xgboost-churn-1");
        assert_eq!(arn.account_id, "123456789012");
    }

    #[test]
    fn test_should_render_display_without_unset_fields() {
        let input = StopTrainingJobInput::builder()
            .training_job_name("job-1")
            .build();
        assert_eq!(input.to_string(), "{TrainingJobName: job-1}");
        assert_eq!(StopTrainingJobInput::default().to_string(), "{}");
    }
}
