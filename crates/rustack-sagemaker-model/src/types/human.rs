//! Human review (augmented AI) types.

use chrono::{DateTime, Utc};

use crate::patterns::{
    ANY_TEXT, HUMAN_TASK_UI_ARN, LAMBDA_FUNCTION_ARN, S3_URI, TASK_KEYWORD, TASK_TITLE,
    WORKTEAM_ARN,
};
use crate::validate::{Validate, Validator};

string_enum! {
    /// Lifecycle state of a flow definition.
    pub enum FlowDefinitionStatus {
        Initializing => "Initializing",
        Active => "Active",
        Failed => "Failed",
        Deleting => "Deleting",
    }
}

string_enum! {
    /// Built-in AWS integrations that can start human loops.
    pub enum AwsManagedHumanLoopRequestSource {
        RekognitionDetectModerationLabelsImageV3 => "AWS/Rekognition/DetectModerationLabels/Image/V3",
        TextractAnalyzeDocumentFormsV1 => "AWS/Textract/AnalyzeDocument/Forms/V1",
    }
}

shape! {
    /// The work team and task template used for human review.
    pub struct HumanLoopConfig {
        /// Work team that performs the tasks.
        workteam_arn("WorkteamArn"): opt String,
        /// Worker task template.
        human_task_ui_arn("HumanTaskUiArn"): opt String,
        /// Title shown to workers.
        task_title("TaskTitle"): opt String,
        /// Description shown to workers.
        task_description("TaskDescription"): opt String,
        /// Number of workers per task.
        task_count("TaskCount"): opt i32,
        /// How long a task stays available to workers.
        task_availability_lifetime_in_seconds("TaskAvailabilityLifetimeInSeconds"): opt i32,
        /// How long a worker may spend on a task.
        task_time_limit_in_seconds("TaskTimeLimitInSeconds"): opt i32,
        /// Keywords that help workers find tasks.
        task_keywords("TaskKeywords"): list String,
        /// Payment for a public workforce.
        public_workforce_task_price("PublicWorkforceTaskPrice"): opt PublicWorkforceTaskPrice,
    }
}

impl Validate for HumanLoopConfig {
    fn check(&self, v: &mut Validator) {
        v.string("WorkteamArn", self.workteam_arn.as_deref())
            .required()
            .length(0, 256)
            .pattern(&WORKTEAM_ARN);
        v.string("HumanTaskUiArn", self.human_task_ui_arn.as_deref())
            .required()
            .length(0, 1024)
            .pattern(&HUMAN_TASK_UI_ARN);
        v.string("TaskTitle", self.task_title.as_deref())
            .required()
            .length(1, 128)
            .pattern(&TASK_TITLE);
        v.string("TaskDescription", self.task_description.as_deref())
            .required()
            .length(1, 255)
            .pattern(&ANY_TEXT);
        v.int("TaskCount", self.task_count)
            .required()
            .range(1, 3);
        v.int(
            "TaskAvailabilityLifetimeInSeconds",
            self.task_availability_lifetime_in_seconds,
        )
        .range(1, 864_000);
        v.int("TaskTimeLimitInSeconds", self.task_time_limit_in_seconds)
            .range(30, 28_800);
        v.list("TaskKeywords", self.task_keywords.as_deref())
            .length(1, 5)
            .item_length(1, 30)
            .item_pattern(&TASK_KEYWORD);
        v.nested(
            "PublicWorkforceTaskPrice",
            self.public_workforce_task_price.as_ref(),
        );
    }
}

shape! {
    /// The labeling task sent to human workers: who works on it, what they
    /// see and how their answers are merged.
    pub struct HumanTaskConfig {
        /// Work team that performs the tasks.
        workteam_arn("WorkteamArn"): opt String,
        /// Worker user interface.
        ui_config("UiConfig"): opt UiConfig,
        /// Lambda run on each data object before it reaches a worker.
        pre_human_task_lambda_arn("PreHumanTaskLambdaArn"): opt String,
        /// Keywords that help workers find tasks.
        task_keywords("TaskKeywords"): list String,
        /// Title shown to workers.
        task_title("TaskTitle"): opt String,
        /// Description shown to workers.
        task_description("TaskDescription"): opt String,
        /// Number of workers that label each data object.
        number_of_human_workers_per_data_object("NumberOfHumanWorkersPerDataObject"): opt i32,
        /// How long a worker may spend on a task.
        task_time_limit_in_seconds("TaskTimeLimitInSeconds"): opt i32,
        /// How long a task stays available to workers.
        task_availability_lifetime_in_seconds("TaskAvailabilityLifetimeInSeconds"): opt i32,
        /// Upper bound on data objects in front of workers at once.
        max_concurrent_task_count("MaxConcurrentTaskCount"): opt i32,
        /// How answers from several workers are merged.
        annotation_consolidation_config("AnnotationConsolidationConfig"): opt AnnotationConsolidationConfig,
        /// Payment for a public workforce.
        public_workforce_task_price("PublicWorkforceTaskPrice"): opt PublicWorkforceTaskPrice,
    }
}

impl Validate for HumanTaskConfig {
    fn check(&self, v: &mut Validator) {
        v.string("WorkteamArn", self.workteam_arn.as_deref())
            .required()
            .length(0, 256)
            .pattern(&WORKTEAM_ARN);
        v.nested("UiConfig", self.ui_config.as_ref()).required();
        v.string(
            "PreHumanTaskLambdaArn",
            self.pre_human_task_lambda_arn.as_deref(),
        )
        .required()
        .length(0, 2048)
        .pattern(&LAMBDA_FUNCTION_ARN);
        v.list("TaskKeywords", self.task_keywords.as_deref())
            .length(1, 5)
            .item_length(1, 30)
            .item_pattern(&TASK_KEYWORD);
        v.string("TaskTitle", self.task_title.as_deref())
            .required()
            .length(1, 128)
            .pattern(&TASK_TITLE);
        v.string("TaskDescription", self.task_description.as_deref())
            .required()
            .length(1, 255)
            .pattern(&ANY_TEXT);
        v.int(
            "NumberOfHumanWorkersPerDataObject",
            self.number_of_human_workers_per_data_object,
        )
        .required()
        .range(1, 9);
        v.int("TaskTimeLimitInSeconds", self.task_time_limit_in_seconds)
            .required()
            .range(30, 28_800);
        v.int(
            "TaskAvailabilityLifetimeInSeconds",
            self.task_availability_lifetime_in_seconds,
        )
        .range(60, 864_000);
        v.int("MaxConcurrentTaskCount", self.max_concurrent_task_count)
            .range(1, 1000);
        v.nested(
            "AnnotationConsolidationConfig",
            self.annotation_consolidation_config.as_ref(),
        )
        .required();
        v.nested(
            "PublicWorkforceTaskPrice",
            self.public_workforce_task_price.as_ref(),
        );
    }
}

shape! {
    /// Worker user interface, given either as a template in S3 or as a
    /// registered task UI.
    pub struct UiConfig {
        /// S3 location of the worker task template.
        ui_template_s3_uri("UiTemplateS3Uri"): opt String,
        /// Registered worker task template.
        human_task_ui_arn("HumanTaskUiArn"): opt String,
    }
}

impl Validate for UiConfig {
    fn check(&self, v: &mut Validator) {
        v.string("UiTemplateS3Uri", self.ui_template_s3_uri.as_deref())
            .length(0, 1024)
            .pattern(&S3_URI);
        v.string("HumanTaskUiArn", self.human_task_ui_arn.as_deref())
            .length(0, 1024)
            .pattern(&HUMAN_TASK_UI_ARN);
    }
}

shape! {
    /// Lambda that merges the answers of several workers.
    pub struct AnnotationConsolidationConfig {
        /// The consolidation function.
        annotation_consolidation_lambda_arn("AnnotationConsolidationLambdaArn"): opt String,
    }
}

impl Validate for AnnotationConsolidationConfig {
    fn check(&self, v: &mut Validator) {
        v.string(
            "AnnotationConsolidationLambdaArn",
            self.annotation_consolidation_lambda_arn.as_deref(),
        )
        .required()
        .length(0, 2048)
        .pattern(&LAMBDA_FUNCTION_ARN);
    }
}

shape! {
    /// Price paid to public workforce workers per task.
    pub struct PublicWorkforceTaskPrice {
        /// Amount in US dollars.
        amount_in_usd("AmountInUsd"): opt Usd,
    }
}

impl Validate for PublicWorkforceTaskPrice {
    fn check(&self, v: &mut Validator) {
        v.nested("AmountInUsd", self.amount_in_usd.as_ref());
    }
}

shape! {
    /// A US dollar amount split into whole units.
    pub struct Usd {
        /// Whole dollars.
        dollars("Dollars"): opt i32,
        /// Cents.
        cents("Cents"): opt i32,
        /// Tenths of a cent.
        tenth_fractions_of_a_cent("TenthFractionsOfACent"): opt i32,
    }
}

impl Validate for Usd {
    fn check(&self, v: &mut Validator) {
        v.int("Dollars", self.dollars).range(0, 2);
        v.int("Cents", self.cents).range(0, 99);
        v.int("TenthFractionsOfACent", self.tenth_fractions_of_a_cent)
            .range(0, 9);
    }
}

shape! {
    /// Where human review results are written.
    pub struct FlowDefinitionOutputConfig {
        /// S3 prefix for results.
        s3_output_path("S3OutputPath"): opt String,
        /// KMS key used to encrypt results.
        kms_key_id("KmsKeyId"): opt String,
    }
}

impl Validate for FlowDefinitionOutputConfig {
    fn check(&self, v: &mut Validator) {
        v.string("S3OutputPath", self.s3_output_path.as_deref())
            .required()
            .length(0, 1024)
            .pattern(&S3_URI);
        v.string("KmsKeyId", self.kms_key_id.as_deref())
            .length(0, 2048)
            .pattern(&ANY_TEXT);
    }
}

shape! {
    /// Which built-in integration starts human loops.
    pub struct HumanLoopRequestSource {
        /// The integration.
        aws_managed_human_loop_request_source("AwsManagedHumanLoopRequestSource"): opt AwsManagedHumanLoopRequestSource,
    }
}

impl Validate for HumanLoopRequestSource {
    fn check(&self, v: &mut Validator) {
        v.enumeration(
            "AwsManagedHumanLoopRequestSource",
            self.aws_managed_human_loop_request_source.as_ref(),
        )
        .required();
    }
}

shape! {
    /// When a human loop is started.
    pub struct HumanLoopActivationConfig {
        /// The activation conditions.
        human_loop_activation_conditions_config("HumanLoopActivationConditionsConfig"): opt HumanLoopActivationConditionsConfig,
    }
}

impl Validate for HumanLoopActivationConfig {
    fn check(&self, v: &mut Validator) {
        v.nested(
            "HumanLoopActivationConditionsConfig",
            self.human_loop_activation_conditions_config.as_ref(),
        )
        .required();
    }
}

shape! {
    /// Activation conditions expressed as a JSON document.
    pub struct HumanLoopActivationConditionsConfig {
        /// JSON conditions document.
        human_loop_activation_conditions("HumanLoopActivationConditions"): opt String,
    }
}

impl Validate for HumanLoopActivationConditionsConfig {
    fn check(&self, v: &mut Validator) {
        v.string(
            "HumanLoopActivationConditions",
            self.human_loop_activation_conditions.as_deref(),
        )
        .required()
        .length(0, 10_240);
    }
}

shape! {
    /// Summary of a flow definition in a listing.
    pub struct FlowDefinitionSummary {
        /// Flow definition name.
        flow_definition_name("FlowDefinitionName"): opt String,
        /// Flow definition ARN.
        flow_definition_arn("FlowDefinitionArn"): opt String,
        /// Lifecycle state.
        flow_definition_status("FlowDefinitionStatus"): opt FlowDefinitionStatus,
        /// When the flow definition was created.
        creation_time("CreationTime"): opt DateTime<Utc>,
        /// Why creation failed.
        failure_reason("FailureReason"): opt String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelError;

    fn bounding_box_task() -> HumanTaskConfig {
        HumanTaskConfig::builder()
            .workteam_arn("arn:aws:sagemaker:us-east-1:123456789012:workteam/private-crowd/labelers")
            .ui_config(
                UiConfig::builder()
                    .ui_template_s3_uri("s3://bucket/templates/bounding-box.liquid.html")
                    .build(),
            )
            .pre_human_task_lambda_arn(
                "arn:aws:lambda:us-east-1:432418664414:function:PRE-BoundingBox",
            )
            .task_keywords("Images")
            .task_keywords("bounding boxes")
            .task_title("Draw boxes around cars")
            .task_description("Draw a tight box around every car in the image.")
            .number_of_human_workers_per_data_object(3)
            .task_time_limit_in_seconds(300)
            .annotation_consolidation_config(
                AnnotationConsolidationConfig::builder()
                    .annotation_consolidation_lambda_arn(
                        "arn:aws:lambda:us-east-1:432418664414:function:ACS-BoundingBox",
                    )
                    .build(),
            )
            .build()
    }

    #[test]
    fn test_should_accept_complete_human_task_config() {
        bounding_box_task().validate().unwrap();
    }

    #[test]
    fn test_should_require_ui_lambda_and_consolidation() {
        let Err(ModelError::Validation(errors)) = HumanTaskConfig::default().validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors.paths().collect::<Vec<_>>(),
            [
                "WorkteamArn",
                "UiConfig",
                "PreHumanTaskLambdaArn",
                "TaskTitle",
                "TaskDescription",
                "NumberOfHumanWorkersPerDataObject",
                "TaskTimeLimitInSeconds",
                "AnnotationConsolidationConfig",
            ]
        );
    }

    #[test]
    fn test_should_check_nested_task_fields() {
        let mut task = bounding_box_task();
        task.number_of_human_workers_per_data_object = Some(10);
        task.task_keywords = Some(vec!["ok".to_owned(), "not-ok!".to_owned()]);
        task.ui_config = Some(UiConfig::builder().ui_template_s3_uri("ftp://bucket/t").build());
        task.annotation_consolidation_config = Some(
            AnnotationConsolidationConfig::builder()
                .annotation_consolidation_lambda_arn("arn:aws:s3:::bucket")
                .build(),
        );

        let Err(ModelError::Validation(errors)) = task.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors.paths().collect::<Vec<_>>(),
            [
                "UiConfig.UiTemplateS3Uri",
                "TaskKeywords[1]",
                "NumberOfHumanWorkersPerDataObject",
                "AnnotationConsolidationConfig.AnnotationConsolidationLambdaArn",
            ]
        );
    }

    #[test]
    fn test_should_render_only_set_ui_fields() {
        let ui = UiConfig::builder()
            .human_task_ui_arn("arn:aws:sagemaker:us-east-1:123456789012:human-task-ui/boxes")
            .build();
        assert_eq!(
            ui.to_string(),
            "{HumanTaskUiArn: arn:aws:sagemaker:us-east-1:123456789012:human-task-ui/boxes}"
        );
    }
}
