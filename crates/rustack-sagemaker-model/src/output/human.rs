//! Human review responses.

use chrono::{DateTime, Utc};

use crate::types::{
    FlowDefinitionOutputConfig, FlowDefinitionStatus, FlowDefinitionSummary,
    HumanLoopActivationConfig, HumanLoopConfig, HumanLoopRequestSource,
};

shape! {
    /// Output for the `CreateFlowDefinition` operation.
    pub struct CreateFlowDefinitionOutput {
        /// ARN of the new flow definition.
        flow_definition_arn("FlowDefinitionArn"): opt String,
    }
}

shape! {
    /// Output for the `DescribeFlowDefinition` operation.
    pub struct DescribeFlowDefinitionOutput {
        /// Flow definition ARN.
        flow_definition_arn("FlowDefinitionArn"): opt String,
        /// Flow definition name.
        flow_definition_name("FlowDefinitionName"): opt String,
        /// Lifecycle state.
        flow_definition_status("FlowDefinitionStatus"): opt FlowDefinitionStatus,
        /// When the flow definition was created.
        creation_time("CreationTime"): opt DateTime<Utc>,
        /// Built-in integration that starts human loops.
        human_loop_request_source("HumanLoopRequestSource"): opt HumanLoopRequestSource,
        /// When human loops start.
        human_loop_activation_config("HumanLoopActivationConfig"): opt HumanLoopActivationConfig,
        /// Work team and task template.
        human_loop_config("HumanLoopConfig"): opt HumanLoopConfig,
        /// Where review results are written.
        output_config("OutputConfig"): opt FlowDefinitionOutputConfig,
        /// IAM role used by the flow.
        role_arn("RoleArn"): opt String,
        /// Why creation failed.
        failure_reason("FailureReason"): opt String,
    }
}

shape! {
    /// Output for the `ListFlowDefinitions` operation.
    pub struct ListFlowDefinitionsOutput {
        /// One summary per flow definition.
        flow_definition_summaries("FlowDefinitionSummaries"): list FlowDefinitionSummary,
        /// Token of the next page.
        next_token("NextToken"): opt String,
    }
}

shape! {
    /// Output for the `DeleteFlowDefinition` operation.
    pub struct DeleteFlowDefinitionOutput {}
}
