//! Human review requests.

use chrono::{DateTime, Utc};

use super::{check_page, check_tags};
use crate::patterns::{FLOW_DEFINITION_NAME, ROLE_ARN};
use crate::types::{
    FlowDefinitionOutputConfig, HumanLoopActivationConfig, HumanLoopConfig,
    HumanLoopRequestSource, SortOrder, Tag,
};
use crate::validate::{Validate, Validator};

fn check_flow_definition_name(v: &mut Validator, name: Option<&str>) {
    v.string("FlowDefinitionName", name)
        .required()
        .length(1, 63)
        .pattern(&FLOW_DEFINITION_NAME);
}

shape! {
    /// Input for the `CreateFlowDefinition` operation.
    pub struct CreateFlowDefinitionInput {
        /// Name of the flow definition.
        flow_definition_name("FlowDefinitionName"): opt String,
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
        /// Tags for the flow definition.
        tags("Tags"): list Tag,
    }
}

impl Validate for CreateFlowDefinitionInput {
    fn check(&self, v: &mut Validator) {
        check_flow_definition_name(v, self.flow_definition_name.as_deref());
        v.nested(
            "HumanLoopRequestSource",
            self.human_loop_request_source.as_ref(),
        );
        v.nested(
            "HumanLoopActivationConfig",
            self.human_loop_activation_config.as_ref(),
        );
        v.nested("HumanLoopConfig", self.human_loop_config.as_ref())
            .required();
        v.nested("OutputConfig", self.output_config.as_ref())
            .required();
        v.string("RoleArn", self.role_arn.as_deref())
            .required()
            .length(20, 2048)
            .pattern(&ROLE_ARN);
        check_tags(v, self.tags.as_deref());
    }
}

shape! {
    /// Input for the `DescribeFlowDefinition` operation.
    pub struct DescribeFlowDefinitionInput {
        /// Name of the flow definition.
        flow_definition_name("FlowDefinitionName"): opt String,
    }
}

impl Validate for DescribeFlowDefinitionInput {
    fn check(&self, v: &mut Validator) {
        check_flow_definition_name(v, self.flow_definition_name.as_deref());
    }
}

shape! {
    /// Input for the `ListFlowDefinitions` operation.
    pub struct ListFlowDefinitionsInput {
        /// Only flow definitions created after this time.
        creation_time_after("CreationTimeAfter"): opt DateTime<Utc>,
        /// Only flow definitions created before this time.
        creation_time_before("CreationTimeBefore"): opt DateTime<Utc>,
        /// Sort direction.
        sort_order("SortOrder"): opt SortOrder,
        /// Continuation token from a previous page.
        next_token("NextToken"): opt String,
        /// Page size.
        max_results("MaxResults"): opt i32,
    }
}

impl Validate for ListFlowDefinitionsInput {
    fn check(&self, v: &mut Validator) {
        v.enumeration("SortOrder", self.sort_order.as_ref());
        check_page(v, self.next_token.as_deref(), self.max_results);
    }
}

shape! {
    /// Input for the `DeleteFlowDefinition` operation.
    pub struct DeleteFlowDefinitionInput {
        /// Name of the flow definition.
        flow_definition_name("FlowDefinitionName"): opt String,
    }
}

impl Validate for DeleteFlowDefinitionInput {
    fn check(&self, v: &mut Validator) {
        check_flow_definition_name(v, self.flow_definition_name.as_deref());
    }
}
