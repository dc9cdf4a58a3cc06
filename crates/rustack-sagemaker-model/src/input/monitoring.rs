//! Model monitoring requests.

use chrono::{DateTime, Utc};

use super::{check_page, check_tags};
use crate::patterns::{ENTITY_NAME, NAME_CONTAINS};
use crate::types::{
    ExecutionStatus, MonitoringExecutionSortKey, MonitoringScheduleConfig,
    MonitoringScheduleSortKey, MonitoringType, ScheduleStatus, SortOrder, Tag,
};
use crate::validate::{Validate, Validator};

fn check_schedule_name(v: &mut Validator, name: Option<&str>, required: bool) {
    let check = v
        .string("MonitoringScheduleName", name)
        .length(1, 63)
        .pattern(&ENTITY_NAME);
    if required {
        check.required();
    }
}

fn check_optional_name(v: &mut Validator, field: &str, name: Option<&str>) {
    v.string(field, name).length(0, 63).pattern(&ENTITY_NAME);
}

shape! {
    /// Input for the `CreateMonitoringSchedule` operation.
    pub struct CreateMonitoringScheduleInput {
        /// Name of the schedule, unique per account and region.
        monitoring_schedule_name("MonitoringScheduleName"): opt String,
        /// Schedule and job definition.
        monitoring_schedule_config("MonitoringScheduleConfig"): opt MonitoringScheduleConfig,
        /// Tags for the schedule.
        tags("Tags"): list Tag,
    }
}

impl Validate for CreateMonitoringScheduleInput {
    fn check(&self, v: &mut Validator) {
        check_schedule_name(v, self.monitoring_schedule_name.as_deref(), true);
        v.nested(
            "MonitoringScheduleConfig",
            self.monitoring_schedule_config.as_ref(),
        )
        .required();
        check_tags(v, self.tags.as_deref());
    }
}

shape! {
    /// Input for the `DescribeMonitoringSchedule` operation.
    pub struct DescribeMonitoringScheduleInput {
        /// Name of the schedule.
        monitoring_schedule_name("MonitoringScheduleName"): opt String,
    }
}

impl Validate for DescribeMonitoringScheduleInput {
    fn check(&self, v: &mut Validator) {
        check_schedule_name(v, self.monitoring_schedule_name.as_deref(), true);
    }
}

shape! {
    /// Input for the `ListMonitoringSchedules` operation.
    pub struct ListMonitoringSchedulesInput {
        /// Only schedules of this endpoint.
        endpoint_name("EndpointName"): opt String,
        /// Sort key.
        sort_by("SortBy"): opt MonitoringScheduleSortKey,
        /// Sort direction.
        sort_order("SortOrder"): opt SortOrder,
        /// Continuation token from a previous page.
        next_token("NextToken"): opt String,
        /// Page size.
        max_results("MaxResults"): opt i32,
        /// Only schedules whose name contains this string.
        name_contains("NameContains"): opt String,
        /// Only schedules created before this time.
        creation_time_before("CreationTimeBefore"): opt DateTime<Utc>,
        /// Only schedules created after this time.
        creation_time_after("CreationTimeAfter"): opt DateTime<Utc>,
        /// Only schedules modified before this time.
        last_modified_time_before("LastModifiedTimeBefore"): opt DateTime<Utc>,
        /// Only schedules modified after this time.
        last_modified_time_after("LastModifiedTimeAfter"): opt DateTime<Utc>,
        /// Only schedules in this state.
        status_equals("StatusEquals"): opt ScheduleStatus,
        /// Only schedules using this job definition.
        monitoring_job_definition_name("MonitoringJobDefinitionName"): opt String,
        /// Only schedules of this type.
        monitoring_type_equals("MonitoringTypeEquals"): opt MonitoringType,
    }
}

impl Validate for ListMonitoringSchedulesInput {
    fn check(&self, v: &mut Validator) {
        check_optional_name(v, "EndpointName", self.endpoint_name.as_deref());
        v.enumeration("SortBy", self.sort_by.as_ref());
        v.enumeration("SortOrder", self.sort_order.as_ref());
        check_page(v, self.next_token.as_deref(), self.max_results);
        v.string("NameContains", self.name_contains.as_deref())
            .length(0, 63)
            .pattern(&NAME_CONTAINS);
        v.enumeration("StatusEquals", self.status_equals.as_ref());
        check_optional_name(
            v,
            "MonitoringJobDefinitionName",
            self.monitoring_job_definition_name.as_deref(),
        );
        v.enumeration(
            "MonitoringTypeEquals",
            self.monitoring_type_equals.as_ref(),
        );
    }
}

shape! {
    /// Input for the `ListMonitoringExecutions` operation.
    pub struct ListMonitoringExecutionsInput {
        /// Only executions of this schedule.
        monitoring_schedule_name("MonitoringScheduleName"): opt String,
        /// Only executions against this endpoint.
        endpoint_name("EndpointName"): opt String,
        /// Sort key.
        sort_by("SortBy"): opt MonitoringExecutionSortKey,
        /// Sort direction.
        sort_order("SortOrder"): opt SortOrder,
        /// Continuation token from a previous page.
        next_token("NextToken"): opt String,
        /// Page size.
        max_results("MaxResults"): opt i32,
        /// Only executions scheduled before this time.
        scheduled_time_before("ScheduledTimeBefore"): opt DateTime<Utc>,
        /// Only executions scheduled after this time.
        scheduled_time_after("ScheduledTimeAfter"): opt DateTime<Utc>,
        /// Only executions created before this time.
        creation_time_before("CreationTimeBefore"): opt DateTime<Utc>,
        /// Only executions created after this time.
        creation_time_after("CreationTimeAfter"): opt DateTime<Utc>,
        /// Only executions modified before this time.
        last_modified_time_before("LastModifiedTimeBefore"): opt DateTime<Utc>,
        /// Only executions modified after this time.
        last_modified_time_after("LastModifiedTimeAfter"): opt DateTime<Utc>,
        /// Only executions in this state.
        status_equals("StatusEquals"): opt ExecutionStatus,
        /// Only executions using this job definition.
        monitoring_job_definition_name("MonitoringJobDefinitionName"): opt String,
        /// Only executions of this type.
        monitoring_type_equals("MonitoringTypeEquals"): opt MonitoringType,
    }
}

impl Validate for ListMonitoringExecutionsInput {
    fn check(&self, v: &mut Validator) {
        check_schedule_name(v, self.monitoring_schedule_name.as_deref(), false);
        check_optional_name(v, "EndpointName", self.endpoint_name.as_deref());
        v.enumeration("SortBy", self.sort_by.as_ref());
        v.enumeration("SortOrder", self.sort_order.as_ref());
        check_page(v, self.next_token.as_deref(), self.max_results);
        v.enumeration("StatusEquals", self.status_equals.as_ref());
        check_optional_name(
            v,
            "MonitoringJobDefinitionName",
            self.monitoring_job_definition_name.as_deref(),
        );
        v.enumeration(
            "MonitoringTypeEquals",
            self.monitoring_type_equals.as_ref(),
        );
    }
}

shape! {
    /// Input for the `StartMonitoringSchedule` operation.
    pub struct StartMonitoringScheduleInput {
        /// Name of the schedule.
        monitoring_schedule_name("MonitoringScheduleName"): opt String,
    }
}

impl Validate for StartMonitoringScheduleInput {
    fn check(&self, v: &mut Validator) {
        check_schedule_name(v, self.monitoring_schedule_name.as_deref(), true);
    }
}

shape! {
    /// Input for the `StopMonitoringSchedule` operation.
    pub struct StopMonitoringScheduleInput {
        /// Name of the schedule.
        monitoring_schedule_name("MonitoringScheduleName"): opt String,
    }
}

impl Validate for StopMonitoringScheduleInput {
    fn check(&self, v: &mut Validator) {
        check_schedule_name(v, self.monitoring_schedule_name.as_deref(), true);
    }
}

shape! {
    /// Input for the `DeleteMonitoringSchedule` operation.
    pub struct DeleteMonitoringScheduleInput {
        /// Name of the schedule.
        monitoring_schedule_name("MonitoringScheduleName"): opt String,
    }
}

impl Validate for DeleteMonitoringScheduleInput {
    fn check(&self, v: &mut Validator) {
        check_schedule_name(v, self.monitoring_schedule_name.as_deref(), true);
    }
}
