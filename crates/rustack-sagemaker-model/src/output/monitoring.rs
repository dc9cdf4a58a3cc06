//! Model monitoring responses.

use chrono::{DateTime, Utc};

use crate::types::{
    MonitoringExecutionSummary, MonitoringScheduleConfig, MonitoringScheduleSummary,
    MonitoringType, ScheduleStatus,
};

shape! {
    /// Output for the `CreateMonitoringSchedule` operation.
    pub struct CreateMonitoringScheduleOutput {
        /// ARN of the new schedule.
        monitoring_schedule_arn("MonitoringScheduleArn"): opt String,
    }
}

shape! {
    /// Output for the `DescribeMonitoringSchedule` operation.
    pub struct DescribeMonitoringScheduleOutput {
        /// Schedule ARN.
        monitoring_schedule_arn("MonitoringScheduleArn"): opt String,
        /// Schedule name.
        monitoring_schedule_name("MonitoringScheduleName"): opt String,
        /// Schedule state.
        monitoring_schedule_status("MonitoringScheduleStatus"): opt ScheduleStatus,
        /// What the schedule checks.
        monitoring_type("MonitoringType"): opt MonitoringType,
        /// Why the schedule failed.
        failure_reason("FailureReason"): opt String,
        /// When the schedule was created.
        creation_time("CreationTime"): opt DateTime<Utc>,
        /// When the schedule was last modified.
        last_modified_time("LastModifiedTime"): opt DateTime<Utc>,
        /// Schedule and job definition.
        monitoring_schedule_config("MonitoringScheduleConfig"): opt MonitoringScheduleConfig,
        /// Endpoint being monitored.
        endpoint_name("EndpointName"): opt String,
        /// Most recent execution.
        last_monitoring_execution_summary("LastMonitoringExecutionSummary"): opt MonitoringExecutionSummary,
    }
}

shape! {
    /// Output for the `ListMonitoringSchedules` operation.
    pub struct ListMonitoringSchedulesOutput {
        /// One summary per schedule.
        monitoring_schedule_summaries("MonitoringScheduleSummaries"): list MonitoringScheduleSummary,
        /// Token of the next page.
        next_token("NextToken"): opt String,
    }
}

shape! {
    /// Output for the `ListMonitoringExecutions` operation.
    pub struct ListMonitoringExecutionsOutput {
        /// One summary per execution.
        monitoring_execution_summaries("MonitoringExecutionSummaries"): list MonitoringExecutionSummary,
        /// Token of the next page.
        next_token("NextToken"): opt String,
    }
}

shape! {
    /// Output for the `StartMonitoringSchedule` operation.
    pub struct StartMonitoringScheduleOutput {}
}

shape! {
    /// Output for the `StopMonitoringSchedule` operation.
    pub struct StopMonitoringScheduleOutput {}
}

shape! {
    /// Output for the `DeleteMonitoringSchedule` operation.
    pub struct DeleteMonitoringScheduleOutput {}
}
