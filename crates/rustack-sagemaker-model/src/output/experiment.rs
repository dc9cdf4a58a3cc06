//! Experiment responses.

use chrono::{DateTime, Utc};

use crate::types::{ExperimentSource, ExperimentSummary, UserContext};

shape! {
    /// Output for the `CreateExperiment` operation.
    pub struct CreateExperimentOutput {
        /// ARN of the new experiment.
        experiment_arn("ExperimentArn"): opt String,
    }
}

shape! {
    /// Output for the `DescribeExperiment` operation.
    pub struct DescribeExperimentOutput {
        /// Experiment name.
        experiment_name("ExperimentName"): opt String,
        /// Experiment ARN.
        experiment_arn("ExperimentArn"): opt String,
        /// Name shown in Studio.
        display_name("DisplayName"): opt String,
        /// Where the experiment came from.
        source("Source"): opt ExperimentSource,
        /// Description.
        description("Description"): opt String,
        /// When the experiment was created.
        creation_time("CreationTime"): opt DateTime<Utc>,
        /// Who created the experiment.
        created_by("CreatedBy"): opt UserContext,
        /// When the experiment was last modified.
        last_modified_time("LastModifiedTime"): opt DateTime<Utc>,
        /// Who last modified the experiment.
        last_modified_by("LastModifiedBy"): opt UserContext,
    }
}

shape! {
    /// Output for the `ListExperiments` operation.
    pub struct ListExperimentsOutput {
        /// One summary per experiment.
        experiment_summaries("ExperimentSummaries"): list ExperimentSummary,
        /// Token of the next page.
        next_token("NextToken"): opt String,
    }
}

shape! {
    /// Output for the `UpdateExperiment` operation.
    pub struct UpdateExperimentOutput {
        /// ARN of the updated experiment.
        experiment_arn("ExperimentArn"): opt String,
    }
}

shape! {
    /// Output for the `DeleteExperiment` operation.
    pub struct DeleteExperimentOutput {
        /// ARN of the deleted experiment.
        experiment_arn("ExperimentArn"): opt String,
    }
}
