//! Experiment requests.

use chrono::{DateTime, Utc};

use super::{check_page, check_tags};
use crate::patterns::{ANY_MULTILINE, EXPERIMENT_ENTITY_NAME};
use crate::types::{SortExperimentsBy, SortOrder, Tag};
use crate::validate::{Validate, Validator};

fn check_experiment_name(v: &mut Validator, name: Option<&str>) {
    v.string("ExperimentName", name)
        .required()
        .length(1, 120)
        .pattern(&EXPERIMENT_ENTITY_NAME);
}

fn check_display_fields(v: &mut Validator, display_name: Option<&str>, description: Option<&str>) {
    v.string("DisplayName", display_name)
        .length(1, 120)
        .pattern(&EXPERIMENT_ENTITY_NAME);
    v.string("Description", description)
        .length(0, 3072)
        .pattern(&ANY_MULTILINE);
}

shape! {
    /// Input for the `CreateExperiment` operation.
    pub struct CreateExperimentInput {
        /// Name of the experiment, unique per account and region.
        experiment_name("ExperimentName"): opt String,
        /// Name shown in Studio; defaults to `ExperimentName`.
        display_name("DisplayName"): opt String,
        /// Description.
        description("Description"): opt String,
        /// Tags for the experiment.
        tags("Tags"): list Tag,
    }
}

impl Validate for CreateExperimentInput {
    fn check(&self, v: &mut Validator) {
        check_experiment_name(v, self.experiment_name.as_deref());
        check_display_fields(v, self.display_name.as_deref(), self.description.as_deref());
        check_tags(v, self.tags.as_deref());
    }
}

shape! {
    /// Input for the `DescribeExperiment` operation.
    pub struct DescribeExperimentInput {
        /// Name of the experiment.
        experiment_name("ExperimentName"): opt String,
    }
}

impl Validate for DescribeExperimentInput {
    fn check(&self, v: &mut Validator) {
        check_experiment_name(v, self.experiment_name.as_deref());
    }
}

shape! {
    /// Input for the `ListExperiments` operation.
    pub struct ListExperimentsInput {
        /// Only experiments created after this time.
        created_after("CreatedAfter"): opt DateTime<Utc>,
        /// Only experiments created before this time.
        created_before("CreatedBefore"): opt DateTime<Utc>,
        /// Sort key.
        sort_by("SortBy"): opt SortExperimentsBy,
        /// Sort direction.
        sort_order("SortOrder"): opt SortOrder,
        /// Continuation token from a previous page.
        next_token("NextToken"): opt String,
        /// Page size.
        max_results("MaxResults"): opt i32,
    }
}

impl Validate for ListExperimentsInput {
    fn check(&self, v: &mut Validator) {
        v.enumeration("SortBy", self.sort_by.as_ref());
        v.enumeration("SortOrder", self.sort_order.as_ref());
        check_page(v, self.next_token.as_deref(), self.max_results);
    }
}

shape! {
    /// Input for the `UpdateExperiment` operation.
    pub struct UpdateExperimentInput {
        /// Name of the experiment.
        experiment_name("ExperimentName"): opt String,
        /// New display name.
        display_name("DisplayName"): opt String,
        /// New description.
        description("Description"): opt String,
    }
}

impl Validate for UpdateExperimentInput {
    fn check(&self, v: &mut Validator) {
        check_experiment_name(v, self.experiment_name.as_deref());
        check_display_fields(v, self.display_name.as_deref(), self.description.as_deref());
    }
}

shape! {
    /// Input for the `DeleteExperiment` operation.
    pub struct DeleteExperimentInput {
        /// Name of the experiment.
        experiment_name("ExperimentName"): opt String,
    }
}

impl Validate for DeleteExperimentInput {
    fn check(&self, v: &mut Validator) {
        check_experiment_name(v, self.experiment_name.as_deref());
    }
}
