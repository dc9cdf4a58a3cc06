//! Hyperparameter tuning requests.

use chrono::{DateTime, Utc};

use super::{check_page, check_tags};
use crate::patterns::{ENTITY_NAME, NAME_CONTAINS};
use crate::types::{
    HyperParameterTrainingJobDefinition, HyperParameterTuningJobConfig,
    HyperParameterTuningJobSortByOptions, HyperParameterTuningJobStatus,
    HyperParameterTuningJobWarmStartConfig, SortOrder, Tag,
};
use crate::validate::{Validate, Validator};

fn check_tuning_job_name(v: &mut Validator, name: Option<&str>) {
    v.string("HyperParameterTuningJobName", name)
        .required()
        .length(1, 32)
        .pattern(&ENTITY_NAME);
}

shape! {
    /// Input for the `CreateHyperParameterTuningJob` operation.
    pub struct CreateHyperParameterTuningJobInput {
        /// Name of the tuning job.
        hyper_parameter_tuning_job_name("HyperParameterTuningJobName"): opt String,
        /// Strategy, objective, limits and ranges.
        hyper_parameter_tuning_job_config("HyperParameterTuningJobConfig"): opt HyperParameterTuningJobConfig,
        /// The training jobs the tuner launches.
        training_job_definition("TrainingJobDefinition"): opt HyperParameterTrainingJobDefinition,
        /// Several training job definitions, for multi-algorithm tuning.
        training_job_definitions("TrainingJobDefinitions"): list HyperParameterTrainingJobDefinition,
        /// Parent jobs to warm start from.
        warm_start_config("WarmStartConfig"): opt HyperParameterTuningJobWarmStartConfig,
        /// Tags for the tuning job.
        tags("Tags"): list Tag,
    }
}

impl Validate for CreateHyperParameterTuningJobInput {
    fn check(&self, v: &mut Validator) {
        check_tuning_job_name(v, self.hyper_parameter_tuning_job_name.as_deref());
        v.nested(
            "HyperParameterTuningJobConfig",
            self.hyper_parameter_tuning_job_config.as_ref(),
        )
        .required();
        v.nested(
            "TrainingJobDefinition",
            self.training_job_definition.as_ref(),
        );
        v.list(
            "TrainingJobDefinitions",
            self.training_job_definitions.as_deref(),
        )
        .length(1, 10)
        .each();
        v.nested("WarmStartConfig", self.warm_start_config.as_ref());
        check_tags(v, self.tags.as_deref());
    }
}

shape! {
    /// Input for the `DescribeHyperParameterTuningJob` operation.
    pub struct DescribeHyperParameterTuningJobInput {
        /// Name of the tuning job.
        hyper_parameter_tuning_job_name("HyperParameterTuningJobName"): opt String,
    }
}

impl Validate for DescribeHyperParameterTuningJobInput {
    fn check(&self, v: &mut Validator) {
        check_tuning_job_name(v, self.hyper_parameter_tuning_job_name.as_deref());
    }
}

shape! {
    /// Input for the `ListHyperParameterTuningJobs` operation.
    pub struct ListHyperParameterTuningJobsInput {
        /// Continuation token from a previous page.
        next_token("NextToken"): opt String,
        /// Page size.
        max_results("MaxResults"): opt i32,
        /// Sort key.
        sort_by("SortBy"): opt HyperParameterTuningJobSortByOptions,
        /// Sort direction.
        sort_order("SortOrder"): opt SortOrder,
        /// Only jobs whose name contains this string.
        name_contains("NameContains"): opt String,
        /// Only jobs created after this time.
        creation_time_after("CreationTimeAfter"): opt DateTime<Utc>,
        /// Only jobs created before this time.
        creation_time_before("CreationTimeBefore"): opt DateTime<Utc>,
        /// Only jobs modified after this time.
        last_modified_time_after("LastModifiedTimeAfter"): opt DateTime<Utc>,
        /// Only jobs modified before this time.
        last_modified_time_before("LastModifiedTimeBefore"): opt DateTime<Utc>,
        /// Only jobs in this state.
        status_equals("StatusEquals"): opt HyperParameterTuningJobStatus,
    }
}

impl Validate for ListHyperParameterTuningJobsInput {
    fn check(&self, v: &mut Validator) {
        check_page(v, self.next_token.as_deref(), self.max_results);
        v.enumeration("SortBy", self.sort_by.as_ref());
        v.enumeration("SortOrder", self.sort_order.as_ref());
        v.string("NameContains", self.name_contains.as_deref())
            .length(0, 63)
            .pattern(&NAME_CONTAINS);
        v.enumeration("StatusEquals", self.status_equals.as_ref());
    }
}

shape! {
    /// Input for the `StopHyperParameterTuningJob` operation.
    pub struct StopHyperParameterTuningJobInput {
        /// Name of the tuning job.
        hyper_parameter_tuning_job_name("HyperParameterTuningJobName"): opt String,
    }
}

impl Validate for StopHyperParameterTuningJobInput {
    fn check(&self, v: &mut Validator) {
        check_tuning_job_name(v, self.hyper_parameter_tuning_job_name.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelError;
    use crate::types::{
        HyperParameterTuningJobStrategyType, IntegerParameterRange, ParameterRanges,
        ResourceLimits,
    };

    #[test]
    fn test_should_cap_tuning_job_name_at_32_characters() {
        let input = StopHyperParameterTuningJobInput::builder()
            .hyper_parameter_tuning_job_name("a".repeat(33))
            .build();
        let err = input.validate().unwrap_err().to_string();
        assert_eq!(
            err,
            "1 constraint violation: HyperParameterTuningJobName must have length between 1 and 32, got 33"
        );
    }

    #[test]
    fn test_should_validate_deeply_nested_ranges() {
        let input = CreateHyperParameterTuningJobInput::builder()
            .hyper_parameter_tuning_job_name("tune-1")
            .hyper_parameter_tuning_job_config(
                HyperParameterTuningJobConfig::builder()
                    .strategy(HyperParameterTuningJobStrategyType::Bayesian)
                    .resource_limits(
                        ResourceLimits::builder()
                            .max_number_of_training_jobs(20)
                            .max_parallel_training_jobs(2)
                            .build(),
                    )
                    .parameter_ranges(
                        ParameterRanges::builder()
                            .integer_parameter_ranges(
                                IntegerParameterRange::builder()
                                    .name("max_depth")
                                    .min_value("1")
                                    .build(),
                            )
                            .build(),
                    )
                    .build(),
            )
            .build();

        let Err(ModelError::Validation(errors)) = input.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors.paths().collect::<Vec<_>>(),
            ["HyperParameterTuningJobConfig.ParameterRanges.IntegerParameterRanges[0].MaxValue"]
        );
    }
}
