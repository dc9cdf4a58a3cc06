//! Pagination integration tests.

#[cfg(test)]
mod tests {
    use rustack_sagemaker_model::input::{ListExperimentsInput, ListTrainingJobsInput};
    use rustack_sagemaker_model::output::{ListExperimentsOutput, ListTrainingJobsOutput};
    use rustack_sagemaker_model::types::{
        ExperimentSummary, SortBy, SortOrder, TrainingJobStatus, TrainingJobSummary,
    };
    use rustack_sagemaker_model::{ModelError, PaginatedInput, SageMakerOperation, Validate};

    use crate::collect_pages;

    fn training_page(names: &[&str], next: Option<&str>) -> ListTrainingJobsOutput {
        let mut page = ListTrainingJobsOutput::default();
        for name in names {
            page.training_job_summaries
                .get_or_insert_with(Vec::new)
                .push(
                    TrainingJobSummary::builder()
                        .training_job_name(*name)
                        .training_job_status(TrainingJobStatus::Completed)
                        .build(),
                );
        }
        page.next_token = next.map(str::to_owned);
        page
    }

    #[test]
    fn test_should_follow_next_token_to_last_page() {
        let request = ListTrainingJobsInput::builder()
            .max_results(2)
            .sort_by(SortBy::CreationTime)
            .sort_order(SortOrder::Descending)
            .build();
        request.validate().expect("valid list request");

        let mut seen_tokens = Vec::new();
        let pages = collect_pages(request, |page_request| {
            seen_tokens.push(page_request.next_token().map(str::to_owned));
            assert_eq!(page_request.max_results(), Some(2));
            Ok(match page_request.next_token() {
                None => training_page(&["job-a", "job-b"], Some("t1")),
                Some("t1") => training_page(&["job-c", "job-d"], Some("t2")),
                Some(_) => training_page(&["job-e"], None),
            })
        })
        .expect("all pages");

        assert_eq!(
            seen_tokens,
            [None, Some("t1".to_owned()), Some("t2".to_owned())]
        );
        let names: Vec<_> = pages
            .iter()
            .flat_map(|p| p.training_job_summaries.iter().flatten())
            .filter_map(|s| s.training_job_name.as_deref())
            .collect();
        assert_eq!(names, ["job-a", "job-b", "job-c", "job-d", "job-e"]);
    }

    #[test]
    fn test_should_stop_on_first_page_without_token() {
        let pages = collect_pages(ListExperimentsInput::default(), |_| {
            Ok(ListExperimentsOutput::builder()
                .experiment_summaries(ExperimentSummary::builder().experiment_name("churn").build())
                .build())
        })
        .expect("single page");
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn test_should_surface_runtime_failure() {
        let result = collect_pages(ListTrainingJobsInput::default(), |_| {
            Err(anyhow::anyhow!("throttled"))
        });
        assert_eq!(result.expect_err("runtime error").to_string(), "throttled");
    }

    #[test]
    fn test_should_bound_page_size_and_token() {
        let request = ListTrainingJobsInput::builder()
            .max_results(101)
            .next_token("x".repeat(8193))
            .build();
        let Err(ModelError::Validation(errors)) = request.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.paths().collect::<Vec<_>>(), ["NextToken", "MaxResults"]);
    }

    #[test]
    fn test_should_mark_only_list_operations_paginated() {
        let paginated: Vec<_> = SageMakerOperation::ALL
            .iter()
            .filter(|op| op.is_paginated())
            .map(SageMakerOperation::as_str)
            .collect();
        assert_eq!(paginated.len(), 9);
        assert!(paginated.iter().all(|name| name.starts_with("List")));
        assert!(paginated.contains(&"ListMonitoringExecutions"));
    }
}
