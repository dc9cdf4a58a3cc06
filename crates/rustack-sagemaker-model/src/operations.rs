//! SageMaker operation enum and the traits tying inputs to operations.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::input;
use crate::output;
use crate::validate::Validate;

/// A request shape bound to its operation and response shape.
pub trait OperationInput: Validate + Serialize + Clone + fmt::Display {
    /// The operation this input is sent to.
    const OPERATION: SageMakerOperation;

    /// The response shape of the operation.
    type Output: DeserializeOwned + Serialize + Default + fmt::Debug;

    /// The idempotency token slot, for operations that carry one.
    fn idempotency_token_mut(&mut self) -> Option<&mut Option<String>> {
        None
    }
}

/// A `List*` request that pages with `NextToken`.
pub trait PaginatedInput: OperationInput {
    /// The continuation token of the page to fetch.
    fn next_token(&self) -> Option<&str>;

    /// Points the request at another page.
    fn set_next_token(&mut self, token: Option<String>);

    /// The requested page size.
    fn max_results(&self) -> Option<i32>;
}

/// A `List*` response that may have further pages.
pub trait PaginatedOutput {
    /// The token of the next page, `None` on the last page.
    fn next_token(&self) -> Option<&str>;
}

macro_rules! operations {
    (
        $(
            $(#[doc = $doc:literal])*
            $name:ident => $input:ident, $output:ident $(, token = $token:ident)?;
        )+
    ) => {
        /// All supported SageMaker operations.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum SageMakerOperation {
            $(
                $(#[doc = $doc])*
                $name,
            )+
        }

        impl SageMakerOperation {
            /// Every operation, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$name),+];

            /// Returns the AWS operation name string.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)+
                }
            }

            /// Returns the `X-Amz-Target` header value, `SageMaker.<Operation>`.
            #[must_use]
            pub fn target(&self) -> &'static str {
                match self {
                    $(Self::$name => concat!("SageMaker.", stringify!($name)),)+
                }
            }
        }

        $(
            impl OperationInput for input::$input {
                const OPERATION: SageMakerOperation = SageMakerOperation::$name;
                type Output = output::$output;

                $(
                    fn idempotency_token_mut(&mut self) -> Option<&mut Option<String>> {
                        Some(&mut self.$token)
                    }
                )?
            }
        )+
    };
}

operations! {
    // Training
    /// Start a training job.
    CreateTrainingJob => CreateTrainingJobInput, CreateTrainingJobOutput;
    /// Describe a training job.
    DescribeTrainingJob => DescribeTrainingJobInput, DescribeTrainingJobOutput;
    /// List training jobs.
    ListTrainingJobs => ListTrainingJobsInput, ListTrainingJobsOutput;
    /// Stop a training job.
    StopTrainingJob => StopTrainingJobInput, StopTrainingJobOutput;

    // Batch transform
    /// Start a batch transform job.
    CreateTransformJob => CreateTransformJobInput, CreateTransformJobOutput;
    /// Describe a batch transform job.
    DescribeTransformJob => DescribeTransformJobInput, DescribeTransformJobOutput;
    /// List batch transform jobs.
    ListTransformJobs => ListTransformJobsInput, ListTransformJobsOutput;
    /// Stop a batch transform job.
    StopTransformJob => StopTransformJobInput, StopTransformJobOutput;

    // Hyperparameter tuning
    /// Start a hyperparameter tuning job.
    CreateHyperParameterTuningJob => CreateHyperParameterTuningJobInput, CreateHyperParameterTuningJobOutput;
    /// Describe a hyperparameter tuning job.
    DescribeHyperParameterTuningJob => DescribeHyperParameterTuningJobInput, DescribeHyperParameterTuningJobOutput;
    /// List hyperparameter tuning jobs.
    ListHyperParameterTuningJobs => ListHyperParameterTuningJobsInput, ListHyperParameterTuningJobsOutput;
    /// Stop a hyperparameter tuning job.
    StopHyperParameterTuningJob => StopHyperParameterTuningJobInput, StopHyperParameterTuningJobOutput;

    // Notebook instances
    /// Create a notebook instance.
    CreateNotebookInstance => CreateNotebookInstanceInput, CreateNotebookInstanceOutput;
    /// Describe a notebook instance.
    DescribeNotebookInstance => DescribeNotebookInstanceInput, DescribeNotebookInstanceOutput;
    /// Change the settings of a stopped notebook instance.
    UpdateNotebookInstance => UpdateNotebookInstanceInput, UpdateNotebookInstanceOutput;
    /// List notebook instances.
    ListNotebookInstances => ListNotebookInstancesInput, ListNotebookInstancesOutput;
    /// Start a stopped notebook instance.
    StartNotebookInstance => StartNotebookInstanceInput, StartNotebookInstanceOutput;
    /// Stop a running notebook instance.
    StopNotebookInstance => StopNotebookInstanceInput, StopNotebookInstanceOutput;
    /// Delete a stopped notebook instance.
    DeleteNotebookInstance => DeleteNotebookInstanceInput, DeleteNotebookInstanceOutput;

    // Model registry
    /// Register a model package.
    CreateModelPackage => CreateModelPackageInput, CreateModelPackageOutput, token = client_token;
    /// Describe a model package.
    DescribeModelPackage => DescribeModelPackageInput, DescribeModelPackageOutput;
    /// List model packages.
    ListModelPackages => ListModelPackagesInput, ListModelPackagesOutput;
    /// Change the approval status of a model package.
    UpdateModelPackage => UpdateModelPackageInput, UpdateModelPackageOutput;
    /// Delete a model package.
    DeleteModelPackage => DeleteModelPackageInput, DeleteModelPackageOutput;

    // Model monitoring
    /// Create a monitoring schedule.
    CreateMonitoringSchedule => CreateMonitoringScheduleInput, CreateMonitoringScheduleOutput;
    /// Describe a monitoring schedule.
    DescribeMonitoringSchedule => DescribeMonitoringScheduleInput, DescribeMonitoringScheduleOutput;
    /// List monitoring schedules.
    ListMonitoringSchedules => ListMonitoringSchedulesInput, ListMonitoringSchedulesOutput;
    /// List the executions of monitoring schedules.
    ListMonitoringExecutions => ListMonitoringExecutionsInput, ListMonitoringExecutionsOutput;
    /// Resume a stopped monitoring schedule.
    StartMonitoringSchedule => StartMonitoringScheduleInput, StartMonitoringScheduleOutput;
    /// Pause a monitoring schedule.
    StopMonitoringSchedule => StopMonitoringScheduleInput, StopMonitoringScheduleOutput;
    /// Delete a monitoring schedule.
    DeleteMonitoringSchedule => DeleteMonitoringScheduleInput, DeleteMonitoringScheduleOutput;

    // Experiments
    /// Create an experiment.
    CreateExperiment => CreateExperimentInput, CreateExperimentOutput;
    /// Describe an experiment.
    DescribeExperiment => DescribeExperimentInput, DescribeExperimentOutput;
    /// List experiments.
    ListExperiments => ListExperimentsInput, ListExperimentsOutput;
    /// Change the display name or description of an experiment.
    UpdateExperiment => UpdateExperimentInput, UpdateExperimentOutput;
    /// Delete an experiment.
    DeleteExperiment => DeleteExperimentInput, DeleteExperimentOutput;

    // Human review
    /// Create a flow definition.
    CreateFlowDefinition => CreateFlowDefinitionInput, CreateFlowDefinitionOutput;
    /// Describe a flow definition.
    DescribeFlowDefinition => DescribeFlowDefinitionInput, DescribeFlowDefinitionOutput;
    /// List flow definitions.
    ListFlowDefinitions => ListFlowDefinitionsInput, ListFlowDefinitionsOutput;
    /// Delete a flow definition.
    DeleteFlowDefinition => DeleteFlowDefinitionInput, DeleteFlowDefinitionOutput;
}

impl SageMakerOperation {
    /// Parse an operation name string into a `SageMakerOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }

    /// Parse an `X-Amz-Target` header value.
    #[must_use]
    pub fn from_target(target: &str) -> Option<Self> {
        target.strip_prefix("SageMaker.").and_then(Self::from_name)
    }

    /// Whether the operation pages its results with `NextToken`.
    #[must_use]
    pub fn is_paginated(&self) -> bool {
        self.as_str().starts_with("List")
    }
}

impl fmt::Display for SageMakerOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! paginated {
    ($($input:ident => $output:ident),+ $(,)?) => {
        $(
            impl PaginatedInput for input::$input {
                fn next_token(&self) -> Option<&str> {
                    self.next_token.as_deref()
                }

                fn set_next_token(&mut self, token: Option<String>) {
                    self.next_token = token;
                }

                fn max_results(&self) -> Option<i32> {
                    self.max_results
                }
            }

            impl PaginatedOutput for output::$output {
                fn next_token(&self) -> Option<&str> {
                    self.next_token.as_deref()
                }
            }
        )+
    };
}

paginated! {
    ListTrainingJobsInput => ListTrainingJobsOutput,
    ListTransformJobsInput => ListTransformJobsOutput,
    ListHyperParameterTuningJobsInput => ListHyperParameterTuningJobsOutput,
    ListNotebookInstancesInput => ListNotebookInstancesOutput,
    ListModelPackagesInput => ListModelPackagesOutput,
    ListMonitoringSchedulesInput => ListMonitoringSchedulesOutput,
    ListMonitoringExecutionsInput => ListMonitoringExecutionsOutput,
    ListExperimentsInput => ListExperimentsOutput,
    ListFlowDefinitionsInput => ListFlowDefinitionsOutput,
}
