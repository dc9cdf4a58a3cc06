//! SageMaker resource ARNs.
//!
//! SageMaker ARNs have the form
//! `arn:<partition>:sagemaker:<region>:<account>:<resource-type>/<name>`.
//! The name may itself contain `/`, as in versioned model packages
//! (`model-package/my-group/3`).

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

string_enum! {
    /// Resource type segment of a SageMaker ARN.
    pub enum SageMakerResourceType {
        TrainingJob => "training-job",
        TransformJob => "transform-job",
        HyperParameterTuningJob => "hyper-parameter-tuning-job",
        ProcessingJob => "processing-job",
        NotebookInstance => "notebook-instance",
        NotebookInstanceLifecycleConfig => "notebook-instance-lifecycle-config",
        CodeRepository => "code-repository",
        Algorithm => "algorithm",
        Model => "model",
        ModelPackage => "model-package",
        ModelPackageGroup => "model-package-group",
        Endpoint => "endpoint",
        MonitoringSchedule => "monitoring-schedule",
        Experiment => "experiment",
        ExperimentTrial => "experiment-trial",
        ExperimentTrialComponent => "experiment-trial-component",
        FlowDefinition => "flow-definition",
        HumanTaskUi => "human-task-ui",
        Workteam => "workteam",
    }
}

const SERVICE: &str = "sagemaker";

/// A parsed SageMaker ARN.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SageMakerArn {
    /// Partition, usually `aws`.
    pub partition: String,
    /// Region code.
    pub region: String,
    /// Twelve-digit account ID.
    pub account_id: String,
    /// Resource type; unrecognised types are kept as [`SageMakerResourceType::Unknown`].
    pub resource_type: SageMakerResourceType,
    /// Resource name, possibly containing `/`.
    pub resource_name: String,
}

impl SageMakerArn {
    /// Builds an ARN in the `aws` partition.
    #[must_use]
    pub fn new(
        region: impl Into<String>,
        account_id: impl Into<String>,
        resource_type: SageMakerResourceType,
        resource_name: impl Into<String>,
    ) -> Self {
        Self {
            partition: "aws".to_owned(),
            region: region.into(),
            account_id: account_id.into(),
            resource_type,
            resource_name: resource_name.into(),
        }
    }
}

impl FromStr for SageMakerArn {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| ModelError::InvalidArn {
            arn: s.to_owned(),
            reason,
        };

        let mut parts = s.splitn(6, ':');
        if parts.next() != Some("arn") {
            return Err(invalid("missing arn prefix"));
        }
        let (Some(partition), Some(service), Some(region), Some(account_id), Some(resource)) = (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) else {
            return Err(invalid("expected six colon-separated segments"));
        };

        if partition.is_empty() {
            return Err(invalid("empty partition"));
        }
        if service != SERVICE {
            return Err(invalid("not a sagemaker ARN"));
        }
        if region.is_empty() {
            return Err(invalid("empty region"));
        }
        if account_id.len() != 12 || !account_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("account ID must be 12 digits"));
        }
        let Some((resource_type, resource_name)) = resource.split_once('/') else {
            return Err(invalid("resource must be <type>/<name>"));
        };
        if resource_type.is_empty() || resource_name.is_empty() {
            return Err(invalid("resource must be <type>/<name>"));
        }

        let resource_type = resource_type
            .parse()
            .unwrap_or_else(|_| SageMakerResourceType::Unknown(resource_type.to_owned()));

        Ok(Self {
            partition: partition.to_owned(),
            region: region.to_owned(),
            account_id: account_id.to_owned(),
            resource_type,
            resource_name: resource_name.to_owned(),
        })
    }
}

impl fmt::Display for SageMakerArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:{SERVICE}:{}:{}:{}/{}",
            self.partition, self.region, self.account_id, self.resource_type, self.resource_name
        )
    }
}
