//! Experiment tracking types.

use chrono::{DateTime, Utc};

use crate::patterns::{ANY_TEXT, SAGEMAKER_ARN};
use crate::validate::{Validate, Validator};

string_enum! {
    /// Sort key for experiment listings.
    pub enum SortExperimentsBy {
        Name => "Name",
        CreationTime => "CreationTime",
    }
}

shape! {
    /// The resource an experiment was created from.
    pub struct ExperimentSource {
        /// ARN of the source resource.
        source_arn("SourceArn"): opt String,
        /// Source type.
        source_type("SourceType"): opt String,
    }
}

impl Validate for ExperimentSource {
    fn check(&self, v: &mut Validator) {
        v.string("SourceArn", self.source_arn.as_deref())
            .required()
            .length(0, 256)
            .pattern(&SAGEMAKER_ARN);
        v.string("SourceType", self.source_type.as_deref())
            .length(0, 128)
            .pattern(&ANY_TEXT);
    }
}

shape! {
    /// Who created or last modified an experiment.
    pub struct UserContext {
        /// ARN of the user profile.
        user_profile_arn("UserProfileArn"): opt String,
        /// Name of the user profile.
        user_profile_name("UserProfileName"): opt String,
        /// Studio domain of the user.
        domain_id("DomainId"): opt String,
    }
}

shape! {
    /// Summary of an experiment in a listing.
    pub struct ExperimentSummary {
        /// Experiment ARN.
        experiment_arn("ExperimentArn"): opt String,
        /// Experiment name.
        experiment_name("ExperimentName"): opt String,
        /// Name shown in Studio.
        display_name("DisplayName"): opt String,
        /// Where the experiment came from.
        experiment_source("ExperimentSource"): opt ExperimentSource,
        /// When the experiment was created.
        creation_time("CreationTime"): opt DateTime<Utc>,
        /// When the experiment was last modified.
        last_modified_time("LastModifiedTime"): opt DateTime<Utc>,
    }
}
