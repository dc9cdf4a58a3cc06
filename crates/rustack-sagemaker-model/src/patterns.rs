//! Regular-expression constraints attached to SageMaker string fields.
//!
//! Every pattern must match the whole value: the source is wrapped as
//! `^(?:...)$` before compiling, so patterns that already carry anchors are
//! unaffected. Compilation happens on first use and the result is cached for
//! the lifetime of the process.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// A lazily compiled, full-match regex constraint.
pub struct Pattern {
    source: &'static str,
    compiled: OnceLock<Result<Regex, regex::Error>>,
}

impl Pattern {
    /// Declares a pattern; nothing is compiled until the first match.
    #[must_use]
    pub const fn new(source: &'static str) -> Self {
        Self {
            source,
            compiled: OnceLock::new(),
        }
    }

    /// The pattern as documented for the field.
    #[must_use]
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Returns the compiled, anchored regex.
    pub fn regex(&self) -> Result<&Regex, regex::Error> {
        self.compiled
            .get_or_init(|| Regex::new(&format!("^(?:{})$", self.source)))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Whether `value` matches in full.
    pub fn is_match(&self, value: &str) -> Result<bool, regex::Error> {
        Ok(self.regex()?.is_match(value))
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

// -- Identifiers --

/// Names of jobs, notebook instances, schedules and endpoints.
pub static ENTITY_NAME: Pattern = Pattern::new(r"^[a-zA-Z0-9](-*[a-zA-Z0-9])*");
/// Experiment names and display names.
pub static EXPERIMENT_ENTITY_NAME: Pattern =
    Pattern::new(r"^[a-zA-Z0-9](-*[a-zA-Z0-9]){0,119}");
/// Flow definition names (lowercase only).
pub static FLOW_DEFINITION_NAME: Pattern = Pattern::new(r"^[a-z0-9](-*[a-z0-9])*");
/// Model package names.
pub static MODEL_PACKAGE_NAME: Pattern = Pattern::new(r"^[a-zA-Z0-9](-*[a-zA-Z0-9]){0,62}");
/// A resource name or the ARN of one (algorithms, model packages).
pub static NAME_OR_ARN: Pattern = Pattern::new(
    r"(arn:aws[a-z\-]*:sagemaker:[a-z0-9\-]*:[0-9]{12}:[a-z\-]*/)?([a-zA-Z0-9](-*[a-zA-Z0-9]){0,62})",
);
/// Substring filters on list requests.
pub static NAME_CONTAINS: Pattern = Pattern::new(r"[a-zA-Z0-9\-]+");
/// Training channel names.
pub static CHANNEL_NAME: Pattern = Pattern::new(r"[A-Za-z0-9\.\-_]+");
/// Container host names.
pub static CONTAINER_HOSTNAME: Pattern = Pattern::new(r"^[a-zA-Z0-9](-*[a-zA-Z0-9])*");
/// Client idempotency tokens.
pub static CLIENT_TOKEN: Pattern = Pattern::new(r"^[a-zA-Z0-9-]+$");

// -- ARNs --

/// IAM role ARN.
pub static ROLE_ARN: Pattern =
    Pattern::new(r"^arn:aws[a-z\-]*:iam::\d{12}:role/?[a-zA-Z_0-9+=,.@\-_/]+$");
/// Private or vendor workteam ARN.
pub static WORKTEAM_ARN: Pattern =
    Pattern::new(r"arn:aws[a-z\-]*:sagemaker:[a-z0-9\-]*:[0-9]{12}:workteam/.*");
/// Worker task template ARN.
pub static HUMAN_TASK_UI_ARN: Pattern =
    Pattern::new(r"arn:aws[a-z\-]*:sagemaker:[a-z0-9\-]*:[0-9]{12}:human-task-ui/.*");
/// Lambda function ARN, optionally qualified with a version or alias.
pub static LAMBDA_FUNCTION_ARN: Pattern = Pattern::new(
    r"arn:aws[a-z\-]*:lambda:[a-z]{2}-[a-z]+-\d{1}:\d{12}:function:[a-zA-Z0-9\-_.]+(:(\$LATEST|[a-zA-Z0-9\-_]+))?",
);
/// Any SageMaker resource ARN.
pub static SAGEMAKER_ARN: Pattern =
    Pattern::new(r"arn:aws[a-z\-]*:sagemaker:[a-z0-9\-]*:[0-9]{12}:[a-z\-]*/.*");

// -- Locations --

/// S3 object or prefix URI.
pub static S3_URI: Pattern = Pattern::new(r"^(https|s3)://([^/]+)/?(.*)$");
/// A git repository URL or the name of a registered code repository.
pub static CODE_REPOSITORY: Pattern =
    Pattern::new(r"^https://([^/]+)/?(.*)$|^[a-zA-Z0-9](-*[a-zA-Z0-9])*");
/// Container image reference.
pub static CONTAINER_IMAGE: Pattern = Pattern::new(r"[\S]+");
/// Image digest.
pub static IMAGE_DIGEST: Pattern = Pattern::new(r"^[Ss][Hh][Aa]256:[0-9a-fA-F]{64}$");
/// Container-local directory.
pub static DIRECTORY_PATH: Pattern = Pattern::new(r".*");

// -- Networking --

/// VPC subnet and security group identifiers.
pub static VPC_ID: Pattern = Pattern::new(r"[-0-9a-zA-Z]+");

// -- Free text --

/// Any single-line text.
pub static ANY_TEXT: Pattern = Pattern::new(r".*");
/// Any text, line breaks included.
pub static ANY_MULTILINE: Pattern = Pattern::new(r"[\S\s]*");
/// Resource tag keys.
pub static TAG_KEY: Pattern = Pattern::new(r"^([\p{L}\p{Z}\p{N}_.:/=+\-@]*)$");
/// Resource tag values.
pub static TAG_VALUE: Pattern = Pattern::new(r"^([\p{L}\p{Z}\p{N}_.:/=+\-@]*)$");
/// Environment variable names.
pub static ENVIRONMENT_KEY: Pattern = Pattern::new(r"[a-zA-Z_][a-zA-Z0-9_]*");
/// Task titles shown to human reviewers.
pub static TASK_TITLE: Pattern = Pattern::new(r"^[\t\n\r -\x{D7FF}\x{E000}-\x{FFFD}]*$");
/// Task keywords used by workers to find tasks.
pub static TASK_KEYWORD: Pattern = Pattern::new(r"^[A-Za-z0-9]+( [A-Za-z0-9]+)*$");
/// Model package descriptions.
pub static PACKAGE_DESCRIPTION: Pattern =
    Pattern::new(r"[\p{L}\p{M}\p{Z}\p{S}\p{N}\p{P}]*");
/// Cron or rate schedule expressions; constrained by length only.
pub static SCHEDULE_EXPRESSION: Pattern = Pattern::new(r".+");

#[cfg(test)]
pub(crate) fn all() -> Vec<&'static Pattern> {
    vec![
        &ENTITY_NAME,
        &EXPERIMENT_ENTITY_NAME,
        &FLOW_DEFINITION_NAME,
        &MODEL_PACKAGE_NAME,
        &NAME_OR_ARN,
        &NAME_CONTAINS,
        &CHANNEL_NAME,
        &CONTAINER_HOSTNAME,
        &CLIENT_TOKEN,
        &ROLE_ARN,
        &WORKTEAM_ARN,
        &HUMAN_TASK_UI_ARN,
        &SAGEMAKER_ARN,
        &S3_URI,
        &CODE_REPOSITORY,
        &CONTAINER_IMAGE,
        &IMAGE_DIGEST,
        &DIRECTORY_PATH,
        &VPC_ID,
        &ANY_TEXT,
        &ANY_MULTILINE,
        &TAG_KEY,
        &TAG_VALUE,
        &ENVIRONMENT_KEY,
        &TASK_TITLE,
        &TASK_KEYWORD,
        &PACKAGE_DESCRIPTION,
        &SCHEDULE_EXPRESSION,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_compile_every_pattern() {
        for pattern in all() {
            assert!(pattern.regex().is_ok(), "{pattern:?} failed to compile");
        }
    }

    #[test]
    fn test_should_require_full_match() {
        assert_eq!(ENTITY_NAME.is_match("my-job-1").ok(), Some(true));
        assert_eq!(ENTITY_NAME.is_match("my_job").ok(), Some(false));
        assert_eq!(ENTITY_NAME.is_match("-leading").ok(), Some(false));
        assert_eq!(VPC_ID.is_match("subnet-0abc").ok(), Some(true));
        assert_eq!(VPC_ID.is_match("subnet 0abc").ok(), Some(false));
    }

    #[test]
    fn test_should_match_role_arn() {
        let arn = "arn:aws:iam::123456789012:role/SageMakerRole";
        assert_eq!(ROLE_ARN.is_match(arn).ok(), Some(true));
        assert_eq!(
            ROLE_ARN.is_match("arn:aws:iam::1234:role/x").ok(),
            Some(false)
        );
    }

    #[test]
    fn test_should_accept_url_or_name_for_code_repository() {
        assert_eq!(
            CODE_REPOSITORY
                .is_match("https://github.com/org/repo.git")
                .ok(),
            Some(true)
        );
        assert_eq!(CODE_REPOSITORY.is_match("my-repo").ok(), Some(true));
        assert_eq!(CODE_REPOSITORY.is_match("git@github.com:x").ok(), Some(false));
    }

    #[test]
    fn test_should_reject_control_characters_in_task_title() {
        assert_eq!(TASK_TITLE.is_match("Review image\tlabels").ok(), Some(true));
        assert_eq!(TASK_TITLE.is_match("bad\u{1}title").ok(), Some(false));
    }

    #[test]
    fn test_should_report_compile_error_for_bad_source() {
        static BROKEN: Pattern = Pattern::new(r"(unclosed");
        assert!(BROKEN.is_match("x").is_err());
    }
}
