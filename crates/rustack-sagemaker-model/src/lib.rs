//! SageMaker control-plane model types for Rustack.
//!
//! This crate provides the request, response and nested configuration shapes
//! of the SageMaker control plane: training, batch transform, tuning,
//! notebooks, the model registry, monitoring, experiments and human review.
//! SageMaker speaks `awsJson1_1`, so every shape is a serde struct with
//! PascalCase wire names whose fields are all optional.
//!
//! Shapes are plain values: structural `Eq`/`Hash`, a `Display` that lists
//! only the fields that are set, and a builder per shape. Service constraints
//! are checked only on request through [`validate::Validate`].
// "SageMaker" appears in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

#[macro_use]
mod macros;

pub mod arn;
pub mod builder;
pub(crate) mod display;
pub mod entry_map;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod patterns;
pub mod types;
pub mod validate;

pub use arn::SageMakerArn;
pub use builder::{EntryRejected, ShapeBuilder};
pub use entry_map::EntryMap;
pub use error::{ModelError, SageMakerError, SageMakerErrorCode};
pub use operations::{OperationInput, PaginatedInput, PaginatedOutput, SageMakerOperation};
pub use validate::{Validate, ValidationErrors, Violation, ViolationKind};
