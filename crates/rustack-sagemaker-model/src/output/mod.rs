//! SageMaker response shapes, one per operation.
//!
//! Operations that return nothing still get an empty shape so that every
//! operation has a concrete output type.

mod experiment;
mod human;
mod monitoring;
mod notebook;
mod registry;
mod training;
mod transform;
mod tuning;

pub use experiment::*;
pub use human::*;
pub use monitoring::*;
pub use notebook::*;
pub use registry::*;
pub use training::*;
pub use transform::*;
pub use tuning::*;
