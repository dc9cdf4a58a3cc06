//! SageMaker client configuration and request preflight for Rustack.
//!
//! The model crate defines the shapes; this crate decides what happens to a
//! request before it leaves the process: idempotency tokens are filled in and
//! constraint violations are ignored, logged or rejected according to
//! [`SageMakerConfig`].

pub mod config;
pub mod error;
pub mod preflight;

pub use config::{SageMakerConfig, ValidationMode};
pub use error::PreflightError;
pub use preflight::{PreparedRequest, Preflight};
