//! Consuming builder shared by every shape.

use std::fmt;

use crate::error::ModelError;

/// Accumulates a shape field by field; [`ShapeBuilder::build`] yields it.
///
/// The per-field setters are generated next to each shape, so
/// `TrainingJobSummary::builder()` exposes exactly the fields of
/// `TrainingJobSummary`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct ShapeBuilder<T> {
    pub(crate) inner: T,
}

impl<T> ShapeBuilder<T> {
    /// Starts from an existing value, keeping every field already set.
    pub fn from_shape(shape: T) -> Self {
        Self { inner: shape }
    }

    /// Finishes the builder.
    pub fn build(self) -> T {
        self.inner
    }
}

/// A map entry a builder refused, returned together with the builder.
///
/// The builder keeps every field set so far, including the first value of
/// the repeated key, so construction can carry on with [`Self::into_builder`].
#[derive(Debug)]
pub struct EntryRejected<B> {
    builder: B,
    error: ModelError,
}

impl<B> EntryRejected<B> {
    pub(crate) fn new(builder: B, error: ModelError) -> Self {
        Self { builder, error }
    }

    /// The reason the entry was refused.
    #[must_use]
    pub fn error(&self) -> &ModelError {
        &self.error
    }

    /// Recovers the builder, unchanged by the refused entry.
    #[must_use]
    pub fn into_builder(self) -> B {
        self.builder
    }

    /// Splits into the builder and the error.
    #[must_use]
    pub fn into_parts(self) -> (B, ModelError) {
        (self.builder, self.error)
    }
}

impl<B> fmt::Display for EntryRejected<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<B: fmt::Debug> std::error::Error for EntryRejected<B> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<B> From<EntryRejected<B>> for ModelError {
    fn from(rejected: EntryRejected<B>) -> Self {
        rejected.error
    }
}
