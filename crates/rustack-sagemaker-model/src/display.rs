//! Human-readable rendering of shapes.
//!
//! Only set fields are written, as `WireName: value`, comma-separated and
//! wrapped in braces. Lists render as `[a, b]`.

use std::fmt;

/// Writes the fields of one shape.
pub(crate) struct FieldWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    first: bool,
}

impl<'a, 'b> FieldWriter<'a, 'b> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self { f, first: true })
    }

    fn name(&mut self, name: &str) -> fmt::Result {
        if !self.first {
            self.f.write_str(", ")?;
        }
        self.first = false;
        write!(self.f, "{name}: ")
    }

    /// Writes a single value; skipped when unset.
    pub(crate) fn value<T: fmt::Display>(&mut self, name: &str, value: Option<&T>) -> fmt::Result {
        match value {
            Some(value) => {
                self.name(name)?;
                write!(self.f, "{value}")
            }
            None => Ok(()),
        }
    }

    /// Writes a list; skipped when unset, `[]` when set but empty.
    pub(crate) fn list<T: fmt::Display>(&mut self, name: &str, items: Option<&[T]>) -> fmt::Result {
        let Some(items) = items else {
            return Ok(());
        };
        self.name(name)?;
        self.f.write_str("[")?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.f.write_str(", ")?;
            }
            write!(self.f, "{item}")?;
        }
        self.f.write_str("]")
    }

    pub(crate) fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}
