//! Client-side constraint checks for request shapes.
//!
//! Setters never validate. A caller that wants the service constraints
//! checked before sending calls [`Validate::validate`], which walks the whole
//! shape and reports every violation at once, each tagged with a path such
//! as `ResourceConfig.InstanceCount` or `Tags[2].Key`.
//!
//! ```
//! use rustack_sagemaker_model::input::StopTrainingJobInput;
//! use rustack_sagemaker_model::validate::Validate;
//!
//! let input = StopTrainingJobInput::default();
//! let err = input.validate().unwrap_err();
//! assert_eq!(err.to_string(), "1 constraint violation: TrainingJobName is required");
//! ```

use std::fmt;

use crate::entry_map::EntryMap;
use crate::error::ModelError;
use crate::patterns::Pattern;
use crate::types::ClosedEnum;

/// A shape whose field constraints can be checked.
pub trait Validate {
    /// Records every violation of `self` into `v`.
    fn check(&self, v: &mut Validator);

    /// Checks `self`, failing with [`ModelError::Validation`] if anything is wrong.
    fn validate(&self) -> Result<(), ModelError> {
        let mut v = Validator::new();
        self.check(&mut v);
        v.finish()
    }
}

/// What is wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// A required field is unset.
    Missing,
    /// String length in characters is out of bounds.
    Length {
        min: usize,
        max: Option<usize>,
        actual: usize,
    },
    /// The value does not match the field pattern.
    Pattern { pattern: &'static str },
    /// A number is out of range.
    Range {
        min: Option<i64>,
        max: Option<i64>,
        actual: i64,
    },
    /// An enumerated field holds a value outside its closed set.
    UnknownEnumValue {
        value: String,
        allowed: &'static [&'static str],
    },
    /// A list or map has too few or too many entries.
    ItemCount {
        min: usize,
        max: Option<usize>,
        actual: usize,
    },
    /// The field pattern itself failed to compile.
    BadPattern {
        pattern: &'static str,
        reason: String,
    },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("is required"),
            Self::Length { min, max, actual } => match max {
                Some(max) => write!(
                    f,
                    "must have length between {min} and {max}, got {actual}"
                ),
                None => write!(f, "must have length at least {min}, got {actual}"),
            },
            Self::Pattern { pattern } => write!(f, "must match pattern {pattern}"),
            Self::Range { min, max, actual } => match (min, max) {
                (Some(min), Some(max)) => {
                    write!(f, "must be between {min} and {max}, got {actual}")
                }
                (Some(min), None) => write!(f, "must be at least {min}, got {actual}"),
                (None, Some(max)) => write!(f, "must be at most {max}, got {actual}"),
                (None, None) => write!(f, "is out of range: {actual}"),
            },
            Self::UnknownEnumValue { value, allowed } => {
                write!(f, "has unknown value {value}; expected one of [{}]", allowed.join(", "))
            }
            Self::ItemCount { min, max, actual } => match max {
                Some(max) => write!(f, "must have between {min} and {max} items, got {actual}"),
                None => write!(f, "must have at least {min} items, got {actual}"),
            },
            Self::BadPattern { pattern, reason } => {
                write!(f, "cannot be checked, pattern {pattern} is invalid: {reason}")
            }
        }
    }
}

/// One constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path from the validated shape to the field.
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.kind)
    }
}

/// Every violation found in one shape.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// The paths of all violations, in discovery order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|v| v.path.as_str())
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.0.len() == 1 {
            "violation"
        } else {
            "violations"
        };
        write!(f, "{} constraint {noun}: ", self.0.len())?;
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// Collects violations while walking a shape.
#[derive(Debug, Default)]
pub struct Validator {
    path: Vec<String>,
    violations: Vec<Violation>,
}

impl Validator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Violations recorded so far.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// `Ok` when nothing was recorded.
    pub fn finish(self) -> Result<(), ModelError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ModelError::Validation(ValidationErrors(self.violations)))
        }
    }

    fn push(&mut self, field: &str, kind: ViolationKind) {
        let path = if self.path.is_empty() {
            field.to_owned()
        } else {
            format!("{}.{field}", self.path.join("."))
        };
        self.violations.push(Violation { path, kind });
    }

    fn check_length(&mut self, field: &str, value: &str, min: usize, max: Option<usize>) {
        let actual = value.chars().count();
        if actual < min || max.is_some_and(|max| actual > max) {
            self.push(field, ViolationKind::Length { min, max, actual });
        }
    }

    fn check_pattern(&mut self, field: &str, value: &str, pattern: &Pattern) {
        match pattern.is_match(value) {
            Ok(true) => {}
            Ok(false) => self.push(
                field,
                ViolationKind::Pattern {
                    pattern: pattern.source(),
                },
            ),
            Err(err) => self.push(
                field,
                ViolationKind::BadPattern {
                    pattern: pattern.source(),
                    reason: err.to_string(),
                },
            ),
        }
    }

    fn descend(&mut self, segment: String, value: &dyn Validate) {
        self.path.push(segment);
        value.check(self);
        self.path.pop();
    }

    /// Starts checks on a string field.
    pub fn string<'v, 'a>(&'v mut self, field: &'a str, value: Option<&'a str>) -> StringCheck<'v, 'a> {
        StringCheck {
            v: self,
            field,
            value,
        }
    }

    /// Starts checks on an integer field.
    pub fn int<'v, 'a, N: Into<i64>>(&'v mut self, field: &'a str, value: Option<N>) -> IntCheck<'v, 'a> {
        IntCheck {
            v: self,
            field,
            value: value.map(Into::into),
        }
    }

    /// Checks an enumerated field holds a known value.
    pub fn enumeration<'v, 'a, E: ClosedEnum>(
        &'v mut self,
        field: &'a str,
        value: Option<&E>,
    ) -> PresenceCheck<'v, 'a> {
        if let Some(value) = value {
            if !value.is_known() {
                self.push(
                    field,
                    ViolationKind::UnknownEnumValue {
                        value: value.as_str().to_owned(),
                        allowed: E::values(),
                    },
                );
            }
        }
        PresenceCheck {
            v: self,
            field,
            is_set: value.is_some(),
        }
    }

    /// Checks a nested shape, prefixing its violations with `field`.
    pub fn nested<'v, 'a, T: Validate>(&'v mut self, field: &'a str, value: Option<&T>) -> PresenceCheck<'v, 'a> {
        if let Some(value) = value {
            self.descend(field.to_owned(), value);
        }
        PresenceCheck {
            v: self,
            field,
            is_set: value.is_some(),
        }
    }

    /// Checks presence of a field that has no other constraint.
    pub fn present<'v, 'a, T>(&'v mut self, field: &'a str, value: Option<&T>) -> PresenceCheck<'v, 'a> {
        PresenceCheck {
            v: self,
            field,
            is_set: value.is_some(),
        }
    }

    /// Starts checks on a list field.
    pub fn list<'v, 'a, T>(&'v mut self, field: &'a str, value: Option<&'a [T]>) -> ListCheck<'v, 'a, T> {
        ListCheck {
            v: self,
            field,
            value,
        }
    }

    /// Starts checks on a map field.
    pub fn map<'v, 'a, V>(
        &'v mut self,
        field: &'a str,
        value: Option<&'a EntryMap<V>>,
    ) -> MapCheck<'v, 'a, V> {
        MapCheck {
            v: self,
            field,
            value,
        }
    }
}

/// Presence check for fields validated elsewhere.
#[derive(Debug)]
pub struct PresenceCheck<'v, 'a> {
    v: &'v mut Validator,
    field: &'a str,
    is_set: bool,
}

impl PresenceCheck<'_, '_> {
    pub fn required(self) {
        if !self.is_set {
            self.v.push(self.field, ViolationKind::Missing);
        }
    }
}

/// Chained checks on one string field.
#[derive(Debug)]
pub struct StringCheck<'v, 'a> {
    v: &'v mut Validator,
    field: &'a str,
    value: Option<&'a str>,
}

impl StringCheck<'_, '_> {
    pub fn required(self) -> Self {
        if self.value.is_none() {
            self.v.push(self.field, ViolationKind::Missing);
        }
        self
    }

    /// Length in characters must lie in `min..=max`.
    pub fn length(self, min: usize, max: usize) -> Self {
        if let Some(value) = self.value {
            self.v.check_length(self.field, value, min, Some(max));
        }
        self
    }

    pub fn min_length(self, min: usize) -> Self {
        if let Some(value) = self.value {
            self.v.check_length(self.field, value, min, None);
        }
        self
    }

    pub fn pattern(self, pattern: &Pattern) -> Self {
        if let Some(value) = self.value {
            self.v.check_pattern(self.field, value, pattern);
        }
        self
    }
}

/// Chained checks on one integer field.
#[derive(Debug)]
pub struct IntCheck<'v, 'a> {
    v: &'v mut Validator,
    field: &'a str,
    value: Option<i64>,
}

impl IntCheck<'_, '_> {
    pub fn required(self) -> Self {
        if self.value.is_none() {
            self.v.push(self.field, ViolationKind::Missing);
        }
        self
    }

    /// Value must lie in `min..=max`.
    pub fn range(self, min: i64, max: i64) -> Self {
        self.bounded(Some(min), Some(max))
    }

    pub fn min(self, min: i64) -> Self {
        self.bounded(Some(min), None)
    }

    fn bounded(self, min: Option<i64>, max: Option<i64>) -> Self {
        if let Some(actual) = self.value {
            let low = min.is_some_and(|min| actual < min);
            let high = max.is_some_and(|max| actual > max);
            if low || high {
                self.v.push(self.field, ViolationKind::Range { min, max, actual });
            }
        }
        self
    }
}

/// Chained checks on one list field.
#[derive(Debug)]
pub struct ListCheck<'v, 'a, T> {
    v: &'v mut Validator,
    field: &'a str,
    value: Option<&'a [T]>,
}

impl<T> ListCheck<'_, '_, T> {
    pub fn required(self) -> Self {
        if self.value.is_none() {
            self.v.push(self.field, ViolationKind::Missing);
        }
        self
    }

    /// Item count must lie in `min..=max`.
    pub fn length(self, min: usize, max: usize) -> Self {
        if let Some(items) = self.value {
            let actual = items.len();
            if actual < min || actual > max {
                self.v.push(
                    self.field,
                    ViolationKind::ItemCount {
                        min,
                        max: Some(max),
                        actual,
                    },
                );
            }
        }
        self
    }
}

impl<T: Validate> ListCheck<'_, '_, T> {
    /// Checks every item, prefixing violations with `Field[i]`.
    pub fn each(self) -> Self {
        if let Some(items) = self.value {
            for (i, item) in items.iter().enumerate() {
                self.v.descend(format!("{}[{i}]", self.field), item);
            }
        }
        self
    }
}

impl<E: ClosedEnum> ListCheck<'_, '_, E> {
    /// Every item must be a known enumeration value.
    pub fn known(self) -> Self {
        if let Some(items) = self.value {
            for (i, item) in items.iter().enumerate() {
                if !item.is_known() {
                    self.v.push(
                        &format!("{}[{i}]", self.field),
                        ViolationKind::UnknownEnumValue {
                            value: item.as_str().to_owned(),
                            allowed: E::values(),
                        },
                    );
                }
            }
        }
        self
    }
}

impl ListCheck<'_, '_, String> {
    /// Length of every item must lie in `min..=max`.
    pub fn item_length(self, min: usize, max: usize) -> Self {
        if let Some(items) = self.value {
            for (i, item) in items.iter().enumerate() {
                self.v
                    .check_length(&format!("{}[{i}]", self.field), item, min, Some(max));
            }
        }
        self
    }

    pub fn item_pattern(self, pattern: &Pattern) -> Self {
        if let Some(items) = self.value {
            for (i, item) in items.iter().enumerate() {
                self.v
                    .check_pattern(&format!("{}[{i}]", self.field), item, pattern);
            }
        }
        self
    }
}

/// Chained checks on one map field.
#[derive(Debug)]
pub struct MapCheck<'v, 'a, V> {
    v: &'v mut Validator,
    field: &'a str,
    value: Option<&'a EntryMap<V>>,
}

impl<V> MapCheck<'_, '_, V> {
    pub fn max_entries(self, max: usize) -> Self {
        if let Some(map) = self.value {
            let actual = map.len();
            if actual > max {
                self.v.push(
                    self.field,
                    ViolationKind::ItemCount {
                        min: 0,
                        max: Some(max),
                        actual,
                    },
                );
            }
        }
        self
    }

    pub fn key_length(self, min: usize, max: usize) -> Self {
        if let Some(map) = self.value {
            for (key, _) in map.iter() {
                self.v
                    .check_length(&format!("{}[{key}]", self.field), key, min, Some(max));
            }
        }
        self
    }

    pub fn key_pattern(self, pattern: &Pattern) -> Self {
        if let Some(map) = self.value {
            for (key, _) in map.iter() {
                self.v
                    .check_pattern(&format!("{}[{key}]", self.field), key, pattern);
            }
        }
        self
    }
}

impl MapCheck<'_, '_, String> {
    pub fn value_length(self, min: usize, max: usize) -> Self {
        if let Some(map) = self.value {
            for (key, value) in map.iter() {
                self.v
                    .check_length(&format!("{}[{key}]", self.field), value, min, Some(max));
            }
        }
        self
    }

    pub fn value_pattern(self, pattern: &Pattern) -> Self {
        if let Some(map) = self.value {
            for (key, value) in map.iter() {
                self.v
                    .check_pattern(&format!("{}[{key}]", self.field), value, pattern);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::ENTITY_NAME;
    use crate::types::SortOrder;

    struct Inner {
        count: Option<i32>,
    }

    impl Validate for Inner {
        fn check(&self, v: &mut Validator) {
            v.int("Count", self.count).required().range(1, 3);
        }
    }

    struct Outer {
        name: Option<String>,
        inner: Option<Inner>,
        items: Option<Vec<Inner>>,
        order: Option<SortOrder>,
        env: Option<EntryMap>,
    }

    impl Validate for Outer {
        fn check(&self, v: &mut Validator) {
            v.string("Name", self.name.as_deref())
                .required()
                .length(1, 8)
                .pattern(&ENTITY_NAME);
            v.nested("Inner", self.inner.as_ref()).required();
            v.list("Items", self.items.as_deref()).length(0, 2).each();
            v.enumeration("Order", self.order.as_ref());
            v.map("Env", self.env.as_ref())
                .max_entries(1)
                .value_length(0, 3);
        }
    }

    fn valid() -> Outer {
        Outer {
            name: Some("job-1".to_owned()),
            inner: Some(Inner { count: Some(2) }),
            items: None,
            order: Some(SortOrder::Ascending),
            env: None,
        }
    }

    fn paths(outer: &Outer) -> Vec<String> {
        let mut v = Validator::new();
        outer.check(&mut v);
        v.into_violations().into_iter().map(|v| v.path).collect()
    }

    #[test]
    fn test_should_accept_valid_shape() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_should_report_every_violation_with_paths() {
        let mut outer = valid();
        outer.name = Some("bad_name_too_long".to_owned());
        outer.inner = Some(Inner { count: Some(9) });
        outer.items = Some(vec![
            Inner { count: Some(1) },
            Inner { count: None },
            Inner { count: Some(0) },
        ]);
        assert_eq!(
            paths(&outer),
            vec![
                "Name",
                "Name",
                "Inner.Count",
                "Items",
                "Items[1].Count",
                "Items[2].Count"
            ]
        );
    }

    #[test]
    fn test_should_report_missing_required_fields() {
        let outer = Outer {
            name: None,
            inner: None,
            items: None,
            order: None,
            env: None,
        };
        let err = outer.validate().expect_err("missing fields");
        let ModelError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|v| v.kind == ViolationKind::Missing));
        assert_eq!(errors.paths().collect::<Vec<_>>(), vec!["Name", "Inner"]);
    }

    #[test]
    fn test_should_reject_unknown_enum_value() {
        let mut outer = valid();
        outer.order = Some(SortOrder::Unknown("Sideways".to_owned()));
        let mut v = Validator::new();
        outer.check(&mut v);
        assert_eq!(
            v.violations()[0].kind,
            ViolationKind::UnknownEnumValue {
                value: "Sideways".to_owned(),
                allowed: &["Ascending", "Descending"],
            }
        );
    }

    #[test]
    fn test_should_check_map_entries() {
        let mut outer = valid();
        outer.env = Some(
            EntryMap::try_from_entries([("A", "1"), ("B", "long")]).expect("distinct keys"),
        );
        assert_eq!(paths(&outer), vec!["Env", "Env[B]"]);
    }

    #[test]
    fn test_should_count_characters_not_bytes() {
        let mut outer = valid();
        outer.name = Some("ééééé".to_owned());
        let mut v = Validator::new();
        outer.check(&mut v);
        // Within length, but the pattern rejects non-ASCII.
        assert_eq!(v.violations().len(), 1);
        assert!(matches!(v.violations()[0].kind, ViolationKind::Pattern { .. }));
    }

    #[test]
    fn test_should_render_violation_messages() {
        let errors = ValidationErrors(vec![
            Violation {
                path: "ResourceConfig.InstanceCount".to_owned(),
                kind: ViolationKind::Range {
                    min: Some(1),
                    max: None,
                    actual: 0,
                },
            },
            Violation {
                path: "RoleArn".to_owned(),
                kind: ViolationKind::Missing,
            },
        ]);
        assert_eq!(
            errors.to_string(),
            "2 constraint violations: ResourceConfig.InstanceCount must be at least 1, got 0; \
             RoleArn is required"
        );
    }
}
