//! Declarative macros that expand the SageMaker shape definitions.
//!
//! SageMaker uses the awsJson1_1 protocol, so every shape is a plain serde
//! struct whose fields are all optional. The macros keep the per-shape
//! boilerplate (wire names, builder, `Display`) out of the type modules.

/// Declare a closed string enumeration.
///
/// The generated enum carries an `Unknown(String)` variant so that values
/// added server-side after this crate was built still deserialize. Parsing
/// with [`str::parse`] stays strict.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value outside the closed set, as received from the wire.
            Unknown(String),
        }

        impl $name {
            /// Every known wire value, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            /// Returns the wire-format string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            /// Returns the closed set of wire values.
            #[must_use]
            pub fn values() -> &'static [&'static str] {
                Self::VALUES
            }

            /// Returns `false` for [`Self::Unknown`].
            #[must_use]
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl $crate::types::ClosedEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn values() -> &'static [&'static str] {
                Self::VALUES
            }

            fn as_str(&self) -> &str {
                $name::as_str(self)
            }

            fn is_known(&self) -> bool {
                $name::is_known(self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err($crate::error::ModelError::UnknownEnumValue {
                        enum_name: stringify!($name),
                        value: s.to_owned(),
                    }),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <String as serde::Deserialize>::deserialize(deserializer)?;
                match value.parse::<Self>() {
                    Ok(known) => Ok(known),
                    Err(_) => Ok(Self::Unknown(value)),
                }
            }
        }
    };
}

/// Storage type of a shape field, by kind.
macro_rules! shape_field {
    (opt $ty:ty) => { Option<$ty> };
    (list $ty:ty) => { Option<Vec<$ty>> };
    (map $ty:ty) => { Option<$crate::entry_map::EntryMap<$ty>> };
}

/// Builder method of a shape field, by kind.
macro_rules! shape_setter {
    ($(#[doc = $doc:literal])* ; $field:ident opt $ty:ty) => {
        $(#[doc = $doc])*
        pub fn $field(mut self, value: impl Into<$ty>) -> Self {
            self.inner.$field = Some(value.into());
            self
        }
    };
    ($(#[doc = $doc:literal])* ; $field:ident list $ty:ty) => {
        $(#[doc = $doc])*
        ///
        /// Appends one item; the list is created on first use.
        pub fn $field(mut self, item: impl Into<$ty>) -> Self {
            self.inner.$field.get_or_insert_with(Vec::new).push(item.into());
            self
        }
    };
    ($(#[doc = $doc:literal])* ; $field:ident map $ty:ty) => {
        $(#[doc = $doc])*
        ///
        /// Adds one entry. A repeated key is refused; the builder comes back
        /// inside the error with the first value still in place.
        pub fn $field(
            mut self,
            key: impl Into<String>,
            value: impl Into<$ty>,
        ) -> Result<Self, $crate::builder::EntryRejected<Self>> {
            let added = self
                .inner
                .$field
                .get_or_insert_with($crate::entry_map::EntryMap::new)
                .add_entry(key, value)
                .map(|_| ());
            match added {
                Ok(()) => Ok(self),
                Err(error) => Err($crate::builder::EntryRejected::new(self, error)),
            }
        }
    };
}

/// `Display` rendering of a shape field, by kind.
macro_rules! shape_display {
    ($out:ident, $wire:literal, opt, $value:expr) => {
        $out.value($wire, $value.as_ref())?
    };
    ($out:ident, $wire:literal, list, $value:expr) => {
        $out.list($wire, $value.as_deref())?
    };
    ($out:ident, $wire:literal, map, $value:expr) => {
        $out.value($wire, $value.as_ref())?
    };
}

/// Declare a SageMaker shape.
///
/// Each field is written as `name("WireName"): kind Type` where `kind` is
/// `opt` (a single value), `list` (an ordered sequence of `Type`) or `map`
/// (an [`EntryMap`](crate::entry_map::EntryMap) of `Type` values). Every
/// field is stored as an `Option`, serialized under its wire name and
/// omitted while unset.
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $field:ident($wire:literal): $kind:ident $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                $(#[doc = $doc])*
                #[serde(rename = $wire, skip_serializing_if = "Option::is_none")]
                pub $field: shape_field!($kind $ty),
            )*
        }

        impl $name {
            /// Returns an empty builder for this shape.
            pub fn builder() -> $crate::builder::ShapeBuilder<Self> {
                $crate::builder::ShapeBuilder::default()
            }
        }

        impl $crate::builder::ShapeBuilder<$name> {
            $(
                shape_setter!($(#[doc = $doc])* ; $field $kind $ty);
            )*
        }

        impl std::fmt::Display for $name {
            #[allow(unused_mut)]
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut out = $crate::display::FieldWriter::new(f)?;
                $(
                    shape_display!(out, $wire, $kind, self.$field);
                )*
                out.finish()
            }
        }
    };
}
