//! Constraint traits.

use std::fmt;

/// An annotation restricting the valid values of a shape or member.
///
/// Every variant here requires validation once the data it guards has been
/// fully assembled; traits that do not restrict values (documentation,
/// sensitivity, ...) are not modelled.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstraintTrait {
    /// `@required`: the member must be present.
    Required,
    /// `@length`: bounds on string length, blob size or collection size.
    Length { min: Option<u64>, max: Option<u64> },
    /// `@pattern`: the string must match the regular expression.
    Pattern(String),
    /// `@range`: bounds on a numeric value.
    Range { min: Option<f64>, max: Option<f64> },
    /// `@enum`: the string must be one of the listed values.
    Enum(Vec<String>),
    /// The integer must be one of the `@enumValue`s of an intEnum.
    IntEnum(Vec<i32>),
    /// `@uniqueItems`: list items must be distinct.
    UniqueItems,
}

impl ConstraintTrait {
    /// The Smithy trait id this constraint is read from.
    pub const fn trait_id(&self) -> &'static str {
        match self {
            Self::Required => "smithy.api#required",
            Self::Length { .. } => "smithy.api#length",
            Self::Pattern(_) => "smithy.api#pattern",
            Self::Range { .. } => "smithy.api#range",
            Self::Enum(_) => "smithy.api#enum",
            Self::IntEnum(_) => "smithy.api#enumValue",
            Self::UniqueItems => "smithy.api#uniqueItems",
        }
    }
}

impl fmt::Display for ConstraintTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("@required"),
            Self::Length { min, max } => write!(f, "@length(min: {min:?}, max: {max:?})"),
            Self::Pattern(pattern) => write!(f, "@pattern({pattern:?})"),
            Self::Range { min, max } => write!(f, "@range(min: {min:?}, max: {max:?})"),
            Self::Enum(values) => write!(f, "@enum({} values)", values.len()),
            Self::IntEnum(values) => write!(f, "@intEnum({} values)", values.len()),
            Self::UniqueItems => f.write_str("@uniqueItems"),
        }
    }
}
