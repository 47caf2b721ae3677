//! Shapes and members.

use crate::shape_id::ShapeId;
use crate::traits::ConstraintTrait;
use smallvec::SmallVec;
use std::fmt;

/// Simple (memberless) shape types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Blob,
    Boolean,
    String,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    Timestamp,
    Document,
    BigInteger,
    BigDecimal,
}

impl PrimitiveKind {
    /// All primitive kinds, in prelude order.
    pub const ALL: [PrimitiveKind; 13] = [
        Self::Blob,
        Self::Boolean,
        Self::String,
        Self::Byte,
        Self::Short,
        Self::Integer,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Timestamp,
        Self::Document,
        Self::BigInteger,
        Self::BigDecimal,
    ];

    /// Name of the prelude shape for this kind (`smithy.api#<name>`).
    pub const fn prelude_name(self) -> &'static str {
        match self {
            Self::Blob => "Blob",
            Self::Boolean => "Boolean",
            Self::String => "String",
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Timestamp => "Timestamp",
            Self::Document => "Document",
            Self::BigInteger => "BigInteger",
            Self::BigDecimal => "BigDecimal",
        }
    }

    /// Parse the JSON AST `type` of a simple shape.
    pub fn from_ast_type(ty: &str) -> Option<Self> {
        Some(match ty {
            "blob" => Self::Blob,
            "boolean" => Self::Boolean,
            "string" => Self::String,
            "byte" => Self::Byte,
            "short" => Self::Short,
            "integer" => Self::Integer,
            "long" => Self::Long,
            "float" => Self::Float,
            "double" => Self::Double,
            "timestamp" => Self::Timestamp,
            "document" => Self::Document,
            "bigInteger" => Self::BigInteger,
            "bigDecimal" => Self::BigDecimal,
            _ => return None,
        })
    }
}

/// A named edge from a shape to its target, with the constraints attached to
/// the edge itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    pub name: String,
    pub target: ShapeId,
    pub constraints: Vec<ConstraintTrait>,
}

impl Member {
    pub fn new(name: impl Into<String>, target: ShapeId) -> Self {
        Self {
            name: name.into(),
            target,
            constraints: Vec::new(),
        }
    }

    /// Builder: attach a constraint trait.
    pub fn with_constraint(mut self, constraint: ConstraintTrait) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Builder: mark the member `@required`.
    pub fn required(self) -> Self {
        self.with_constraint(ConstraintTrait::Required)
    }
}

/// Shape kinds and their kind-specific data.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeKind {
    Structure { members: Vec<Member> },
    Union { members: Vec<Member> },
    List { member: Member },
    Set { member: Member },
    Map { key: Member, value: Member },
    Enum { variants: Vec<String> },
    /// Integer enum: variant names with their `@enumValue`.
    IntEnum { variants: Vec<(String, i32)> },
    Primitive(PrimitiveKind),
    Operation {
        input: Option<ShapeId>,
        output: Option<ShapeId>,
        errors: Vec<ShapeId>,
    },
    Resource {
        identifiers: Vec<ShapeId>,
        /// Lifecycle operations followed by `operations` and
        /// `collectionOperations`, in that order.
        operations: Vec<ShapeId>,
        resources: Vec<ShapeId>,
    },
    Service {
        operations: Vec<ShapeId>,
        resources: Vec<ShapeId>,
    },
}

/// Fieldless mirror of [`ShapeKind`], used in diagnostics and errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Structure,
    Union,
    List,
    Set,
    Map,
    Enum,
    IntEnum,
    Primitive(PrimitiveKind),
    Operation,
    Resource,
    Service,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structure => f.write_str("structure"),
            Self::Union => f.write_str("union"),
            Self::List => f.write_str("list"),
            Self::Set => f.write_str("set"),
            Self::Map => f.write_str("map"),
            Self::Enum => f.write_str("enum"),
            Self::IntEnum => f.write_str("intEnum"),
            Self::Primitive(PrimitiveKind::BigInteger) => f.write_str("bigInteger"),
            Self::Primitive(PrimitiveKind::BigDecimal) => f.write_str("bigDecimal"),
            Self::Primitive(kind) => write!(f, "{}", kind.prelude_name().to_lowercase()),
            Self::Operation => f.write_str("operation"),
            Self::Resource => f.write_str("resource"),
            Self::Service => f.write_str("service"),
        }
    }
}

/// A node in the model graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    /// Constraint traits applied to the shape itself (not to its members).
    pub constraints: Vec<ConstraintTrait>,
}

impl Shape {
    pub fn new(id: ShapeId, kind: ShapeKind) -> Self {
        Self {
            id,
            kind,
            constraints: Vec::new(),
        }
    }

    pub fn structure(id: ShapeId, members: Vec<Member>) -> Self {
        Self::new(id, ShapeKind::Structure { members })
    }

    pub fn union(id: ShapeId, members: Vec<Member>) -> Self {
        Self::new(id, ShapeKind::Union { members })
    }

    pub fn list(id: ShapeId, member: ShapeId) -> Self {
        Self::new(
            id,
            ShapeKind::List {
                member: Member::new("member", member),
            },
        )
    }

    pub fn set(id: ShapeId, member: ShapeId) -> Self {
        Self::new(
            id,
            ShapeKind::Set {
                member: Member::new("member", member),
            },
        )
    }

    pub fn map(id: ShapeId, key: ShapeId, value: ShapeId) -> Self {
        Self::new(
            id,
            ShapeKind::Map {
                key: Member::new("key", key),
                value: Member::new("value", value),
            },
        )
    }

    /// An enum shape. Its allowed values are also recorded as an `@enum`
    /// constraint on the shape, since an enum restricts valid values.
    pub fn enumeration(id: ShapeId, variants: Vec<String>) -> Self {
        let constraint = ConstraintTrait::Enum(variants.clone());
        Self::new(id, ShapeKind::Enum { variants }).with_constraint(constraint)
    }

    /// An intEnum shape, recording its values as an `@enumValue` constraint.
    pub fn int_enumeration(id: ShapeId, variants: Vec<(String, i32)>) -> Self {
        let constraint = ConstraintTrait::IntEnum(variants.iter().map(|(_, v)| *v).collect());
        Self::new(id, ShapeKind::IntEnum { variants }).with_constraint(constraint)
    }

    pub fn primitive(id: ShapeId, kind: PrimitiveKind) -> Self {
        Self::new(id, ShapeKind::Primitive(kind))
    }

    pub fn operation(id: ShapeId, input: Option<ShapeId>, output: Option<ShapeId>) -> Self {
        Self::new(
            id,
            ShapeKind::Operation {
                input,
                output,
                errors: Vec::new(),
            },
        )
    }

    pub fn resource(id: ShapeId, operations: Vec<ShapeId>, resources: Vec<ShapeId>) -> Self {
        Self::new(
            id,
            ShapeKind::Resource {
                identifiers: Vec::new(),
                operations,
                resources,
            },
        )
    }

    pub fn service(id: ShapeId, operations: Vec<ShapeId>) -> Self {
        Self::new(
            id,
            ShapeKind::Service {
                operations,
                resources: Vec::new(),
            },
        )
    }

    /// Builder: bind resources to a service or nest them in a resource.
    /// Ignored on every other kind.
    pub fn with_resources(mut self, bound: Vec<ShapeId>) -> Self {
        if let ShapeKind::Service { resources, .. } | ShapeKind::Resource { resources, .. } =
            &mut self.kind
        {
            resources.extend(bound);
        }
        self
    }

    /// Builder: attach a constraint trait to the shape itself.
    pub fn with_constraint(mut self, constraint: ConstraintTrait) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn shape_type(&self) -> ShapeType {
        match &self.kind {
            ShapeKind::Structure { .. } => ShapeType::Structure,
            ShapeKind::Union { .. } => ShapeType::Union,
            ShapeKind::List { .. } => ShapeType::List,
            ShapeKind::Set { .. } => ShapeType::Set,
            ShapeKind::Map { .. } => ShapeType::Map,
            ShapeKind::Enum { .. } => ShapeType::Enum,
            ShapeKind::IntEnum { .. } => ShapeType::IntEnum,
            ShapeKind::Primitive(kind) => ShapeType::Primitive(*kind),
            ShapeKind::Operation { .. } => ShapeType::Operation,
            ShapeKind::Resource { .. } => ShapeType::Resource,
            ShapeKind::Service { .. } => ShapeType::Service,
        }
    }

    /// Data shapes describe values; operations, resources and services do not.
    pub fn is_data_shape(&self) -> bool {
        !matches!(
            self.kind,
            ShapeKind::Operation { .. } | ShapeKind::Resource { .. } | ShapeKind::Service { .. }
        )
    }

    /// List, set and map shapes.
    pub fn is_collection(&self) -> bool {
        matches!(
            self.kind,
            ShapeKind::List { .. } | ShapeKind::Set { .. } | ShapeKind::Map { .. }
        )
    }

    /// Members in declaration order (`key` before `value` for maps).
    pub fn members(&self) -> SmallVec<[&Member; 4]> {
        match &self.kind {
            ShapeKind::Structure { members } | ShapeKind::Union { members } => {
                members.iter().collect()
            }
            ShapeKind::List { member } | ShapeKind::Set { member } => smallvec::smallvec![member],
            ShapeKind::Map { key, value } => smallvec::smallvec![key, value],
            ShapeKind::Enum { .. }
            | ShapeKind::IntEnum { .. }
            | ShapeKind::Primitive(_)
            | ShapeKind::Operation { .. }
            | ShapeKind::Resource { .. }
            | ShapeKind::Service { .. } => SmallVec::new(),
        }
    }

    /// Look up a member by name.
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members().into_iter().find(|m| m.name == name)
    }

    /// Targets of the data edges leaving this shape: one per member.
    pub fn member_targets(&self) -> SmallVec<[&ShapeId; 4]> {
        self.members().into_iter().map(|m| &m.target).collect()
    }

    /// Every shape this shape refers to, including operation input, output
    /// and errors, and the operations and resources bound to a service or
    /// resource.
    pub fn referenced_shapes(&self) -> SmallVec<[&ShapeId; 4]> {
        match &self.kind {
            ShapeKind::Operation {
                input,
                output,
                errors,
            } => input
                .iter()
                .chain(output.iter())
                .chain(errors.iter())
                .collect(),
            ShapeKind::Resource {
                identifiers,
                operations,
                resources,
            } => identifiers
                .iter()
                .chain(operations.iter())
                .chain(resources.iter())
                .collect(),
            ShapeKind::Service {
                operations,
                resources,
            } => operations.iter().chain(resources.iter()).collect(),
            _ => self.member_targets(),
        }
    }
}
