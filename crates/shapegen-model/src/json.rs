//! Loader for the Smithy JSON AST.
//!
//! Only what the generator needs is read: shape types, member targets,
//! operation, resource and service references and constraint traits. Unknown traits are
//! ignored; unknown shape types are rejected.

use crate::error::ModelError;
use crate::model::{Model, ModelBuilder};
use crate::shape::{Member, PrimitiveKind, Shape, ShapeKind};
use crate::shape_id::ShapeId;
use crate::traits::ConstraintTrait;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct AstModel {
    #[allow(dead_code)]
    smithy: String,
    #[serde(default)]
    shapes: IndexMap<String, AstShape>,
}

#[derive(Debug, Deserialize)]
struct AstShape {
    #[serde(rename = "type")]
    shape_type: String,
    #[serde(default)]
    members: IndexMap<String, AstMember>,
    #[serde(default)]
    member: Option<AstMember>,
    #[serde(default)]
    key: Option<AstMember>,
    #[serde(default)]
    value: Option<AstMember>,
    #[serde(default)]
    input: Option<AstTarget>,
    #[serde(default)]
    output: Option<AstTarget>,
    #[serde(default)]
    errors: Vec<AstTarget>,
    #[serde(default)]
    operations: Vec<AstTarget>,
    #[serde(default)]
    resources: Vec<AstTarget>,
    #[serde(default)]
    identifiers: IndexMap<String, AstTarget>,
    #[serde(flatten)]
    lifecycle: AstLifecycle,
    #[serde(default, rename = "collectionOperations")]
    collection_operations: Vec<AstTarget>,
    #[serde(default)]
    traits: IndexMap<String, Value>,
}

/// Lifecycle operation bindings of a resource shape.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AstLifecycle {
    create: Option<AstTarget>,
    put: Option<AstTarget>,
    read: Option<AstTarget>,
    update: Option<AstTarget>,
    delete: Option<AstTarget>,
    list: Option<AstTarget>,
}

impl AstLifecycle {
    fn into_targets(self) -> impl Iterator<Item = AstTarget> {
        [
            self.create,
            self.put,
            self.read,
            self.update,
            self.delete,
            self.list,
        ]
        .into_iter()
        .flatten()
    }
}

#[derive(Debug, Deserialize)]
struct AstMember {
    target: String,
    #[serde(default)]
    traits: IndexMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct AstTarget {
    target: String,
}

impl Model {
    /// Load a model from Smithy JSON AST text.
    pub fn from_json_str(json: &str) -> Result<Model, ModelError> {
        let ast: AstModel = serde_json::from_str(json)?;
        Self::from_ast(ast)
    }

    /// Load a model from an already-parsed Smithy JSON AST value.
    pub fn from_json_value(value: Value) -> Result<Model, ModelError> {
        let ast: AstModel = serde_json::from_value(value)?;
        Self::from_ast(ast)
    }

    fn from_ast(ast: AstModel) -> Result<Model, ModelError> {
        let mut builder = ModelBuilder::new();
        for (id, shape) in ast.shapes {
            builder.add_shape(convert_shape(&id, shape)?);
        }
        builder.build()
    }
}

fn convert_shape(id: &str, ast: AstShape) -> Result<Shape, ModelError> {
    let shape_id: ShapeId = id.parse()?;
    let mut constraints = convert_traits(id, &ast.traits)?;

    let required_member = |name: &str, member: Option<AstMember>| -> Result<Member, ModelError> {
        let member = member.ok_or_else(|| ModelError::InvalidTrait {
            shape: id.to_string(),
            trait_id: name.to_string(),
            reason: format!("{} shape is missing its '{name}' member", ast.shape_type),
        })?;
        convert_member(id, name, member)
    };

    let kind = match ast.shape_type.as_str() {
        "structure" | "union" => {
            let members = ast
                .members
                .into_iter()
                .map(|(name, member)| convert_member(id, &name, member))
                .collect::<Result<Vec<_>, _>>()?;
            if ast.shape_type == "structure" {
                ShapeKind::Structure { members }
            } else {
                ShapeKind::Union { members }
            }
        }
        "list" => ShapeKind::List {
            member: required_member("member", ast.member)?,
        },
        "set" => ShapeKind::Set {
            member: required_member("member", ast.member)?,
        },
        "map" => ShapeKind::Map {
            key: required_member("key", ast.key)?,
            value: required_member("value", ast.value)?,
        },
        "enum" => {
            let variants: Vec<String> = ast
                .members
                .iter()
                .map(|(name, member)| enum_value(name, member))
                .collect();
            constraints.push(ConstraintTrait::Enum(variants.clone()));
            ShapeKind::Enum { variants }
        }
        "intEnum" => {
            let variants = ast
                .members
                .iter()
                .map(|(name, member)| int_enum_value(id, name, member).map(|v| (name.clone(), v)))
                .collect::<Result<Vec<_>, _>>()?;
            constraints.push(ConstraintTrait::IntEnum(
                variants.iter().map(|(_, value)| *value).collect(),
            ));
            ShapeKind::IntEnum { variants }
        }
        "string" if constraints.iter().any(|c| matches!(c, ConstraintTrait::Enum(_))) => {
            let variants = constraints
                .iter()
                .find_map(|c| match c {
                    ConstraintTrait::Enum(values) => Some(values.clone()),
                    _ => None,
                })
                .unwrap_or_default();
            ShapeKind::Enum { variants }
        }
        "operation" => ShapeKind::Operation {
            input: ast.input.map(|t| t.target.parse()).transpose()?,
            output: ast.output.map(|t| t.target.parse()).transpose()?,
            errors: parse_targets(ast.errors)?,
        },
        "resource" => ShapeKind::Resource {
            identifiers: parse_targets(ast.identifiers.into_values())?,
            operations: parse_targets(
                ast.lifecycle
                    .into_targets()
                    .chain(ast.operations)
                    .chain(ast.collection_operations),
            )?,
            resources: parse_targets(ast.resources)?,
        },
        "service" => ShapeKind::Service {
            operations: parse_targets(ast.operations)?,
            resources: parse_targets(ast.resources)?,
        },
        other => match PrimitiveKind::from_ast_type(other) {
            Some(kind) => ShapeKind::Primitive(kind),
            None => {
                return Err(ModelError::UnsupportedShapeType {
                    shape: id.to_string(),
                    shape_type: other.to_string(),
                });
            }
        },
    };

    Ok(Shape {
        id: shape_id,
        kind,
        constraints,
    })
}

fn convert_member(shape: &str, name: &str, member: AstMember) -> Result<Member, ModelError> {
    let owner = format!("{shape}${name}");
    Ok(Member {
        name: name.to_string(),
        target: member.target.parse()?,
        constraints: convert_traits(&owner, &member.traits)?,
    })
}

fn parse_targets(
    targets: impl IntoIterator<Item = AstTarget>,
) -> Result<Vec<ShapeId>, ModelError> {
    targets.into_iter().map(|t| t.target.parse()).collect()
}

/// The wire value of an IDL 2.0 enum member: its `@enumValue`, or its name.
fn enum_value(name: &str, member: &AstMember) -> String {
    member
        .traits
        .get("smithy.api#enumValue")
        .and_then(Value::as_str)
        .unwrap_or(name)
        .to_string()
}

/// The integer `@enumValue` of an intEnum member. Unlike string enums there
/// is no default.
fn int_enum_value(shape: &str, name: &str, member: &AstMember) -> Result<i32, ModelError> {
    member
        .traits
        .get("smithy.api#enumValue")
        .and_then(Value::as_i64)
        .and_then(|value| i32::try_from(value).ok())
        .ok_or_else(|| ModelError::InvalidTrait {
            shape: format!("{shape}${name}"),
            trait_id: "smithy.api#enumValue".to_string(),
            reason: "intEnum member needs a 32-bit integer value".to_string(),
        })
}

fn convert_traits(
    owner: &str,
    traits: &IndexMap<String, Value>,
) -> Result<Vec<ConstraintTrait>, ModelError> {
    let mut constraints = Vec::new();
    for (trait_id, value) in traits {
        let invalid = |reason: &str| ModelError::InvalidTrait {
            shape: owner.to_string(),
            trait_id: trait_id.clone(),
            reason: reason.to_string(),
        };
        let constraint = match trait_id.as_str() {
            "smithy.api#required" => ConstraintTrait::Required,
            "smithy.api#uniqueItems" => ConstraintTrait::UniqueItems,
            "smithy.api#length" => ConstraintTrait::Length {
                min: optional_bound(value, "min", Value::as_u64)
                    .map_err(|_| invalid("'min' must be a non-negative integer"))?,
                max: optional_bound(value, "max", Value::as_u64)
                    .map_err(|_| invalid("'max' must be a non-negative integer"))?,
            },
            "smithy.api#range" => ConstraintTrait::Range {
                min: optional_bound(value, "min", Value::as_f64)
                    .map_err(|_| invalid("'min' must be a number"))?,
                max: optional_bound(value, "max", Value::as_f64)
                    .map_err(|_| invalid("'max' must be a number"))?,
            },
            "smithy.api#pattern" => ConstraintTrait::Pattern(
                value
                    .as_str()
                    .ok_or_else(|| invalid("expected a string"))?
                    .to_string(),
            ),
            "smithy.api#enum" => {
                let definitions = value
                    .as_array()
                    .ok_or_else(|| invalid("expected a list of enum definitions"))?;
                let values = definitions
                    .iter()
                    .map(|def| {
                        def.get("value")
                            .and_then(Value::as_str)
                            .map(str::to_string)
                            .ok_or_else(|| invalid("enum definition without a string 'value'"))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                ConstraintTrait::Enum(values)
            }
            _ => continue,
        };
        constraints.push(constraint);
    }
    Ok(constraints)
}

/// Read an optional numeric bound from a trait object. `Err(())` when the
/// field is present but has the wrong type.
fn optional_bound<T>(
    value: &Value,
    field: &str,
    read: impl Fn(&Value) -> Option<T>,
) -> Result<Option<T>, ()> {
    match value.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(bound) => read(bound).map(Some).ok_or(()),
    }
}

#[cfg(test)]
#[path = "../tests/json_tests.rs"]
mod tests;
