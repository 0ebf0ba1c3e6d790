//! The input data model: an already-parsed, already-type-checked IDL schema.
//!
//! The schema is a read-only object graph produced by an out-of-scope
//! frontend and handed to the generator as a JSON document. Deserializing
//! that document is object-graph loading, not IDL parsing; nothing in this
//! module interprets textual IDL source.

use serde::Deserialize;

/// Bounds attached to a numeric primitive type.
///
/// An absent bound means "unconstrained on that side". A bound of zero is a
/// real bound, not an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumericConstraints {
  #[serde(default)]
  pub min_value: Option<i64>,
  #[serde(default)]
  pub max_value: Option<i64>,
}

impl NumericConstraints {
  pub fn is_constrained(&self) -> bool {
    self.min_value.is_some() || self.max_value.is_some()
  }
}

/// Length and pattern constraints attached to a string primitive type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StringConstraints {
  #[serde(default)]
  pub min_length: Option<u64>,
  #[serde(default)]
  pub max_length: Option<u64>,
  #[serde(default)]
  pub pattern: Option<String>,
}

impl StringConstraints {
  pub fn is_constrained(&self) -> bool {
    self.min_length.is_some() || self.max_length.is_some() || self.pattern.is_some()
  }
}

/// A timestamp primitive carrying its wire date format.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimestampType {
  pub format: String,
}

/// A homogeneous list with optional size bounds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListType {
  pub item: Box<SchemaType>,
  #[serde(default)]
  pub min_items: Option<u64>,
  #[serde(default)]
  pub max_items: Option<u64>,
}

/// One node of the schema type tree.
///
/// `Nullable` wraps exactly one layer; the frontend never produces nested
/// nullables and the registry rejects them. `Reference` names a user-defined
/// struct or union, either namespace-qualified (`ns.Name`) or bare (resolved
/// within the referencing namespace).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaType {
  Boolean,
  Int32(NumericConstraints),
  Int64(NumericConstraints),
  Uint32(NumericConstraints),
  Uint64(NumericConstraints),
  Float32(NumericConstraints),
  Float64(NumericConstraints),
  String(StringConstraints),
  Bytes,
  Timestamp(TimestampType),
  Void,
  List(ListType),
  Nullable { item: Box<SchemaType> },
  Reference { name: String },
}

impl SchemaType {
  /// Strips at most one `Nullable` layer, reporting whether it was present.
  pub fn unwrap_nullable(&self) -> (&SchemaType, bool) {
    match self {
      SchemaType::Nullable { item } => (item, true),
      other => (other, false),
    }
  }

  pub fn is_void(&self) -> bool {
    matches!(self.unwrap_nullable().0, SchemaType::Void)
  }

  pub fn is_nullable(&self) -> bool {
    matches!(self, SchemaType::Nullable { .. })
  }

  /// The numeric constraints, when this (unwrapped) type is numeric.
  pub fn numeric_constraints(&self) -> Option<&NumericConstraints> {
    match self {
      SchemaType::Int32(c)
      | SchemaType::Int64(c)
      | SchemaType::Uint32(c)
      | SchemaType::Uint64(c)
      | SchemaType::Float32(c)
      | SchemaType::Float64(c) => Some(c),
      _ => None,
    }
  }
}

/// A literal default value for a field.
///
/// Union-typed fields may default to one of the union's void variants via a
/// `{"tag": ...}` reference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
  Tag { tag: String },
  Bool(bool),
  Int(i64),
  Float(f64),
  Str(String),
}

/// A named, typed member of a struct or one variant of a union.
///
/// Field order is significant: it fixes constructor argument order and the
/// order of emitted declarations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Field {
  pub name: String,
  #[serde(default)]
  pub doc: Option<String>,
  #[serde(rename = "type")]
  pub schema_type: SchemaType,
  #[serde(default)]
  pub default: Option<DefaultValue>,
}

impl Field {
  pub fn has_default(&self) -> bool {
    self.default.is_some()
  }
}

/// One `(tag, subtype)` pair of an enumerated-subtype hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubtypeRef {
  pub tag: String,
  #[serde(rename = "type")]
  pub type_name: String,
}

/// A struct data type: own fields plus an optional single-inheritance parent.
///
/// When `subtypes` is non-empty the struct is the root of an
/// enumerated-subtype hierarchy and its serialized form carries a `.tag`
/// discriminator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StructDef {
  pub name: String,
  #[serde(default)]
  pub doc: Option<String>,
  #[serde(default)]
  pub extends: Option<String>,
  #[serde(default)]
  pub fields: Vec<Field>,
  #[serde(default)]
  pub subtypes: Vec<SubtypeRef>,
}

impl StructDef {
  pub fn has_enumerated_subtypes(&self) -> bool {
    !self.subtypes.is_empty()
  }
}

/// A union data type: ordered, mutually exclusive variants.
///
/// Exactly one variant is active at runtime; `Void`-typed variants are bare
/// tag markers without payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UnionDef {
  pub name: String,
  #[serde(default)]
  pub doc: Option<String>,
  pub variants: Vec<Field>,
}

/// A user-defined data type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataType {
  Struct(StructDef),
  Union(UnionDef),
}

impl DataType {
  pub fn name(&self) -> &str {
    match self {
      DataType::Struct(def) => &def.name,
      DataType::Union(def) => &def.name,
    }
  }

  pub fn doc(&self) -> Option<&str> {
    match self {
      DataType::Struct(def) => def.doc.as_deref(),
      DataType::Union(def) => def.doc.as_deref(),
    }
  }
}

/// One namespace, exposing its data types in dependency order
/// (supertypes before the types that extend or reference them).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Namespace {
  pub name: String,
  #[serde(default)]
  pub doc: Option<String>,
  #[serde(default)]
  pub data_types: Vec<DataType>,
}

/// The complete schema document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Schema {
  pub namespaces: Vec<Namespace>,
}

impl Schema {
  pub fn from_json(input: &str) -> serde_json::Result<Self> {
    serde_json::from_str(input)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_unwrap_nullable_strips_one_layer() {
    let ty = SchemaType::Nullable {
      item: Box::new(SchemaType::Boolean),
    };
    let (inner, nullable) = ty.unwrap_nullable();
    assert!(nullable);
    assert_eq!(inner, &SchemaType::Boolean);

    let (inner, nullable) = SchemaType::Bytes.unwrap_nullable();
    assert!(!nullable);
    assert_eq!(inner, &SchemaType::Bytes);
  }

  #[test]
  fn test_numeric_constraints_presence() {
    let unconstrained = NumericConstraints::default();
    assert!(!unconstrained.is_constrained());

    // A zero bound is a bound.
    let zero_min = NumericConstraints {
      min_value: Some(0),
      max_value: None,
    };
    assert!(zero_min.is_constrained());
  }

  #[test]
  fn test_schema_type_from_json() {
    let json = r#"{
      "kind": "list",
      "item": { "kind": "int32", "min_value": 0, "max_value": 100 },
      "min_items": 1
    }"#;
    let ty: SchemaType = serde_json::from_str(json).unwrap();
    let SchemaType::List(list) = ty else {
      panic!("expected list type");
    };
    assert_eq!(list.min_items, Some(1));
    assert_eq!(list.max_items, None);
    assert_eq!(
      list.item.numeric_constraints(),
      Some(&NumericConstraints {
        min_value: Some(0),
        max_value: Some(100),
      })
    );
  }

  #[test]
  fn test_default_value_from_json() {
    let field: Field = serde_json::from_str(r#"{"name": "count", "type": {"kind": "uint64"}, "default": 5}"#).unwrap();
    assert!(field.has_default());
    assert_eq!(field.default, Some(DefaultValue::Int(5)));

    let field: Field =
      serde_json::from_str(r#"{"name": "mode", "type": {"kind": "reference", "name": "Mode"}, "default": {"tag": "auto"}}"#)
        .unwrap();
    assert_eq!(field.default, Some(DefaultValue::Tag { tag: "auto".into() }));
  }

  #[test]
  fn test_schema_document_from_json() {
    let json = r#"{
      "namespaces": [
        {
          "name": "files",
          "data_types": [
            {
              "kind": "struct",
              "name": "file_metadata",
              "fields": [
                { "name": "path", "type": { "kind": "string" } }
              ]
            },
            {
              "kind": "union",
              "name": "write_mode",
              "variants": [
                { "name": "add", "type": { "kind": "void" } },
                { "name": "overwrite", "type": { "kind": "void" } }
              ]
            }
          ]
        }
      ]
    }"#;
    let schema = Schema::from_json(json).unwrap();
    assert_eq!(schema.namespaces.len(), 1);
    assert_eq!(schema.namespaces[0].data_types.len(), 2);
    assert_eq!(schema.namespaces[0].data_types[1].name(), "write_mode");
  }
}
