use thiserror::Error;

/// Violations of the schema input contract.
///
/// The schema arrives pre-parsed and pre-typed from the upstream frontend, so
/// every one of these indicates a defect in the producer rather than a
/// recoverable runtime condition. They are raised once, during registry
/// construction and validation, before any code is emitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
  #[error("duplicate data type `{0}`")]
  DuplicateDataType(String),

  #[error("unknown type reference `{name}` (resolved from namespace `{namespace}`)")]
  UnknownTypeReference { namespace: String, name: String },

  #[error("`{child}` extends `{parent}`, which is not a struct")]
  SupertypeNotStruct { child: String, parent: String },

  #[error("circular inheritance chain through `{0}`")]
  CircularInheritance(String),

  #[error("duplicate field `{field}` across `{data_type}` and its supertype chain")]
  DuplicateField { data_type: String, field: String },

  #[error("field `{field}` of `{data_type}` wraps a nullable type in another nullable")]
  NestedNullable { data_type: String, field: String },

  #[error("field `{field}` of `{data_type}` has type void, which is only valid for union variants")]
  VoidField { data_type: String, field: String },

  #[error("union `{0}` declares no variants")]
  EmptyUnion(String),

  #[error("duplicate variant `{variant}` in union `{union_name}`")]
  DuplicateVariant { union_name: String, variant: String },

  #[error("duplicate subtype tag `{tag}` on `{data_type}`")]
  DuplicateSubtypeTag { data_type: String, tag: String },

  #[error("subtype `{subtype}` of `{root}` does not extend it")]
  SubtypeNotDerived { root: String, subtype: String },

  #[error("default value for field `{field}` of `{data_type}` does not match the field type")]
  IncompatibleDefault { data_type: String, field: String },
}
