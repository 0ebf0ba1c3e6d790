pub(crate) mod errors;
pub(crate) mod model;
pub(crate) mod registry;

pub use errors::SchemaError;
pub use model::{
  DataType, DefaultValue, Field, ListType, Namespace, NumericConstraints, Schema, SchemaType, StringConstraints,
  StructDef, SubtypeRef, TimestampType, UnionDef,
};
pub use registry::Registry;
