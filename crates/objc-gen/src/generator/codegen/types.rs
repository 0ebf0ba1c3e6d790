//! Schema type nodes to Objective-C type expressions.

use crate::generator::naming::identifiers::fmt_class;
use crate::schema::SchemaType;

/// A resolved Objective-C type expression. `text` carries the trailing `*`
/// for object types; `nullable` records whether the schema type was
/// nullable-wrapped.
pub(crate) struct ObjCType {
  pub(crate) text: String,
  pub(crate) nullable: bool,
}

/// Maps a schema type to its Objective-C expression.
///
/// All numerics box into `NSNumber *`; list element types are rendered
/// recursively into the generic parameter, dropping element nullability
/// (the generic slot carries no qualifier).
pub(crate) fn resolve(ty: &SchemaType) -> ObjCType {
  let (inner, nullable) = ty.unwrap_nullable();
  let text = match inner {
    SchemaType::Boolean
    | SchemaType::Int32(_)
    | SchemaType::Int64(_)
    | SchemaType::Uint32(_)
    | SchemaType::Uint64(_)
    | SchemaType::Float32(_)
    | SchemaType::Float64(_) => "NSNumber *".to_string(),
    SchemaType::String(_) => "NSString *".to_string(),
    SchemaType::Bytes => "NSData *".to_string(),
    SchemaType::Timestamp(_) => "NSDate *".to_string(),
    SchemaType::Void => "void".to_string(),
    SchemaType::List(list) => format!("NSArray<{}> *", resolve(&list.item).text),
    SchemaType::Reference { name } => format!("{} *", fmt_class(name)),
    // Nested nullables are rejected at registry validation.
    SchemaType::Nullable { item } => resolve(item).text,
  };
  ObjCType { text, nullable }
}

/// Resolves a type for a declaration position (property or parameter),
/// appending a nullability qualifier. Defaulted fields accept `nil` at the
/// constructor, so they declare `_Nullable` regardless of the schema type.
pub(crate) fn resolve_for_declaration(ty: &SchemaType, has_default: bool) -> String {
  let resolved = resolve(ty);
  if resolved.text == "void" {
    return resolved.text;
  }
  if resolved.nullable || has_default {
    format!("{} _Nullable", resolved.text)
  } else {
    format!("{} _Nonnull", resolved.text)
  }
}

/// The bare class name of a user-defined reference.
pub(crate) fn class_name(name: &str) -> String {
  fmt_class(name)
}
