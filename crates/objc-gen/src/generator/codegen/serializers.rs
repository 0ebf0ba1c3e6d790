//! Schema types to runtime serializer call expressions.
//!
//! Every expression targets the `ApiSerializers` runtime entry points,
//! which expose paired `serialize:`/`deserialize:` class methods. The
//! builder is direction-parametric so both sides of the wire mapping come
//! from the same table.

use crate::generator::codegen::fmt_func_args;
use crate::generator::naming::identifiers::fmt_class;
use crate::schema::SchemaType;

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
  Serialize,
  Deserialize,
}

impl Direction {
  fn method(self) -> &'static str {
    match self {
      Direction::Serialize => "serialize",
      Direction::Deserialize => "deserialize",
    }
  }
}

/// The serializer object handling a schema type.
pub(crate) fn serializer_object(ty: &SchemaType) -> String {
  let (inner, _) = ty.unwrap_nullable();
  match inner {
    SchemaType::Boolean => "BoolSerializer".to_string(),
    SchemaType::Int32(_)
    | SchemaType::Int64(_)
    | SchemaType::Uint32(_)
    | SchemaType::Uint64(_)
    | SchemaType::Float32(_)
    | SchemaType::Float64(_) => "NSNumberSerializer".to_string(),
    SchemaType::String(_) => "StringSerializer".to_string(),
    SchemaType::Bytes => "NSDataSerializer".to_string(),
    SchemaType::Timestamp(_) => "NSDateSerializer".to_string(),
    SchemaType::List(_) => "ArraySerializer".to_string(),
    SchemaType::Reference { name } => format!("{}Serializer", fmt_class(name)),
    SchemaType::Void | SchemaType::Nullable { .. } => String::new(),
  }
}

/// Builds the conversion expression for `value_expr` in the given
/// direction. Lists recurse through a `withBlock:` element callback;
/// timestamps thread their wire format through `dateFormat:`. Void has no
/// wire value, so the expression degenerates to the input.
pub(crate) fn serialization_call(ty: &SchemaType, value_expr: &str, direction: Direction) -> String {
  let (inner, _) = ty.unwrap_nullable();

  let mut args = vec![("value".to_string(), value_expr.to_string())];
  match inner {
    SchemaType::Void => return value_expr.to_string(),
    SchemaType::List(list) => {
      let element_call = serialization_call(&list.item, "obj", direction);
      args.push(("withBlock".to_string(), format!("^id(id obj) {{ return {element_call}; }}")));
    }
    SchemaType::Timestamp(timestamp) => {
      args.push(("dateFormat".to_string(), format!("@\"{}\"", timestamp.format)));
    }
    _ => {}
  }

  format!(
    "[{} {}:{}]",
    serializer_object(inner),
    direction.method(),
    fmt_func_args(&args)
  )
}
