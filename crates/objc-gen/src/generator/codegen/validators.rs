//! Schema constraints to runtime validator expressions.
//!
//! Validators are expressions over the `ApiValidators` entry points in the
//! runtime support library. Composition mirrors the type tree: list
//! validators nest their element validator, and a nullable wrapper adapts
//! the inner validator to tolerate `nil`.

use crate::generator::codegen::fmt_func_args;
use crate::schema::{ListType, NumericConstraints, SchemaType, StringConstraints};

/// Builds the validator expression for a schema type, or `None` when the
/// type carries no constraint to check.
///
/// Lists always validate, even unbounded ones: the element callback must
/// run against every element to catch nested constraints, and the runtime
/// entry point type-checks the value as an array.
pub(crate) fn compose(ty: &SchemaType) -> Option<String> {
  let (inner, nullable) = ty.unwrap_nullable();

  let validator = match inner {
    SchemaType::List(list) => Some(list_validator(list)),
    SchemaType::String(constraints) => string_validator(constraints),
    other => other.numeric_constraints().and_then(numeric_validator),
  }?;

  if nullable {
    Some(format!("[ApiValidators nullableValidator:{validator}]"))
  } else {
    Some(validator)
  }
}

/// A bound of zero is still a bound; only absent bounds pass `nil`.
fn fmt_bound(bound: Option<i64>) -> String {
  match bound {
    Some(value) => format!("[NSNumber numberWithInt:{value}]"),
    None => "nil".to_string(),
  }
}

fn fmt_unsigned_bound(bound: Option<u64>) -> String {
  match bound {
    Some(value) => format!("[NSNumber numberWithInt:{value}]"),
    None => "nil".to_string(),
  }
}

fn numeric_validator(constraints: &NumericConstraints) -> Option<String> {
  if !constraints.is_constrained() {
    return None;
  }
  let args = fmt_func_args(&[
    ("minValue".to_string(), fmt_bound(constraints.min_value)),
    ("maxValue".to_string(), fmt_bound(constraints.max_value)),
  ]);
  Some(format!("[ApiValidators numericValidator:{args}]"))
}

fn string_validator(constraints: &StringConstraints) -> Option<String> {
  if !constraints.is_constrained() {
    return None;
  }
  let pattern = match &constraints.pattern {
    Some(pattern) => format!("@\"{}\"", escape_pattern(pattern)),
    None => "nil".to_string(),
  };
  let args = fmt_func_args(&[
    ("minLength".to_string(), fmt_unsigned_bound(constraints.min_length)),
    ("maxLength".to_string(), fmt_unsigned_bound(constraints.max_length)),
    ("pattern".to_string(), pattern),
  ]);
  Some(format!("[ApiValidators stringValidator:{args}]"))
}

fn list_validator(list: &ListType) -> String {
  let item_validator = compose(&list.item).unwrap_or_else(|| "nil".to_string());
  let args = fmt_func_args(&[
    ("minItems".to_string(), fmt_unsigned_bound(list.min_items)),
    ("maxItems".to_string(), fmt_unsigned_bound(list.max_items)),
    ("itemValidator".to_string(), item_validator),
  ]);
  format!("[ApiValidators arrayValidator:{args}]")
}

/// Escapes a regex pattern for embedding in an `@"..."` literal.
fn escape_pattern(pattern: &str) -> String {
  let mut escaped = String::with_capacity(pattern.len());
  for c in pattern.chars() {
    match c {
      '\\' => escaped.push_str("\\\\"),
      '"' => escaped.push_str("\\\""),
      '\n' => escaped.push_str("\\n"),
      '\t' => escaped.push_str("\\t"),
      other => escaped.push(other),
    }
  }
  escaped
}
