//! Objective-C source emission.
//!
//! Syntax fragments shared by the struct and union generators live here;
//! each generator module owns the layout of its own headers and
//! implementation files.

use itertools::Itertools;

use crate::generator::naming::identifiers::fmt_camel_upper;
use crate::schema::Field;

pub mod serializers;
pub mod structs;
pub mod types;
pub mod unions;
pub mod validators;

#[cfg(test)]
mod tests;

/// Formats call-site arguments: the first value attaches to the selector
/// head, the rest as `name:value` pairs.
pub(crate) fn fmt_func_args(pairs: &[(String, String)]) -> String {
  pairs
    .iter()
    .enumerate()
    .map(|(index, (name, value))| {
      if index == 0 {
        value.clone()
      } else {
        format!("{name}:{value}")
      }
    })
    .join(" ")
}

/// Formats declaration-site arguments: `(T0)n0 n1:(T1)n1 ...`.
pub(crate) fn fmt_func_args_declaration(pairs: &[(String, String)]) -> String {
  pairs
    .iter()
    .enumerate()
    .map(|(index, (name, type_text))| {
      if index == 0 {
        format!("({type_text}){name}")
      } else {
        format!("{name}:({type_text}){name}")
      }
    })
    .join(" ")
}

/// Formats a method signature without a trailing semicolon or body.
pub(crate) fn fmt_signature(func: &str, args: &str, return_type: &str, class_func: bool) -> String {
  let modifier = if class_func { "+" } else { "-" };
  if args.is_empty() {
    format!("{modifier} ({return_type}){func}")
  } else {
    format!("{modifier} ({return_type}){func}:{args}")
  }
}

pub(crate) fn fmt_import(header: &str) -> String {
  format!("#import \"{header}.h\"")
}

/// The designated constructor selector for a field list: `initWith<First>`
/// or `initDefault` when there are no fields.
pub(crate) fn cstor_name(fields: &[&Field]) -> String {
  match fields.first() {
    Some(field) => format!("initWith{}", fmt_camel_upper(&field.name)),
    None => "initDefault".to_string(),
  }
}

/// Renders a Rust string as an Objective-C `@"..."` literal.
pub(crate) fn fmt_string_literal(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());
  for c in value.chars() {
    match c {
      '\\' => escaped.push_str("\\\\"),
      '"' => escaped.push_str("\\\""),
      '\n' => escaped.push_str("\\n"),
      '\t' => escaped.push_str("\\t"),
      other => escaped.push(other),
    }
  }
  format!("@\"{escaped}\"")
}

/// An `NSException` throw with the given exception name and reason.
pub(crate) fn fmt_throw(name: &str, reason: &str) -> String {
  format!("@throw([NSException exceptionWithName:@\"{name}\" reason:@\"{reason}\" userInfo:nil]);")
}
