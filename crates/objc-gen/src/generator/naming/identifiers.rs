use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

/// Identifiers that collide with Objective-C keywords or with names that
/// Foundation and the property runtime treat specially. Formatted names that
/// land on one of these get a trailing underscore.
static RESERVED_WORDS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "auto",
    "else",
    "long",
    "switch",
    "break",
    "enum",
    "register",
    "typedef",
    "case",
    "extern",
    "return",
    "union",
    "char",
    "float",
    "short",
    "unsigned",
    "const",
    "for",
    "signed",
    "void",
    "continue",
    "goto",
    "sizeof",
    "volatile",
    "default",
    "if",
    "static",
    "while",
    "do",
    "int",
    "struct",
    "_packed",
    "double",
    "protocol",
    "interface",
    "implementation",
    "nsobject",
    "nsinteger",
    "nsnumber",
    "cgfloat",
    "property",
    "nonatomic",
    "retain",
    "strong",
    "weak",
    "unsafe_unretained",
    "readwrite",
    "description",
    "id",
  ]
  .into_iter()
  .collect()
});

/// ARC assigns ownership semantics to selectors starting with these prefixes,
/// so generated names must not begin with them.
const RESERVED_PREFIXES: [&str; 2] = ["copy", "new"];

// Separators fall out as non-matches; case boundaries are split afterwards.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z0-9]+").unwrap());

pub(crate) fn split_words(name: &str) -> Vec<&str> {
  let mut words = Vec::new();
  for m in WORD_RE.find_iter(name) {
    split_case_runs(m.as_str(), &mut words);
  }
  words
}

/// Splits one alphanumeric run on case boundaries: before each uppercase
/// letter following a non-uppercase one, and inside an uppercase run right
/// before its final letter when lowercase follows (`HTTPRequest` is
/// `HTTP` + `Request`).
fn split_case_runs<'a>(run: &'a str, words: &mut Vec<&'a str>) {
  let bytes = run.as_bytes();
  if bytes.is_empty() {
    return;
  }
  let mut start = 0;
  for i in 1..bytes.len() {
    let prev = bytes[i - 1];
    let cur = bytes[i];
    let boundary = (cur.is_ascii_uppercase() && !prev.is_ascii_uppercase())
      || (prev.is_ascii_uppercase()
        && cur.is_ascii_uppercase()
        && i + 1 < bytes.len()
        && bytes[i + 1].is_ascii_lowercase());
    if boundary {
      words.push(&run[start..i]);
      start = i;
    }
  }
  words.push(&run[start..]);
}

fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str().to_ascii_lowercase().as_str(),
    None => String::new(),
  }
}

fn camel(name: &str, upper_first: bool) -> String {
  let mut out = String::new();
  for (index, word) in split_words(name).into_iter().enumerate() {
    if index == 0 && !upper_first {
      out.push_str(&word.to_ascii_lowercase());
    } else {
      out.push_str(&capitalize(word));
    }
  }
  out
}

fn guard_reserved(ident: String, upper_first: bool) -> String {
  let lowered = ident.to_ascii_lowercase();

  let mut ident = if RESERVED_PREFIXES.iter().any(|prefix| lowered.starts_with(prefix)) {
    let article = if upper_first { "The" } else { "the" };
    format!("{article}{}", capitalize_first(&ident))
  } else {
    ident
  };

  if RESERVED_WORDS.contains(ident.to_ascii_lowercase().as_str()) {
    ident.push('_');
  }
  ident
}

fn capitalize_first(ident: &str) -> String {
  let mut chars = ident.chars();
  match chars.next() {
    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
    None => String::new(),
  }
}

/// Formats a schema name as a `lowerCamelCase` Objective-C identifier,
/// suitable for variables, properties, and selector fragments.
pub(crate) fn fmt_var(name: &str) -> String {
  guard_reserved(camel(name, false), false)
}

/// Formats a schema name as an `UpperCamelCase` fragment for splicing into
/// selectors (`initWith...`, `is...`) and enum value names.
pub(crate) fn fmt_camel_upper(name: &str) -> String {
  guard_reserved(camel(name, true), true)
}

/// Formats a (possibly namespace-qualified) type name as an Objective-C
/// class name. Only the final `.`-separated segment contributes.
pub(crate) fn fmt_class(name: &str) -> String {
  let segment = name.rsplit('.').next().unwrap_or(name);
  guard_reserved(camel(segment, true), true)
}
