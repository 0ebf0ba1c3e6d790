use crate::generator::naming::identifiers::{fmt_camel_upper, fmt_class, fmt_var, split_words};

#[test]
fn test_split_words() {
  assert_eq!(split_words("file_metadata"), vec!["file", "metadata"]);
  assert_eq!(split_words("writeMode"), vec!["write", "Mode"]);
  assert_eq!(split_words("HTTPRequest"), vec!["HTTP", "Request"]);
  assert_eq!(split_words("shared-link.info"), vec!["shared", "link", "info"]);
  assert!(split_words("").is_empty());
}

#[test]
fn test_var_names() {
  assert_eq!(fmt_var("file_metadata"), "fileMetadata");
  assert_eq!(fmt_var("is_active"), "isActive");
  assert_eq!(fmt_var("path"), "path");
}

#[test]
fn test_var_names_avoid_reserved_words() {
  assert_eq!(fmt_var("default"), "default_");
  assert_eq!(fmt_var("description"), "description_");
  assert_eq!(fmt_var("id"), "id_");
  assert_eq!(fmt_var("interface"), "interface_");
}

#[test]
fn test_var_names_avoid_arc_prefixes() {
  assert_eq!(fmt_var("copy_mode"), "theCopyMode");
  assert_eq!(fmt_var("new_name"), "theNewName");
}

#[test]
fn test_camel_upper() {
  assert_eq!(fmt_camel_upper("file_metadata"), "FileMetadata");
  assert_eq!(fmt_camel_upper("overwrite"), "Overwrite");
  assert_eq!(fmt_camel_upper("new_name"), "TheNewName");
}

#[test]
fn test_class_names() {
  assert_eq!(fmt_class("file_metadata"), "FileMetadata");
  assert_eq!(fmt_class("files.write_mode"), "WriteMode");
  assert_eq!(fmt_class("WriteMode"), "WriteMode");
}
