use crate::generator::codegen::types::{resolve, resolve_for_declaration};
use crate::schema::{ListType, NumericConstraints, SchemaType, StringConstraints, TimestampType};

fn string_type() -> SchemaType {
  SchemaType::String(StringConstraints::default())
}

fn nullable(item: SchemaType) -> SchemaType {
  SchemaType::Nullable { item: Box::new(item) }
}

fn list(item: SchemaType) -> SchemaType {
  SchemaType::List(ListType {
    item: Box::new(item),
    min_items: None,
    max_items: None,
  })
}

#[test]
fn test_primitive_mapping() {
  assert_eq!(resolve(&SchemaType::Boolean).text, "NSNumber *");
  assert_eq!(resolve(&SchemaType::Int64(NumericConstraints::default())).text, "NSNumber *");
  assert_eq!(resolve(&string_type()).text, "NSString *");
  assert_eq!(resolve(&SchemaType::Bytes).text, "NSData *");
  assert_eq!(
    resolve(&SchemaType::Timestamp(TimestampType {
      format: "yyyy-MM-dd".to_string()
    }))
    .text,
    "NSDate *"
  );
  assert_eq!(resolve(&SchemaType::Void).text, "void");
}

#[test]
fn test_reference_mapping() {
  let ty = SchemaType::Reference {
    name: "files.file_metadata".to_string(),
  };
  assert_eq!(resolve(&ty).text, "FileMetadata *");
}

#[test]
fn test_list_renders_generic_element() {
  assert_eq!(resolve(&list(string_type())).text, "NSArray<NSString *> *");
  assert_eq!(resolve(&list(list(string_type()))).text, "NSArray<NSArray<NSString *> *> *");
  // Boolean elements still box into the generic parameter.
  assert_eq!(resolve(&list(SchemaType::Boolean)).text, "NSArray<NSNumber *> *");
}

#[test]
fn test_declaration_qualifiers() {
  assert_eq!(resolve_for_declaration(&string_type(), false), "NSString * _Nonnull");
  assert_eq!(resolve_for_declaration(&nullable(string_type()), false), "NSString * _Nullable");
  // A default makes the declaration nullable even for a non-nullable type.
  assert_eq!(resolve_for_declaration(&string_type(), true), "NSString * _Nullable");
  assert_eq!(resolve_for_declaration(&SchemaType::Void, false), "void");
}
