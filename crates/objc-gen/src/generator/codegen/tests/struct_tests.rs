use crate::generator::codegen::structs::StructGenerator;
use crate::generator::codegen::tests::load;
use crate::schema::{DataType, Registry, Schema, StructDef};

fn struct_def<'a>(registry: &Registry<'a>, namespace: &str, name: &str) -> &'a StructDef {
  match registry.resolve(namespace, name).unwrap() {
    DataType::Struct(def) => def,
    DataType::Union(_) => panic!("expected struct"),
  }
}

fn basic_schema() -> Schema {
  load(
    r#"{
    "namespaces": [
      {
        "name": "files",
        "data_types": [
          {
            "kind": "struct",
            "name": "file_metadata",
            "doc": "Metadata for a file entry.",
            "fields": [
              { "name": "path", "doc": "Full path in the user's account.", "type": { "kind": "string", "min_length": 1 } },
              { "name": "size", "type": { "kind": "uint64" }, "default": 1024 },
              { "name": "rev", "type": { "kind": "nullable", "item": { "kind": "string" } } }
            ]
          }
        ]
      }
    ]
  }"#,
  )
}

#[test]
fn test_header_interface_and_properties() {
  let schema = basic_schema();
  let registry = Registry::build(&schema).unwrap();
  let def = struct_def(&registry, "files", "file_metadata");
  let header = StructGenerator::new(&registry, "files", def).generate_header().unwrap();

  assert!(header.contains("#import <Foundation/Foundation.h>"));
  assert!(header.contains("#import \"ApiSerializers.h\""));
  assert!(header.contains("/// The FileMetadata struct."));
  assert!(header.contains("/// Metadata for a file entry."));
  assert!(header.contains("@interface FileMetadata : NSObject <ApiSerializable>"));
  assert!(header.contains("/// Full path in the user's account.\n@property (nonatomic) NSString * _Nonnull path;"));
  assert!(header.contains("/// (no documentation)\n@property (nonatomic) NSNumber * _Nullable size;"));
  assert!(header.contains("@property (nonatomic) NSString * _Nullable rev;"));
  assert!(header.contains("@interface FileMetadataSerializer : NSObject"));
}

#[test]
fn test_header_constructor_signatures() {
  let schema = basic_schema();
  let registry = Registry::build(&schema).unwrap();
  let def = struct_def(&registry, "files", "file_metadata");
  let header = StructGenerator::new(&registry, "files", def).generate_header().unwrap();

  assert!(header.contains(
    "- (nonnull instancetype)initWithPath:(NSString * _Nonnull)path size:(NSNumber * _Nullable)size rev:(NSString * _Nullable)rev;"
  ));
  // Convenience constructor drops defaulted fields but keeps nullable ones.
  assert!(header.contains("- (nonnull instancetype)initWithPath:(NSString * _Nonnull)path rev:(NSString * _Nullable)rev;"));
  assert!(header.contains("+ (NSDictionary * _Nonnull)serialize:(id _Nonnull)obj;"));
  assert!(header.contains("+ (id _Nonnull)deserialize:(NSDictionary * _Nonnull)dict;"));
}

#[test]
fn test_constructor_validates_and_applies_defaults() {
  let schema = basic_schema();
  let registry = Registry::build(&schema).unwrap();
  let def = struct_def(&registry, "files", "file_metadata");
  let body = StructGenerator::new(&registry, "files", def).generate_implementation().unwrap();

  assert!(body.contains("- (instancetype)initWithPath:(NSString *)path size:(NSNumber *)size rev:(NSString *)rev {"));
  assert!(body.contains("[ApiValidators stringValidator:[NSNumber numberWithInt:1] maxLength:nil pattern:nil](path);"));
  assert!(body.contains("self = [self init];"));
  assert!(body.contains("_path = path;"));
  assert!(body.contains("_size = size != nil ? size : [NSNumber numberWithInt:1024];"));
  assert!(body.contains("_rev = rev;"));
  assert!(body.contains("return [self initWithPath:path size:nil rev:rev];"));
}

#[test]
fn test_serializer_round_trip_shape() {
  let schema = basic_schema();
  let registry = Registry::build(&schema).unwrap();
  let def = struct_def(&registry, "files", "file_metadata");
  let body = StructGenerator::new(&registry, "files", def).generate_implementation().unwrap();

  // Serialize writes every field under its declared name.
  assert!(body.contains("jsonDict[@\"path\"] = [StringSerializer serialize:valueObj.path];"));
  assert!(body.contains("jsonDict[@\"size\"] = [NSNumberSerializer serialize:valueObj.size];"));
  // Nullable fields are omitted when absent.
  assert!(body.contains("if (valueObj.rev != nil) {"));
  assert!(body.contains("jsonDict[@\"rev\"] = [StringSerializer serialize:valueObj.rev];"));

  // Deserialize reads the same keys back.
  assert!(body.contains("NSString *path = [StringSerializer deserialize:valueDict[@\"path\"]];"));
  assert!(body.contains("NSNumber *size = [NSNumberSerializer deserialize:valueDict[@\"size\"]];"));
  assert!(
    body.contains("NSString *rev = valueDict[@\"rev\"] != nil ? [StringSerializer deserialize:valueDict[@\"rev\"]] : nil;")
  );
  assert!(body.contains("return [[FileMetadata alloc] initWithPath:path size:size rev:rev];"));
}

fn inheritance_schema() -> Schema {
  load(
    r#"{
    "namespaces": [
      {
        "name": "files",
        "data_types": [
          {
            "kind": "struct",
            "name": "metadata",
            "fields": [{ "name": "name", "type": { "kind": "string" } }],
            "subtypes": [
              { "tag": "file", "type": "file_metadata" },
              { "tag": "folder", "type": "folder_metadata" }
            ]
          },
          {
            "kind": "struct",
            "name": "file_metadata",
            "extends": "metadata",
            "fields": [{ "name": "size", "type": { "kind": "uint64" } }]
          },
          {
            "kind": "struct",
            "name": "folder_metadata",
            "extends": "metadata",
            "fields": []
          }
        ]
      }
    ]
  }"#,
  )
}

#[test]
fn test_subclass_extends_parent_and_forwards_inherited_fields() {
  let schema = inheritance_schema();
  let registry = Registry::build(&schema).unwrap();
  let def = struct_def(&registry, "files", "file_metadata");
  let generator = StructGenerator::new(&registry, "files", def);

  let header = generator.generate_header().unwrap();
  assert!(header.contains("#import \"Metadata.h\""));
  assert!(header.contains("@interface FileMetadata : Metadata <ApiSerializable>"));
  // Constructor takes inherited fields first.
  assert!(header.contains(
    "- (nonnull instancetype)initWithName:(NSString * _Nonnull)name size:(NSNumber * _Nonnull)size;"
  ));

  let body = generator.generate_implementation().unwrap();
  assert!(body.contains("self = [super initWithName:name];"));
  assert!(body.contains("_size = size;"));
  // The inherited field serializes here too.
  assert!(body.contains("jsonDict[@\"name\"] = [StringSerializer serialize:valueObj.name];"));
}

#[test]
fn test_polymorphic_dispatch_tables_match() {
  let schema = inheritance_schema();
  let registry = Registry::build(&schema).unwrap();
  let def = struct_def(&registry, "files", "metadata");
  let body = StructGenerator::new(&registry, "files", def).generate_implementation().unwrap();

  // Serialize side matches the runtime class of each declared subtype.
  assert!(body.contains("if ([valueObj class] == [FileMetadata class]) {"));
  assert!(body.contains("NSDictionary *subtypeFields = [FileMetadataSerializer serialize:(FileMetadata *)valueObj];"));
  assert!(body.contains("jsonDict[key] = subtypeFields[key];"));
  assert!(body.contains("jsonDict[@\".tag\"] = @\"file\";"));
  assert!(body.contains("jsonDict[@\".tag\"] = @\"folder\";"));

  // Deserialize side reads the same key and the same tags.
  assert!(body.contains("NSString *tag = valueDict[@\".tag\"];"));
  assert!(body.contains("if ([tag isEqualToString:@\"file\"]) {"));
  assert!(body.contains("return [FileMetadataSerializer deserialize:valueDict];"));
  assert!(body.contains("if ([tag isEqualToString:@\"folder\"]) {"));
  assert!(body.contains(
    "@throw([NSException exceptionWithName:@\"InvalidTagException\" reason:@\"Supplied tag has an invalid value.\" userInfo:nil]);"
  ));
}

#[test]
fn test_fieldless_struct_uses_default_constructor() {
  let schema = load(
    r#"{
    "namespaces": [
      {
        "name": "files",
        "data_types": [{ "kind": "struct", "name": "empty_marker", "fields": [] }]
      }
    ]
  }"#,
  );
  let registry = Registry::build(&schema).unwrap();
  let def = struct_def(&registry, "files", "empty_marker");
  let generator = StructGenerator::new(&registry, "files", def);

  let header = generator.generate_header().unwrap();
  assert!(header.contains("- (nonnull instancetype)initDefault;"));

  let body = generator.generate_implementation().unwrap();
  assert!(body.contains("- (instancetype)initDefault {"));
  // The deserializer calls the argument-less selector without a colon.
  assert!(body.contains("return [[EmptyMarker alloc] initDefault];"));
}

#[test]
fn test_union_tag_default_constructs_variant() {
  let schema = load(
    r#"{
    "namespaces": [
      {
        "name": "files",
        "data_types": [
          {
            "kind": "union",
            "name": "write_mode",
            "variants": [
              { "name": "add", "type": { "kind": "void" } },
              { "name": "overwrite", "type": { "kind": "void" } }
            ]
          },
          {
            "kind": "struct",
            "name": "commit_info",
            "fields": [
              { "name": "path", "type": { "kind": "string" } },
              {
                "name": "mode",
                "type": { "kind": "reference", "name": "write_mode" },
                "default": { "tag": "add" }
              }
            ]
          }
        ]
      }
    ]
  }"#,
  );
  let registry = Registry::build(&schema).unwrap();
  let def = struct_def(&registry, "files", "commit_info");
  let generator = StructGenerator::new(&registry, "files", def);

  let header = generator.generate_header().unwrap();
  assert!(header.contains("#import \"WriteMode.h\""));
  assert!(header.contains("@property (nonatomic) WriteMode * _Nullable mode;"));

  let body = generator.generate_implementation().unwrap();
  assert!(body.contains("_mode = mode != nil ? mode : [[WriteMode alloc] initWithAdd];"));
}
