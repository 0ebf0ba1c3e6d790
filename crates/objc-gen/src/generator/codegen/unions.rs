//! Tagged-union class emission: one `.h`/`.m` pair per union data type.
//!
//! A union compiles to a single class holding a tag enum plus one property
//! per non-void variant. Exactly one variant is active; payload accessors
//! are guarded and raise when the tag does not match.

use std::collections::BTreeSet;

use crate::generator::codegen::{
  fmt_func_args, fmt_func_args_declaration, fmt_import, fmt_signature, fmt_string_literal, fmt_throw,
  serializers::{self, Direction},
  structs::{collect_references, emit_serializable_funcs, emit_serializable_signatures, emit_serializer_interface},
  types,
};
use crate::generator::naming::identifiers::{fmt_camel_upper, fmt_class, fmt_var};
use crate::generator::writer::CodeWriter;
use crate::schema::{Field, UnionDef};

pub(crate) struct UnionGenerator<'a> {
  def: &'a UnionDef,
}

impl<'a> UnionGenerator<'a> {
  pub(crate) fn new(def: &'a UnionDef) -> Self {
    Self { def }
  }

  fn class_name(&self) -> String {
    fmt_class(&self.def.name)
  }

  fn tag_enum_value(&self, variant: &Field) -> String {
    format!("{}Tag{}", self.class_name(), fmt_camel_upper(&variant.name))
  }

  fn cstor_name(&self, variant: &Field) -> String {
    format!("initWith{}", fmt_camel_upper(&variant.name))
  }

  fn referenced_classes(&self) -> BTreeSet<String> {
    let mut classes = BTreeSet::new();
    for variant in &self.def.variants {
      collect_references(&variant.schema_type, &mut classes);
    }
    classes.remove(&self.class_name());
    classes
  }

  pub(crate) fn generate_header(&self) -> String {
    let class_name = self.class_name();
    let mut w = CodeWriter::new();

    w.emit("#import <Foundation/Foundation.h>");
    w.blank();
    w.emit(&fmt_import("ApiSerializers"));
    for class in self.referenced_classes() {
      w.emit(&fmt_import(&class));
    }
    w.blank();

    w.emit(&format!("/// The possible tag states of the {class_name} union."));
    w.block_with_close(&format!("typedef NS_ENUM(NSInteger, {class_name}Tag)"), "};", |w| {
      for variant in &self.def.variants {
        let doc = variant.doc.as_deref().unwrap_or("(no documentation)");
        w.emit(&format!("/// {doc}"));
        w.emit(&format!("{},", self.tag_enum_value(variant)));
      }
    });
    w.blank();

    w.emit("///");
    w.emit(&format!("/// The {class_name} union."));
    if let Some(doc) = &self.def.doc {
      w.emit("///");
      w.emit(&format!("/// {doc}"));
    }
    w.emit("///");
    w.emit(&format!("@interface {class_name} : NSObject <ApiSerializable>"));
    w.blank();

    for variant in &self.def.variants {
      w.emit(&format!("{};", self.cstor_signature(variant, true)));
      w.blank();
    }

    for variant in &self.def.variants {
      w.emit(&format!(
        "{};",
        fmt_signature(&format!("is{}", fmt_camel_upper(&variant.name)), "", "BOOL", false)
      ));
      w.blank();
    }

    w.emit(&format!("{};", fmt_signature("getTagName", "", "NSString * _Nonnull", false)));
    w.blank();
    emit_serializable_signatures(&mut w);

    w.emit(&format!("/// Current state of the {class_name} union."));
    w.emit(&format!("@property (nonatomic) {class_name}Tag tag;"));
    w.blank();

    for variant in &self.def.variants {
      if variant.schema_type.is_void() {
        continue;
      }
      let doc = variant.doc.as_deref().unwrap_or("(no documentation)");
      w.emit(&format!("/// {doc}"));
      w.emit(&format!(
        "@property (nonatomic) {} {};",
        types::resolve_for_declaration(&variant.schema_type, false),
        fmt_var(&variant.name)
      ));
      w.blank();
    }

    w.emit("@end");
    w.blank();
    w.blank();
    emit_serializer_interface(&mut w, &class_name, "union");

    w.finish()
  }

  pub(crate) fn generate_implementation(&self) -> String {
    let class_name = self.class_name();
    let mut w = CodeWriter::new();

    w.emit(&fmt_import("ApiSerializers"));
    w.emit(&fmt_import("ApiValidators"));
    w.emit(&fmt_import(&class_name));
    for class in self.referenced_classes() {
      w.emit(&fmt_import(&class));
    }
    w.blank();

    w.emit(&format!("@implementation {class_name}"));
    w.blank();
    self.emit_cstors(&mut w);
    self.emit_tag_predicates(&mut w);
    self.emit_tag_name(&mut w);
    self.emit_guarded_accessors(&mut w);
    emit_serializable_funcs(&mut w, &class_name);
    w.emit("@end");
    w.blank();
    w.blank();

    w.emit(&format!("@implementation {class_name}Serializer"));
    w.blank();
    self.emit_serializer(&mut w);
    self.emit_deserializer(&mut w);
    w.emit("@end");

    w.finish()
  }

  fn cstor_signature(&self, variant: &Field, header: bool) -> String {
    let args = if variant.schema_type.is_void() {
      String::new()
    } else {
      let type_text = if header {
        types::resolve_for_declaration(&variant.schema_type, false)
      } else {
        types::resolve(&variant.schema_type).text
      };
      fmt_func_args_declaration(&[(fmt_var(&variant.name), type_text)])
    };
    let return_type = if header { "nonnull instancetype" } else { "instancetype" };
    fmt_signature(&self.cstor_name(variant), &args, return_type, false)
  }

  fn emit_cstors(&self, w: &mut CodeWriter) {
    for variant in &self.def.variants {
      w.block(&self.cstor_signature(variant, false), |w| {
        w.emit("self = [self init];");
        w.block("if (self)", |w| {
          w.emit(&format!("_tag = {};", self.tag_enum_value(variant)));
          if !variant.schema_type.is_void() {
            let var = fmt_var(&variant.name);
            w.emit(&format!("_{var} = {var};"));
          }
        });
        w.emit("return self;");
      });
      w.blank();
    }
  }

  fn emit_tag_predicates(&self, w: &mut CodeWriter) {
    for variant in &self.def.variants {
      let func = format!("is{}", fmt_camel_upper(&variant.name));
      w.block(&fmt_signature(&func, "", "BOOL", false), |w| {
        w.emit(&format!("return _tag == {};", self.tag_enum_value(variant)));
      });
      w.blank();
    }
  }

  /// `getTagName` maps the tag enum back to the declared variant name. The
  /// switch is exhaustive over declared variants; the trailing throw only
  /// fires if the stored tag drifted outside the enumeration.
  fn emit_tag_name(&self, w: &mut CodeWriter) {
    w.block(&fmt_signature("getTagName", "", "NSString *", false), |w| {
      w.block("switch (_tag)", |w| {
        for variant in &self.def.variants {
          w.emit(&format!("case {}:", self.tag_enum_value(variant)));
          w.emit(&format!("  return {};", fmt_string_literal(&variant.name)));
        }
      });
      w.blank();
      w.emit(&fmt_throw("InvalidTagException", "Stored tag has an invalid value."));
    });
    w.blank();
  }

  fn emit_guarded_accessors(&self, w: &mut CodeWriter) {
    for variant in &self.def.variants {
      if variant.schema_type.is_void() {
        continue;
      }
      let var = fmt_var(&variant.name);
      let enum_value = self.tag_enum_value(variant);
      let return_type = &types::resolve(&variant.schema_type).text;

      w.block(&fmt_signature(&var, "", return_type, false), |w| {
        w.block(&format!("if (_tag != {enum_value})"), |w| {
          w.emit(&format!(
            "[NSException raise:@\"IllegalStateException\" format:@\"Invalid tag: required {enum_value}, but was %@.\", [self getTagName]];"
          ));
        });
        w.emit(&format!("return _{var};"));
      });
      w.blank();
    }
  }

  fn emit_serializer(&self, w: &mut CodeWriter) {
    let class_name = self.class_name();
    let args = fmt_func_args_declaration(&[("valueObj".to_string(), format!("{class_name} *"))]);

    w.block(&fmt_signature("serialize", &args, "NSDictionary *", true), |w| {
      w.emit("NSMutableDictionary *jsonDict = [[NSMutableDictionary alloc] init];");
      w.blank();

      for variant in &self.def.variants {
        w.block(
          &format!("if ([valueObj is{}])", fmt_camel_upper(&variant.name)),
          |w| {
            if !variant.schema_type.is_void() {
              let var = fmt_var(&variant.name);
              let input_value = format!("valueObj.{var}");
              let call = serializers::serialization_call(&variant.schema_type, &input_value, Direction::Serialize);
              let entry = format!("jsonDict[{}] = {call};", fmt_string_literal(&variant.name));
              if variant.schema_type.is_nullable() {
                w.block(&format!("if (![{input_value} isEqual:[NSNull null]])"), |w| {
                  w.emit(&entry);
                });
              } else {
                w.emit(&entry);
              }
            }
            w.emit(&format!("jsonDict[@\".tag\"] = {};", fmt_string_literal(&variant.name)));
            w.emit("return jsonDict;");
          },
        );
      }
      w.blank();

      w.emit(&fmt_throw("InvalidTagException", "Stored tag has an invalid value."));
      w.blank();
      w.emit("return jsonDict;");
    });
    w.blank();
  }

  fn emit_deserializer(&self, w: &mut CodeWriter) {
    let class_name = self.class_name();
    let args = fmt_func_args_declaration(&[("valueDict".to_string(), "NSDictionary *".to_string())]);

    w.block(
      &fmt_signature("deserialize", &args, &format!("{class_name} *"), true),
      |w| {
        w.emit("NSString *tag = valueDict[@\".tag\"];");
        w.blank();

        for variant in &self.def.variants {
          w.block(
            &format!("if ([tag isEqualToString:{}])", fmt_string_literal(&variant.name)),
            |w| {
              let mut cstor_args: Vec<(String, String)> = Vec::new();
              if !variant.schema_type.is_void() {
                let var = fmt_var(&variant.name);
                let input_value = format!("valueDict[{}]", fmt_string_literal(&variant.name));
                let mut call = serializers::serialization_call(&variant.schema_type, &input_value, Direction::Deserialize);
                if variant.schema_type.is_nullable() {
                  call = format!("{input_value} != nil ? {call} : nil");
                }
                w.emit(&format!("{}{var} = {call};", types::resolve(&variant.schema_type).text));
                cstor_args.push((var.clone(), var));
              }
              w.emit(&format!(
                "return [[{class_name} alloc] {}{}];",
                self.cstor_name(variant),
                if cstor_args.is_empty() {
                  String::new()
                } else {
                  format!(":{}", fmt_func_args(&cstor_args))
                }
              ));
            },
          );
        }
        w.blank();

        w.emit(&fmt_throw("InvalidTagException", "Supplied tag has an invalid value."));
      },
    );
    w.blank();
  }
}
