//! Struct class emission: one `.h`/`.m` pair per struct data type.

use std::collections::BTreeSet;

use crate::generator::codegen::{
  cstor_name, fmt_func_args, fmt_func_args_declaration, fmt_import, fmt_signature, fmt_string_literal, fmt_throw,
  serializers::{self, Direction},
  types, validators,
};
use crate::generator::naming::identifiers::{fmt_camel_upper, fmt_class, fmt_var};
use crate::generator::writer::CodeWriter;
use crate::schema::{DefaultValue, Field, Registry, SchemaError, SchemaType, StructDef};

pub(crate) struct StructGenerator<'a> {
  registry: &'a Registry<'a>,
  namespace: &'a str,
  def: &'a StructDef,
}

impl<'a> StructGenerator<'a> {
  pub(crate) fn new(registry: &'a Registry<'a>, namespace: &'a str, def: &'a StructDef) -> Self {
    Self {
      registry,
      namespace,
      def,
    }
  }

  fn class_name(&self) -> String {
    fmt_class(&self.def.name)
  }

  fn all_fields(&self) -> Result<Vec<&'a Field>, SchemaError> {
    self.registry.all_fields(self.namespace, self.def)
  }

  fn inherited_fields<'f>(&self, all_fields: &[&'f Field]) -> Vec<&'f Field> {
    all_fields[..all_fields.len() - self.def.fields.len()].to_vec()
  }

  fn has_defaults(all_fields: &[&Field]) -> bool {
    all_fields.iter().any(|field| field.has_default())
  }

  /// Class names referenced by this struct's own fields, supertype, and
  /// subtype table, excluding the struct itself.
  fn referenced_classes(&self) -> BTreeSet<String> {
    let mut classes = BTreeSet::new();
    if let Some(parent) = &self.def.extends {
      classes.insert(fmt_class(parent));
    }
    for field in &self.def.fields {
      collect_references(&field.schema_type, &mut classes);
    }
    for subtype in &self.def.subtypes {
      classes.insert(fmt_class(&subtype.type_name));
    }
    classes.remove(&self.class_name());
    classes
  }

  pub(crate) fn generate_header(&self) -> Result<String, SchemaError> {
    let class_name = self.class_name();
    let all_fields = self.all_fields()?;
    let mut w = CodeWriter::new();

    w.emit("#import <Foundation/Foundation.h>");
    w.blank();
    w.emit(&fmt_import("ApiSerializers"));
    for class in self.referenced_classes() {
      w.emit(&fmt_import(&class));
    }
    w.blank();

    w.emit("///");
    w.emit(&format!("/// The {class_name} struct."));
    if let Some(doc) = &self.def.doc {
      w.emit("///");
      w.emit(&format!("/// {doc}"));
    }
    w.emit("///");

    let parent = self.def.extends.as_deref().map(fmt_class);
    w.emit(&format!(
      "@interface {class_name} : {} <ApiSerializable>",
      parent.as_deref().unwrap_or("NSObject")
    ));
    w.blank();

    for field in &self.def.fields {
      let doc = field.doc.as_deref().unwrap_or("(no documentation)");
      w.emit(&format!("/// {doc}"));
      w.emit(&format!(
        "@property (nonatomic) {} {};",
        types::resolve_for_declaration(&field.schema_type, field.has_default()),
        fmt_var(&field.name)
      ));
      w.blank();
    }

    w.emit(&format!("{};", cstor_signature(&all_fields, true)));
    w.blank();
    if Self::has_defaults(&all_fields) {
      let required: Vec<&Field> = all_fields.iter().copied().filter(|f| !f.has_default()).collect();
      w.emit(&format!("{};", cstor_signature(&required, true)));
      w.blank();
    }
    emit_serializable_signatures(&mut w);

    w.emit("@end");
    w.blank();
    w.blank();
    emit_serializer_interface(&mut w, &class_name, "struct");

    Ok(w.finish())
  }

  pub(crate) fn generate_implementation(&self) -> Result<String, SchemaError> {
    let class_name = self.class_name();
    let all_fields = self.all_fields()?;
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
    self.emit_cstor(&mut w, &all_fields);
    self.emit_cstor_default(&mut w, &all_fields);
    emit_serializable_funcs(&mut w, &class_name);
    w.emit("@end");
    w.blank();
    w.blank();

    w.emit(&format!("@implementation {class_name}Serializer"));
    w.blank();
    self.emit_serializer(&mut w, &all_fields);
    self.emit_deserializer(&mut w, &all_fields);
    w.emit("@end");

    Ok(w.finish())
  }

  fn emit_cstor(&self, w: &mut CodeWriter, all_fields: &[&Field]) {
    let inherited = self.inherited_fields(all_fields);

    w.block(&cstor_signature(all_fields, false), |w| {
      for field in all_fields {
        if let Some(validator) = validators::compose(&field.schema_type) {
          w.emit(&format!("{validator}({});", fmt_var(&field.name)));
        }
      }
      w.blank();

      if inherited.is_empty() {
        w.emit("self = [self init];");
      } else {
        let args: Vec<(String, String)> = inherited
          .iter()
          .map(|f| (fmt_var(&f.name), fmt_var(&f.name)))
          .collect();
        w.emit(&format!(
          "self = [super {}:{}];",
          cstor_name(&inherited),
          fmt_func_args(&args)
        ));
      }
      w.block("if (self)", |w| {
        for field in &self.def.fields {
          let var = fmt_var(&field.name);
          match &field.default {
            Some(default) => {
              let value = fmt_default_value(&field.schema_type, default);
              w.emit(&format!("_{var} = {var} != nil ? {var} : {value};"));
            }
            None => w.emit(&format!("_{var} = {var};")),
          }
        }
      });
      w.emit("return self;");
    });
    w.blank();
  }

  /// The convenience constructor takes only non-defaulted fields and
  /// forwards `nil` for the rest.
  fn emit_cstor_default(&self, w: &mut CodeWriter, all_fields: &[&Field]) {
    if !Self::has_defaults(all_fields) {
      return;
    }
    let required: Vec<&Field> = all_fields.iter().copied().filter(|f| !f.has_default()).collect();

    w.block(&cstor_signature(&required, false), |w| {
      let args: Vec<(String, String)> = all_fields
        .iter()
        .map(|f| {
          let value = if f.has_default() { "nil".to_string() } else { fmt_var(&f.name) };
          (fmt_var(&f.name), value)
        })
        .collect();
      w.emit(&format!(
        "return [self {}:{}];",
        cstor_name(all_fields),
        fmt_func_args(&args)
      ));
    });
    w.blank();
  }

  fn emit_serializer(&self, w: &mut CodeWriter, all_fields: &[&Field]) {
    let class_name = self.class_name();
    let args = fmt_func_args_declaration(&[("valueObj".to_string(), format!("{class_name} *"))]);

    w.block(&fmt_signature("serialize", &args, "NSDictionary *", true), |w| {
      w.emit("NSMutableDictionary *jsonDict = [[NSMutableDictionary alloc] init];");
      w.blank();

      for field in all_fields {
        let var = fmt_var(&field.name);
        let input_value = format!("valueObj.{var}");
        let call = serializers::serialization_call(&field.schema_type, &input_value, Direction::Serialize);
        let entry = format!("jsonDict[{}] = {call};", fmt_string_literal(&field.name));
        if field.schema_type.is_nullable() {
          w.block(&format!("if ({input_value} != nil)"), |w| w.emit(&entry));
        } else {
          w.emit(&entry);
        }
      }
      w.blank();

      if self.def.has_enumerated_subtypes() {
        // Dispatch on the exact runtime class, first declared match wins.
        for subtype in &self.def.subtypes {
          let sub_class = fmt_class(&subtype.type_name);
          w.block(&format!("if ([valueObj class] == [{sub_class} class])"), |w| {
            w.emit(&format!(
              "NSDictionary *subtypeFields = [{sub_class}Serializer serialize:({sub_class} *)valueObj];"
            ));
            w.block("for (NSString *key in subtypeFields)", |w| {
              w.emit("jsonDict[key] = subtypeFields[key];");
            });
            w.emit(&format!("jsonDict[@\".tag\"] = {};", fmt_string_literal(&subtype.tag)));
          });
        }
        w.blank();
      }

      w.emit("return jsonDict;");
    });
    w.blank();
  }

  fn emit_deserializer(&self, w: &mut CodeWriter, all_fields: &[&Field]) {
    let class_name = self.class_name();
    let args = fmt_func_args_declaration(&[("valueDict".to_string(), "NSDictionary *".to_string())]);

    w.block(
      &fmt_signature("deserialize", &args, &format!("{class_name} *"), true),
      |w| {
        if self.def.has_enumerated_subtypes() {
          w.emit("NSString *tag = valueDict[@\".tag\"];");
          w.blank();
          for subtype in &self.def.subtypes {
            let sub_class = fmt_class(&subtype.type_name);
            w.block(
              &format!("if ([tag isEqualToString:{}])", fmt_string_literal(&subtype.tag)),
              |w| {
                w.emit(&format!("return [{sub_class}Serializer deserialize:valueDict];"));
              },
            );
          }
          w.blank();
          w.emit(&fmt_throw("InvalidTagException", "Supplied tag has an invalid value."));
        } else {
          for field in all_fields {
            let var = fmt_var(&field.name);
            let input_value = format!("valueDict[{}]", fmt_string_literal(&field.name));
            let mut call = serializers::serialization_call(&field.schema_type, &input_value, Direction::Deserialize);
            if field.schema_type.is_nullable() {
              call = format!("{input_value} != nil ? {call} : nil");
            }
            w.emit(&format!("{}{var} = {call};", types::resolve(&field.schema_type).text));
          }
          w.blank();

          let args: Vec<(String, String)> = all_fields
            .iter()
            .map(|f| (fmt_var(&f.name), fmt_var(&f.name)))
            .collect();
          w.emit(&format!(
            "return [[{class_name} alloc] {}{}];",
            cstor_name(all_fields),
            if args.is_empty() {
              String::new()
            } else {
              format!(":{}", fmt_func_args(&args))
            }
          ));
        }
      },
    );
    w.blank();
  }
}

/// Constructor signature over the given parameter fields. Header mode
/// carries nullability qualifiers on parameter types; implementation mode
/// uses the plain types.
fn cstor_signature(fields: &[&Field], header: bool) -> String {
  let args: Vec<(String, String)> = fields
    .iter()
    .map(|f| {
      let type_text = if header {
        types::resolve_for_declaration(&f.schema_type, f.has_default())
      } else {
        types::resolve(&f.schema_type).text
      };
      (fmt_var(&f.name), type_text)
    })
    .collect();
  let return_type = if header { "nonnull instancetype" } else { "instancetype" };
  fmt_signature(&cstor_name(fields), &fmt_func_args_declaration(&args), return_type, false)
}

/// Renders a field default as the Objective-C expression substituted when
/// the constructor receives `nil`.
pub(crate) fn fmt_default_value(ty: &SchemaType, default: &DefaultValue) -> String {
  match default {
    DefaultValue::Bool(value) => format!("[NSNumber numberWithBool:{}]", if *value { "YES" } else { "NO" }),
    DefaultValue::Int(value) => format!("[NSNumber numberWithInt:{value}]"),
    DefaultValue::Float(value) => format!("[NSNumber numberWithDouble:{value}]"),
    DefaultValue::Str(value) => fmt_string_literal(value),
    DefaultValue::Tag { tag } => {
      let (inner, _) = ty.unwrap_nullable();
      let class = match inner {
        SchemaType::Reference { name } => types::class_name(name),
        _ => String::new(),
      };
      format!("[[{class} alloc] initWith{}]", fmt_camel_upper(tag))
    }
  }
}

/// User-defined class names mentioned anywhere in a type tree.
pub(crate) fn collect_references(ty: &SchemaType, classes: &mut BTreeSet<String>) {
  match ty {
    SchemaType::Reference { name } => {
      classes.insert(fmt_class(name));
    }
    SchemaType::List(list) => collect_references(&list.item, classes),
    SchemaType::Nullable { item } => collect_references(item, classes),
    _ => {}
  }
}

/// The two `ApiSerializable` protocol methods, delegating to the
/// companion serializer class.
pub(crate) fn emit_serializable_funcs(w: &mut CodeWriter, class_name: &str) {
  let obj_args = fmt_func_args_declaration(&[("obj".to_string(), "id".to_string())]);
  w.block(&fmt_signature("serialize", &obj_args, "NSDictionary *", true), |w| {
    w.emit(&format!("return [{class_name}Serializer serialize:obj];"));
  });
  w.blank();

  let dict_args = fmt_func_args_declaration(&[("dict".to_string(), "NSDictionary *".to_string())]);
  w.block(&fmt_signature("deserialize", &dict_args, "id", true), |w| {
    w.emit(&format!("return [{class_name}Serializer deserialize:dict];"));
  });
  w.blank();
}

pub(crate) fn emit_serializable_signatures(w: &mut CodeWriter) {
  let obj_args = fmt_func_args_declaration(&[("obj".to_string(), "id _Nonnull".to_string())]);
  w.emit(&format!(
    "{};",
    fmt_signature("serialize", &obj_args, "NSDictionary * _Nonnull", true)
  ));
  w.blank();

  let dict_args = fmt_func_args_declaration(&[("dict".to_string(), "NSDictionary * _Nonnull".to_string())]);
  w.emit(&format!("{};", fmt_signature("deserialize", &dict_args, "id _Nonnull", true)));
  w.blank();
}

/// The `<Class>Serializer : NSObject` companion interface.
pub(crate) fn emit_serializer_interface(w: &mut CodeWriter, class_name: &str, kind: &str) {
  w.emit("///");
  w.emit(&format!("/// The serialization class for the {class_name} {kind}."));
  w.emit("///");
  w.emit(&format!("@interface {class_name}Serializer : NSObject"));
  w.blank();

  let obj_args = fmt_func_args_declaration(&[("obj".to_string(), format!("{class_name} * _Nonnull"))]);
  w.emit(&format!(
    "{};",
    fmt_signature("serialize", &obj_args, "NSDictionary * _Nonnull", true)
  ));
  w.blank();

  let dict_args = fmt_func_args_declaration(&[("dict".to_string(), "NSDictionary * _Nonnull".to_string())]);
  w.emit(&format!(
    "{};",
    fmt_signature("deserialize", &dict_args, &format!("{class_name} * _Nonnull"), true)
  ));
  w.blank();

  w.emit("@end");
}
