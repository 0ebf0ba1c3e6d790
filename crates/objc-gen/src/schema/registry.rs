//! Name resolution and input-contract validation over a loaded schema.
//!
//! The registry indexes every data type by its namespace-qualified name,
//! resolves type references and supertype chains, computes `all_fields` for
//! structs, and checks the documented schema invariants once, before any
//! code is emitted.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::{
  SchemaError,
  model::{DataType, DefaultValue, Field, Schema, SchemaType, StructDef, UnionDef},
};

#[derive(Clone, Copy)]
struct Entry<'a> {
  namespace: &'a str,
  data_type: &'a DataType,
}

/// An index of every data type in a schema, keyed by `namespace.name`.
pub struct Registry<'a> {
  types: IndexMap<String, Entry<'a>>,
}

fn qualified(namespace: &str, name: &str) -> String {
  if name.contains('.') {
    name.to_string()
  } else {
    format!("{namespace}.{name}")
  }
}

impl<'a> Registry<'a> {
  /// Indexes the schema's data types, rejecting duplicate qualified names.
  pub fn build(schema: &'a Schema) -> Result<Self, SchemaError> {
    let mut types = IndexMap::new();

    for namespace in &schema.namespaces {
      for data_type in &namespace.data_types {
        let key = qualified(&namespace.name, data_type.name());
        let entry = Entry {
          namespace: &namespace.name,
          data_type,
        };
        if types.insert(key.clone(), entry).is_some() {
          return Err(SchemaError::DuplicateDataType(key));
        }
      }
    }

    Ok(Self { types })
  }

  /// Resolves a type reference from the given namespace.
  ///
  /// Qualified names (`ns.Name`) resolve directly; bare names resolve within
  /// the referencing namespace.
  pub fn resolve(&self, namespace: &str, name: &str) -> Result<&'a DataType, SchemaError> {
    self.entry(namespace, name).map(|entry| entry.data_type)
  }

  fn entry(&self, namespace: &str, name: &str) -> Result<Entry<'a>, SchemaError> {
    self
      .types
      .get(&qualified(namespace, name))
      .copied()
      .ok_or_else(|| SchemaError::UnknownTypeReference {
        namespace: namespace.to_string(),
        name: name.to_string(),
      })
  }

  /// The supertype chain of a struct, root-most first, excluding the struct
  /// itself. Each element carries the namespace the struct was declared in.
  fn supertype_chain(&self, namespace: &str, def: &'a StructDef) -> Result<Vec<(&'a str, &'a StructDef)>, SchemaError> {
    let mut chain = Vec::new();
    let mut visited = HashSet::new();
    visited.insert(qualified(namespace, &def.name));

    let mut current_ns = namespace;
    let mut current = def;
    while let Some(parent_name) = &current.extends {
      let entry = self.entry(current_ns, parent_name)?;
      let DataType::Struct(parent) = entry.data_type else {
        return Err(SchemaError::SupertypeNotStruct {
          child: current.name.clone(),
          parent: parent_name.clone(),
        });
      };
      if !visited.insert(qualified(entry.namespace, &parent.name)) {
        return Err(SchemaError::CircularInheritance(parent.name.clone()));
      }
      chain.push((entry.namespace, parent));
      current_ns = entry.namespace;
      current = parent;
    }

    chain.reverse();
    Ok(chain)
  }

  /// Inherited fields followed by own fields, in declaration order.
  pub fn all_fields(&self, namespace: &str, def: &'a StructDef) -> Result<Vec<&'a Field>, SchemaError> {
    let mut fields = Vec::new();
    for (_, ancestor) in self.supertype_chain(namespace, def)? {
      fields.extend(ancestor.fields.iter());
    }
    fields.extend(def.fields.iter());
    Ok(fields)
  }

  /// Checks every documented invariant of the input contract.
  pub fn validate(&self) -> Result<(), SchemaError> {
    for entry in self.types.values() {
      match entry.data_type {
        DataType::Struct(def) => self.validate_struct(entry.namespace, def)?,
        DataType::Union(def) => self.validate_union(entry.namespace, def)?,
      }
    }
    Ok(())
  }

  fn validate_struct(&self, namespace: &str, def: &'a StructDef) -> Result<(), SchemaError> {
    let all_fields = self.all_fields(namespace, def)?;

    let mut seen = HashSet::new();
    for field in &all_fields {
      if !seen.insert(field.name.as_str()) {
        return Err(SchemaError::DuplicateField {
          data_type: def.name.clone(),
          field: field.name.clone(),
        });
      }
    }

    for field in &def.fields {
      self.check_field_type(namespace, &def.name, field, &field.schema_type, false)?;
      self.check_default(namespace, &def.name, field)?;
    }

    self.validate_subtypes(namespace, def)
  }

  fn validate_subtypes(&self, namespace: &str, def: &'a StructDef) -> Result<(), SchemaError> {
    let root_key = qualified(namespace, &def.name);
    let mut tags = HashSet::new();

    for subtype in &def.subtypes {
      if !tags.insert(subtype.tag.as_str()) {
        return Err(SchemaError::DuplicateSubtypeTag {
          data_type: def.name.clone(),
          tag: subtype.tag.clone(),
        });
      }

      let entry = self.entry(namespace, &subtype.type_name)?;
      let derived = match entry.data_type {
        DataType::Struct(sub) => self
          .supertype_chain(entry.namespace, sub)?
          .iter()
          .any(|(ns, ancestor)| qualified(ns, &ancestor.name) == root_key),
        DataType::Union(_) => false,
      };
      if !derived {
        return Err(SchemaError::SubtypeNotDerived {
          root: def.name.clone(),
          subtype: subtype.type_name.clone(),
        });
      }
    }

    Ok(())
  }

  fn validate_union(&self, namespace: &str, def: &'a UnionDef) -> Result<(), SchemaError> {
    if def.variants.is_empty() {
      return Err(SchemaError::EmptyUnion(def.name.clone()));
    }

    let mut seen = HashSet::new();
    for variant in &def.variants {
      if !seen.insert(variant.name.as_str()) {
        return Err(SchemaError::DuplicateVariant {
          union_name: def.name.clone(),
          variant: variant.name.clone(),
        });
      }
      self.check_field_type(namespace, &def.name, variant, &variant.schema_type, true)?;
    }

    Ok(())
  }

  fn check_field_type(
    &self,
    namespace: &str,
    data_type: &str,
    field: &Field,
    ty: &SchemaType,
    allow_void: bool,
  ) -> Result<(), SchemaError> {
    match ty {
      SchemaType::Nullable { item } => {
        if matches!(item.as_ref(), SchemaType::Nullable { .. }) {
          return Err(SchemaError::NestedNullable {
            data_type: data_type.to_string(),
            field: field.name.clone(),
          });
        }
        self.check_field_type(namespace, data_type, field, item, false)
      }
      SchemaType::List(list) => self.check_field_type(namespace, data_type, field, &list.item, false),
      SchemaType::Void if !allow_void => Err(SchemaError::VoidField {
        data_type: data_type.to_string(),
        field: field.name.clone(),
      }),
      SchemaType::Reference { name } => self.entry(namespace, name).map(|_| ()),
      _ => Ok(()),
    }
  }

  fn check_default(&self, namespace: &str, data_type: &str, field: &Field) -> Result<(), SchemaError> {
    let Some(default) = &field.default else {
      return Ok(());
    };

    let (ty, _) = field.schema_type.unwrap_nullable();
    let compatible = match (ty, default) {
      (SchemaType::Boolean, DefaultValue::Bool(_)) => true,
      (SchemaType::Float32(_) | SchemaType::Float64(_), DefaultValue::Float(_) | DefaultValue::Int(_)) => true,
      (numeric, DefaultValue::Int(_)) if numeric.numeric_constraints().is_some() => true,
      (SchemaType::String(_), DefaultValue::Str(_)) => true,
      (SchemaType::Reference { name }, DefaultValue::Tag { tag }) => match self.entry(namespace, name)?.data_type {
        DataType::Union(union) => union
          .variants
          .iter()
          .any(|variant| variant.name == *tag && variant.schema_type.is_void()),
        DataType::Struct(_) => false,
      },
      _ => false,
    };

    if compatible {
      Ok(())
    } else {
      Err(SchemaError::IncompatibleDefault {
        data_type: data_type.to_string(),
        field: field.name.clone(),
      })
    }
  }
}
