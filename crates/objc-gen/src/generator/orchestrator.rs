//! Orchestration for the schema to Objective-C code generation pipeline.
//!
//! The `Orchestrator` hides the registry, emitters, and file layout behind a
//! single entry point that CLI tools or library users call.
//!
//! ## Usage
//!
//! ```no_run
//! use objc_gen::generator::orchestrator::Orchestrator;
//! use objc_gen::schema::Schema;
//!
//! # fn example() -> anyhow::Result<()> {
//! let schema_json = std::fs::read_to_string("schema.json")?;
//! let schema = Schema::from_json(&schema_json)?;
//!
//! let orchestrator = Orchestrator::new(schema);
//! let (files, stats) = orchestrator.generate()?;
//!
//! println!("Generated {} files with {} warnings", files.len(), stats.warnings.len());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::generator::codegen::{structs::StructGenerator, unions::UnionGenerator};
use crate::generator::naming::identifiers::{fmt_camel_upper, fmt_class};
use crate::schema::{DataType, Registry, Schema};

/// Every emitted file opens with this banner.
const FILE_BANNER: &str = "///\n/// Auto-generated by objc-gen; do not modify.\n///\n\n";

/// One generated output unit, addressed relative to the output root.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
  pub path: PathBuf,
  pub contents: String,
}

/// Statistics about the code generation process.
#[derive(Debug, Default)]
pub struct GenerationStats {
  /// Number of namespaces processed
  pub namespaces: usize,
  /// Number of struct classes generated
  pub structs_generated: usize,
  /// Number of union classes generated
  pub unions_generated: usize,
  /// Number of output files produced
  pub files_generated: usize,
  /// Non-fatal warnings; each names the data type it came from
  pub warnings: Vec<String>,
}

/// High-level orchestrator for schema to Objective-C code generation.
pub struct Orchestrator {
  schema: Schema,
}

impl Orchestrator {
  pub fn new(schema: Schema) -> Self {
    Self { schema }
  }

  /// Generates the full file set for the schema.
  ///
  /// The registry is built and validated once up front; invariant
  /// violations abort the run. Per-type emission failures downgrade to
  /// warnings so one bad data type does not sink the namespace.
  ///
  /// # Errors
  ///
  /// Returns an error if the schema violates its input contract
  /// (duplicate types, unresolvable references, malformed hierarchies).
  pub fn generate(&self) -> anyhow::Result<(Vec<GeneratedFile>, GenerationStats)> {
    let registry = Registry::build(&self.schema)?;
    registry.validate()?;

    let mut files = Vec::new();
    let mut stats = GenerationStats::default();

    for namespace in &self.schema.namespaces {
      stats.namespaces += 1;
      let dir = PathBuf::from("ApiObjects").join(fmt_camel_upper(&namespace.name));

      for data_type in &namespace.data_types {
        let class_name = fmt_class(data_type.name());

        let generated = match data_type {
          DataType::Struct(def) => {
            let generator = StructGenerator::new(&registry, &namespace.name, def);
            generator
              .generate_header()
              .and_then(|header| generator.generate_implementation().map(|body| (header, body)))
          }
          DataType::Union(def) => {
            let generator = UnionGenerator::new(def);
            Ok((generator.generate_header(), generator.generate_implementation()))
          }
        };

        match generated {
          Ok((header, implementation)) => {
            match data_type {
              DataType::Struct(_) => stats.structs_generated += 1,
              DataType::Union(_) => stats.unions_generated += 1,
            }
            files.push(GeneratedFile {
              path: dir.join(format!("{class_name}.h")),
              contents: format!("{FILE_BANNER}{header}"),
            });
            files.push(GeneratedFile {
              path: dir.join(format!("{class_name}.m")),
              contents: format!("{FILE_BANNER}{implementation}"),
            });
            stats.files_generated += 2;
          }
          Err(err) => {
            stats
              .warnings
              .push(format!("skipped {}.{}: {err}", namespace.name, data_type.name()));
          }
        }
      }
    }

    Ok((files, stats))
  }
}
