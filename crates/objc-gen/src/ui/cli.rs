use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "objc-gen")]
#[command(author, version, about = "Schema to Objective-C typed-class generator")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from a schema document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate Objective-C classes from a schema document
  Generate(GenerateCommand),
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path to the schema JSON document
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Directory the generated Objective-C sources are written under
  #[arg(short, long, value_name = "DIR")]
  pub output: PathBuf,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all data types defined in the schema document
  DataTypes {
    /// Path to the schema JSON document
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}
