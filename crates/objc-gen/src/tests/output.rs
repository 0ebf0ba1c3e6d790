//! Filesystem output behavior of the generate command.

use std::path::PathBuf;

use crate::generator::orchestrator::GeneratedFile;
use crate::ui::commands::GenerateConfig;

fn config(output: PathBuf) -> GenerateConfig {
  GenerateConfig {
    input: PathBuf::from("schema.json"),
    output,
    verbose: false,
    quiet: true,
  }
}

#[tokio::test]
async fn test_write_files_creates_namespace_directories() {
  let dir = tempfile::tempdir().unwrap();
  let files = vec![
    GeneratedFile {
      path: PathBuf::from("ApiObjects/Files/FileMetadata.h"),
      contents: "@interface FileMetadata\n".to_string(),
    },
    GeneratedFile {
      path: PathBuf::from("ApiObjects/Files/FileMetadata.m"),
      contents: "@implementation FileMetadata\n".to_string(),
    },
    GeneratedFile {
      path: PathBuf::from("ApiObjects/Sharing/SharedLink.h"),
      contents: "@interface SharedLink\n".to_string(),
    },
  ];

  config(dir.path().to_path_buf()).write_files(&files).await.unwrap();

  for file in &files {
    let written = std::fs::read_to_string(dir.path().join(&file.path)).unwrap();
    assert_eq!(written, file.contents);
  }
}

#[tokio::test]
async fn test_write_files_overwrites_stale_output() {
  let dir = tempfile::tempdir().unwrap();
  let file = GeneratedFile {
    path: PathBuf::from("ApiObjects/Files/WriteMode.h"),
    contents: "fresh\n".to_string(),
  };

  let config = config(dir.path().to_path_buf());
  std::fs::create_dir_all(dir.path().join("ApiObjects/Files")).unwrap();
  std::fs::write(dir.path().join(&file.path), "stale\n").unwrap();

  config.write_files(std::slice::from_ref(&file)).await.unwrap();

  let written = std::fs::read_to_string(dir.path().join(&file.path)).unwrap();
  assert_eq!(written, "fresh\n");
}
