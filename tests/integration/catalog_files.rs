//! Catalog loading from definition files

use tempfile::TempDir;

use uplink::catalog::{Catalog, CatalogError, CommandRole, DEFAULT_ARGUMENT_BLOCK_PREFIX};

use super::helpers::*;

#[test]
fn test_load_json_library() {
    let catalog = load_library();

    assert_eq!(catalog.len(), 4);
    assert_eq!(
        catalog.lookup("CMD210").unwrap().role,
        CommandRole::Standalone {
            int_token: "210".to_string()
        }
    );
    assert!(catalog.lookup("CMD000MODE").unwrap().is_argument_block());
    assert_eq!(
        catalog.lookup("CMD100").unwrap().example.as_deref(),
        Some("CMD100 45")
    );
}

#[test]
fn test_load_yaml_and_toml_libraries_agree() {
    let dir = TempDir::new().unwrap();
    let yaml = write_file(
        dir.path(),
        "library.yml",
        r#"
- ID: CMD100
  Name: Point Antenna
  Family: ADCS
  Int: 100
  Parameters:
    - Name: angle
      Type: Number
- ID: CMD000A
  Name: Args
  Family: Arguments
"#,
    );
    let toml = write_file(
        dir.path(),
        "library.toml",
        r#"
[[commands]]
ID = "CMD100"
Name = "Point Antenna"
Family = "ADCS"
Int = 100

[[commands.Parameters]]
Name = "angle"
Type = "Number"

[[commands]]
ID = "CMD000A"
Name = "Args"
Family = "Arguments"
"#,
    );

    let from_yaml = Catalog::load(&yaml, DEFAULT_ARGUMENT_BLOCK_PREFIX).unwrap();
    let from_toml = Catalog::load(&toml, DEFAULT_ARGUMENT_BLOCK_PREFIX).unwrap();

    let yaml_specs: Vec<_> = from_yaml.iter().cloned().collect();
    let toml_specs: Vec<_> = from_toml.iter().cloned().collect();
    assert_eq!(yaml_specs, toml_specs);
    assert_eq!(from_yaml.lookup("CMD100").unwrap().int_token(), Some("100"));
}

#[test]
fn test_load_reports_every_validation_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "broken.json",
        r#"[
            {"ID": "CMD1", "Name": "No token"},
            {"ID": "CMD2", "Name": "Two", "Int": "2",
             "Parameters": [{"Name": "mode", "Type": "Dropdown"}]},
            {"ID": "CMD2", "Name": "Again", "Int": "2"}
        ]"#,
    );

    let err = Catalog::load(&path, DEFAULT_ARGUMENT_BLOCK_PREFIX).unwrap_err();

    let catalog_err = err
        .downcast_ref::<CatalogError>()
        .expect("validation failure should carry a CatalogError");
    match catalog_err {
        CatalogError::Validation(errors) => assert_eq!(errors.len(), 3),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(format!("{err:#}").contains("broken.json"));
}

#[test]
fn test_load_missing_file_and_bad_extension() {
    let dir = TempDir::new().unwrap();

    let missing = Catalog::load(&dir.path().join("nope.json"), DEFAULT_ARGUMENT_BLOCK_PREFIX);
    assert!(format!("{:#}", missing.unwrap_err()).contains("Failed to read catalog file"));

    let csv = write_file(dir.path(), "library.csv", "ID,Name");
    let unsupported = Catalog::load(&csv, DEFAULT_ARGUMENT_BLOCK_PREFIX);
    assert!(unsupported
        .unwrap_err()
        .to_string()
        .contains("Unsupported catalog format"));
}

#[test]
fn test_load_malformed_json_mentions_path() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "library.json", "[{\"ID\": ");

    let err = Catalog::load(&path, DEFAULT_ARGUMENT_BLOCK_PREFIX).unwrap_err();

    assert!(err.to_string().contains("Failed to parse catalog file"));
    assert!(err.to_string().contains("library.json"));
}
