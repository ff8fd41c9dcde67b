use std::io::Write;

use pretty_assertions::assert_eq;
use standardizer_catalog::{Catalog, CatalogError, CatalogSettings};

const CUSTOM: &str = r#"{
  "schema_version": 1,
  "categories": [
    {
      "id": "ASEO",
      "name": "Aseo",
      "description": "Productos de Limpieza",
      "keywords": ["cloro", "detergente"],
      "format": "{producto} {presentacion}",
      "fields": [
        { "name": "producto", "required": true, "kind": "free_text" },
        { "name": "presentacion", "required": false, "kind": "free_text" }
      ]
    }
  ]
}"#;

#[test]
fn loads_catalog_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CUSTOM.as_bytes()).unwrap();

    let catalog = Catalog::from_file(file.path()).unwrap();
    assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["ASEO"]);
    assert_eq!(
        catalog.get("aseo").unwrap().keywords(),
        ["CLORO", "DETERGENTE"]
    );
}

#[test]
fn settings_load_the_configured_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("categories.json");
    std::fs::write(&path, CUSTOM).unwrap();

    let catalog = CatalogSettings::with_path(&path).load().unwrap();
    assert_eq!(catalog.len(), 1);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = CatalogSettings::with_path(&path).load().unwrap_err();
    match err {
        CatalogError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_file_is_rejected_not_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("categories.toml");
    std::fs::write(&path, "schema_version = 1\n").unwrap();

    let err = Catalog::from_file(&path).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyCatalog), "{err}");
}
