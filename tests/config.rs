//! Configuration system tests
//!
//! Tests for config paths and grid config parsing.

use tabula::config::GridConfig;
use tabula::config_paths;
use tabula::grid::{shape_rows, Column, EditPolicy, RowId};
use tabula::model::AppModel;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("tabula"));
}

#[test]
fn test_config_file_is_yaml() {
    let file = config_paths::config_file().unwrap();
    assert_eq!(file.file_name().unwrap(), "config.yaml");
    assert_eq!(file.parent(), config_paths::config_dir().as_deref());
}

#[test]
fn test_logs_dir_inside_config_dir() {
    let logs = config_paths::logs_dir().unwrap();
    assert!(logs.starts_with(config_paths::config_dir().unwrap()));
    assert!(logs.ends_with("logs"));
}

// ========================================================================
// Grid Config Tests
// ========================================================================

#[test]
fn test_empty_document_is_all_defaults() {
    assert_eq!(GridConfig::from_yaml("{}").unwrap(), GridConfig::default());
}

#[test]
fn test_config_sizes_flow_into_windows() {
    let config = GridConfig::from_yaml("row_height: 40\nviewport_height: 400\noverscan: 2\n")
        .unwrap();
    let model = AppModel::new(config);
    let window = model.grid.active_window();

    assert_eq!(window.item_size(), 40.0);
    assert_eq!(window.viewport_height(), 400.0);
    assert_eq!(window.overscan(), 2);
}

#[test]
fn test_strict_edit_policy_unmarks_restored_cells() {
    let config = GridConfig::from_yaml("edit_policy: differs-from-original").unwrap();
    assert_eq!(config.edit_policy, EditPolicy::DiffersFromOriginal);

    let mut model = AppModel::new(config);
    let row = ["Dune", "Frank Herbert", "Fiction", "1965", "1"];
    model.grid.load(shape_rows([row.map(String::from)]));

    model.grid.edit_cell(RowId(0), Column::Title, "Dune!");
    assert!(model.grid.is_edited(RowId(0), Column::Title));

    model.grid.edit_cell(RowId(0), Column::Title, "Dune");
    assert!(!model.grid.is_edited(RowId(0), Column::Title));
}
