use super::*;

fn global(config: Option<String>, database: Option<&str>) -> GlobalArgs {
    GlobalArgs {
        verbose: false,
        config,
        database: database.map(String::from),
    }
}

#[test]
fn test_column_widths_use_widest_cell() {
    let widths = calculate_column_widths(
        &["ID", "NAME"],
        &[
            vec!["1".into(), "bulbasaur".into()],
            vec!["151".into(), "mew".into()],
        ],
    );
    assert_eq!(widths, vec![3, 9]);
}

#[test]
fn test_format_table_layout() {
    let lines = format_table(&["ID", "NAME"], &[vec!["25".into(), "pikachu".into()]]);
    assert_eq!(lines, vec!["ID  NAME", "--  -------", "25  pikachu"]);
}

#[test]
fn test_cell_renders_missing_as_dash() {
    assert_eq!(cell(Some(42)), "42");
    assert_eq!(cell::<i64>(None), "-");
}

#[test]
fn test_load_config_database_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dex.yml");
    std::fs::write(&path, "database:\n  path: from-file.duckdb\n").unwrap();

    let from_file = load_config(&global(Some(path.display().to_string()), None)).unwrap();
    assert_eq!(from_file.database.path, "from-file.duckdb");

    let overridden = load_config(&global(
        Some(path.display().to_string()),
        Some("flag.duckdb"),
    ))
    .unwrap();
    assert_eq!(overridden.database.path, "flag.duckdb");
}

#[test]
fn test_load_config_missing_explicit_file_fails() {
    let err = load_config(&global(Some("/nonexistent/dex.yml".into()), None)).unwrap_err();
    assert!(format!("{err:#}").contains("C001"));
}

#[test]
fn test_open_loaded_store_hints_load() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.database.path = dir.path().join("none.duckdb").display().to_string();

    let err = open_loaded_store(&config).unwrap_err();
    assert!(err.to_string().contains("dex load"));
}
