//! Tests for configuration loading.

use std::path::Path;

use phpdoc_typemask::config::PROJECT_CONFIG_FILE;
use phpdoc_typemask::{Config, ConfigError};

#[test]
fn test_defaults() {
    let config = Config::from_toml("", Path::new("empty.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.scan.extensions, vec!["php"]);
    assert!(!config.scan.hidden);
    assert!(config.naming_context().namespace().is_none());
}

#[test]
fn test_full_file() {
    let text = r#"
[naming]
namespace = "\\App\\"

[naming.aliases]
Carbon = "Carbon\\CarbonImmutable"
Str = "\\Illuminate\\Support\\Str"

[scan]
extensions = ["php", "phpt"]
hidden = true
"#;
    let config = Config::from_toml(text, Path::new("phpdoc-typemask.toml")).unwrap();
    assert!(config.scan.hidden);

    let naming = config.naming_context();
    assert_eq!(naming.namespace(), Some("App"));
    assert_eq!(naming.alias("Carbon"), Some("Carbon\\CarbonImmutable"));
    assert_eq!(naming.alias("str"), Some("Illuminate\\Support\\Str"));

    assert!(config.is_php_file(Path::new("src/a.php")));
    assert!(config.is_php_file(Path::new("tests/case.PHPT")));
    assert!(!config.is_php_file(Path::new("README.md")));
    assert!(!config.is_php_file(Path::new("Makefile")));
}

#[test]
fn test_unknown_keys_are_rejected() {
    let err = Config::from_toml("[naming]\nnamspace = \"App\"\n", Path::new("bad.toml"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad.toml"), "{err}");
}

#[test]
fn test_load_prefers_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(PROJECT_CONFIG_FILE),
        "[naming]\nnamespace = \"Project\"\n",
    )
    .unwrap();
    let explicit = dir.path().join("other.toml");
    std::fs::write(&explicit, "[naming]\nnamespace = \"Explicit\"\n").unwrap();

    let config = Config::load(Some(&explicit), dir.path()).unwrap();
    assert_eq!(config.naming.namespace.as_deref(), Some("Explicit"));

    let config = Config::load(None, dir.path()).unwrap();
    assert_eq!(config.naming.namespace.as_deref(), Some("Project"));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(Some(&dir.path().join("nope.toml")), dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
