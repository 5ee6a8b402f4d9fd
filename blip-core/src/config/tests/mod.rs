use crate::config::{BlipConfig, ConfigError, DEFAULT_LISTEN, LogFormat};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn empty_config_uses_defaults() {
    let cfg: BlipConfig = "".parse().unwrap();

    assert_eq!(cfg.server.listen, DEFAULT_LISTEN);
    assert_eq!(cfg.server.pid_file, None);
    assert_eq!(cfg.static_files.root, PathBuf::from("."));
    assert_eq!(cfg.static_files.index_file, "index.html");
    assert!(!cfg.static_files.confine_to_root);
    assert_eq!(cfg.logging.level, "info");
    assert_eq!(cfg.logging.format, None);
}

#[test]
fn parses_all_sections() {
    let cfg: BlipConfig = r#"
        [server]
        listen = "127.0.0.1:8080"
        pid_file = "/tmp/blip.pid"

        [static_files]
        root = "/srv/www"
        index_file = "home.html"
        confine_to_root = true

        [logging]
        level = "debug"
        format = "json"
    "#
    .parse()
    .unwrap();

    assert_eq!(cfg.listen_addr().unwrap().port(), 8080);
    assert_eq!(cfg.server.pid_file.as_deref(), Some("/tmp/blip.pid"));
    assert_eq!(cfg.static_files.root, PathBuf::from("/srv/www"));
    assert_eq!(cfg.static_files.index_file, "home.html");
    assert!(cfg.static_files.confine_to_root);
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.format, Some(LogFormat::Json));
}

#[test]
fn rejects_unparseable_listen_address() {
    let err = r#"
        [server]
        listen = "localhost"
    "#
    .parse::<BlipConfig>()
    .unwrap_err();

    assert!(matches!(err, ConfigError::InvalidListen { .. }), "{err:?}");
}

#[test]
fn rejects_index_file_with_separators() {
    for index_file in ["", "../index.html", "public/index.html", "/index.html"] {
        let toml = format!("[static_files]\nindex_file = {index_file:?}\n");

        let err = toml.parse::<BlipConfig>().unwrap_err();

        assert!(
            matches!(err, ConfigError::InvalidIndexFile { .. }),
            "expected InvalidIndexFile for {index_file:?}, got {err:?}"
        );
    }
}

#[test]
fn rejects_unknown_fields() {
    let err = r#"
        [server]
        port = 6703
    "#
    .parse::<BlipConfig>()
    .unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }), "{err:?}");
}

#[test]
fn from_file_reports_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = BlipConfig::from_file(&path).unwrap_err();

    match err {
        ConfigError::ReadFile { path: p, .. } => assert_eq!(p, path),
        other => panic!("Expected ReadFile, got {other:?}"),
    }
}

#[test]
fn from_file_reads_and_validates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blip.toml");
    fs::write(&path, "[server]\nlisten = \"127.0.0.1:0\"\n").unwrap();

    let cfg = BlipConfig::from_file(&path).unwrap();

    assert_eq!(cfg.listen_addr().unwrap().port(), 0);
}
