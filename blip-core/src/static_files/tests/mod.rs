
use crate::config::StaticFilesConfig;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Scratch root with an index, a few assets and two subdirectories:
/// `sub/` has an index file, `empty/` does not.
pub(super) fn fixture_root() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("index.html"), "<h1>root</h1>").unwrap();
    fs::write(root.join("app.js"), "console.log('blip');").unwrap();
    fs::write(root.join("style.css"), "body { color: red; }").unwrap();
    fs::write(root.join("photo.png"), [0x89, b'P', b'N', b'G', 0, 1, 2, 3]).unwrap();

    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub/index.html"), "<h1>sub</h1>").unwrap();

    fs::create_dir(root.join("empty")).unwrap();

    dir
}

pub(super) fn config_for(root: &Path) -> StaticFilesConfig {
    StaticFilesConfig {
        root: root.to_path_buf(),
        ..StaticFilesConfig::default()
    }
}
