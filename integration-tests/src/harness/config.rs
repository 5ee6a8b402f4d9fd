use blip_core::config::StaticFilesConfig;
use std::path::PathBuf;

/// Absolute path of a directory under `integration-tests/fixtures`.
pub fn fixture_dir(fixture: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture);

    assert!(
        dir.is_dir(),
        "fixture directory does not exist: {:?}",
        dir
    );

    dir
}

/// Static file config rooted at a fixture directory, all other settings default.
pub fn fixture_config(fixture: &str) -> StaticFilesConfig {
    StaticFilesConfig {
        root: fixture_dir(fixture),
        ..StaticFilesConfig::default()
    }
}
