//! Tests for the file-backed host.

use logsweep::{FileHost, LogHost, TransportOverrides};
use tempfile::tempdir;

#[test]
fn tracks_the_file_name() {
    let dir = tempdir().unwrap();
    let host = FileHost::new(dir.path().to_string_lossy());

    host.set_file_name("app-20250101.log");
    assert_eq!(
        host.current_file_path(),
        dir.path().join("app-20250101.log")
    );
}

#[test]
fn starts_with_a_dated_name() {
    let dir = tempdir().unwrap();
    let host = FileHost::new(dir.path().to_string_lossy());

    let path = host.current_file_path();
    let name = path.file_name().unwrap().to_string_lossy();
    assert!(name.starts_with("app-"));
    assert!(name.ends_with(".log"));
}

#[test]
fn records_applied_transport() {
    let dir = tempdir().unwrap();
    let host = FileHost::new(dir.path().to_string_lossy());
    assert!(host.transport().is_none());

    host.apply_transport(&TransportOverrides::new().format("{h}:{i} {text}"));
    assert_eq!(
        host.transport().unwrap().format.as_deref(),
        Some("{h}:{i} {text}")
    );
}

#[test]
fn expands_tilde() {
    let host = FileHost::new("~/logs");
    if std::env::var_os("HOME").is_some() {
        assert!(!host.directory().starts_with("~"));
    }
}

#[test]
fn app_host_has_a_directory() {
    let host = FileHost::for_app("logsweep-test");
    assert!(!host.directory().as_os_str().is_empty());
}
