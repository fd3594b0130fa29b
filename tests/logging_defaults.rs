use std::{fs, path::Path, thread::sleep, time::Duration};

use tempfile::tempdir;

#[test]
fn bare_file_name_logs_to_current_dir_and_ignores_rust_log() {
    let dir = tempdir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    std::env::set_var("RUST_LOG", "trace");

    tab_launcher::logging::init(false, Some(Path::new("launcher.log")));
    tracing::debug!("hidden detail");
    tracing::info!("session started");

    sleep(Duration::from_millis(100));

    let contents =
        fs::read_to_string(dir.path().join("launcher.log")).expect("log file was not created");
    assert!(contents.contains("session started"));
    assert!(!contents.contains("hidden detail"));
}
