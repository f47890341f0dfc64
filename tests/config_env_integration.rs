use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

use derp_move::config::{self, LoadResult, CONFIG_ENV};
use serial_test::serial;
use tempfile::tempdir;

// Env mutation is process-global, hence #[serial] on every test here.
fn with_config_env<T>(value: &OsStr, f: impl FnOnce() -> T) -> T {
    unsafe { std::env::set_var(CONFIG_ENV, value) };
    let out = f();
    unsafe { std::env::remove_var(CONFIG_ENV) };
    out
}

#[test]
#[serial]
fn config_path_prefers_env() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("elsewhere.xml");
    let resolved = with_config_env(cfg.as_os_str(), || config::config_path().unwrap());
    assert_eq!(resolved, cfg);
}

#[test]
#[serial]
fn load_or_init_reads_the_env_file() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("config.xml");
    fs::write(
        &cfg,
        "<config>\n  <source_base>/srv/in</source_base>\n  <target_base>/srv/out</target_base>\n</config>\n",
    )
    .unwrap();

    let loaded = with_config_env(cfg.as_os_str(), || config::load_or_init().unwrap());
    match loaded {
        LoadResult::Loaded(s) => {
            assert_eq!(s.source_base, Some(PathBuf::from("/srv/in")));
            assert_eq!(s.target_base, Some(PathBuf::from("/srv/out")));
        }
        other => panic!("expected Loaded, got {other:?}"),
    }
}

#[test]
#[serial]
fn load_or_init_refuses_missing_env_file() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("ghost.xml");

    let err = with_config_env(cfg.as_os_str(), || config::load_or_init().unwrap_err());
    assert!(format!("{err}").contains("does not exist"));
}
