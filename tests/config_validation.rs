use std::fs;

use derp_move::{Config, DerpMoveError};
use tempfile::tempdir;

#[test]
fn valid_bases_pass() {
    let td = tempdir().unwrap();
    let source = td.path().join("staging");
    let target = td.path().join("sorted");
    fs::create_dir_all(&source).unwrap();
    fs::create_dir_all(&target).unwrap();

    Config::new(&source, &target).validate().unwrap();
}

#[test]
fn missing_source_is_not_found() {
    let td = tempdir().unwrap();
    let target = td.path().join("sorted");
    fs::create_dir_all(&target).unwrap();

    let err = Config::new(td.path().join("nope"), &target)
        .validate()
        .unwrap_err();
    let dm = err.downcast_ref::<DerpMoveError>().expect("typed error");
    assert_eq!(dm.code(), "not_found");
}

/// The target base is never created on the user's behalf.
#[test]
fn missing_target_is_an_error_and_stays_missing() {
    let td = tempdir().unwrap();
    let source = td.path().join("staging");
    fs::create_dir_all(&source).unwrap();
    let target = td.path().join("sorted");

    let err = Config::new(&source, &target).validate().unwrap_err();
    let dm = err.downcast_ref::<DerpMoveError>().expect("typed error");
    assert_eq!(dm.code(), "not_found");
    assert!(!target.exists(), "validation must not create the target");
}

#[test]
fn target_must_be_a_directory() {
    let td = tempdir().unwrap();
    let source = td.path().join("staging");
    fs::create_dir_all(&source).unwrap();
    let target = td.path().join("sorted");
    fs::write(&target, b"i am a file").unwrap();

    let err = Config::new(&source, &target).validate().unwrap_err();
    assert!(format!("{err}").contains("not a directory"));
}

#[test]
fn identical_bases_are_rejected() {
    let td = tempdir().unwrap();
    let base = td.path().join("both");
    fs::create_dir_all(&base).unwrap();

    let err = Config::new(&base, &base).validate().unwrap_err();
    assert!(format!("{err}").contains("same path"));
}

#[test]
fn nested_bases_are_rejected() {
    let td = tempdir().unwrap();
    let source = td.path().join("staging");
    let target = source.join("inside");
    fs::create_dir_all(&target).unwrap();

    let err = Config::new(&source, &target).validate().unwrap_err();
    assert!(format!("{err}").contains("must not be inside"));
}
