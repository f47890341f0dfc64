use std::fs;
use std::path::PathBuf;

use derp_move::{move_pair, DerpMoveError, FilePair};
use tempfile::tempdir;

fn pair(old: PathBuf, new: PathBuf) -> FilePair {
    FilePair {
        old_path: old,
        new_path: new,
    }
}

/// Happy path: after the move the source is gone and the destination holds
/// the original bytes.
#[test]
fn move_pair_happy_path() {
    let src_dir = tempdir().unwrap();
    let dst_dir = tempdir().unwrap();
    let old = src_dir.path().join("note.txt");
    let new = dst_dir.path().join("note_derp_i_moved_this_thing.txt");
    fs::write(&old, b"derp_move test content\n").unwrap();

    move_pair(&pair(old.clone(), new.clone())).expect("move should succeed");

    assert!(!old.exists(), "source should be removed");
    assert_eq!(fs::read(&new).unwrap(), b"derp_move test content\n");
}

#[test]
fn occupied_destination_is_a_collision() {
    let src_dir = tempdir().unwrap();
    let dst_dir = tempdir().unwrap();
    let old = src_dir.path().join("a.txt");
    let new = dst_dir.path().join("a_derp_i_moved_this_thing.txt");
    fs::write(&old, b"new bytes").unwrap();
    fs::write(&new, b"already here").unwrap();

    let err = move_pair(&pair(old.clone(), new.clone())).unwrap_err();
    let dm = err.downcast_ref::<DerpMoveError>().expect("typed error");
    assert_eq!(dm.code(), "collision");

    // Nothing was touched.
    assert_eq!(fs::read(&old).unwrap(), b"new bytes");
    assert_eq!(fs::read(&new).unwrap(), b"already here");
}

#[test]
fn missing_destination_parent_is_not_found() {
    let src_dir = tempdir().unwrap();
    let dst_dir = tempdir().unwrap();
    let old = src_dir.path().join("a.txt");
    let new = dst_dir
        .path()
        .join("never_created")
        .join("a_derp_i_moved_this_thing.txt");
    fs::write(&old, b"data").unwrap();

    let err = move_pair(&pair(old.clone(), new)).unwrap_err();
    let dm = err.downcast_ref::<DerpMoveError>().expect("typed error");
    assert_eq!(dm.code(), "not_found");
    assert!(old.exists(), "source must survive the failed move");
}

#[test]
fn missing_source_is_not_found() {
    let src_dir = tempdir().unwrap();
    let dst_dir = tempdir().unwrap();
    let old = src_dir.path().join("vanished.txt");
    let new = dst_dir.path().join("vanished_derp_i_moved_this_thing.txt");

    let err = move_pair(&pair(old, new.clone())).unwrap_err();
    let dm = err.downcast_ref::<DerpMoveError>().expect("typed error");
    assert_eq!(dm.code(), "not_found");
    assert!(!new.exists());
}
