use std::io::Cursor;

use unitypack_fs::{Error, ensure_dir, move_file, write_exact};
use tempfile::tempdir;

#[test]
fn write_then_move_into_tree() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("out");
    ensure_dir(&root).unwrap();

    let placeholder = root.join("0a1b2c");
    write_exact(&placeholder, Cursor::new(vec![7u8; 1024]), 1024).unwrap();

    let target = root.join("Assets/Textures/Rock.png");
    move_file(&placeholder, &target).unwrap();

    assert!(!placeholder.exists());
    assert_eq!(std::fs::metadata(&target).unwrap().len(), 1024);
}

#[test]
fn move_fails_when_parent_is_a_file() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    let blocker = dir.path().join("blocker");
    std::fs::write(&src, "data").unwrap();
    std::fs::write(&blocker, "file").unwrap();

    let err = move_file(&src, blocker.join("dest")).unwrap_err();
    assert!(matches!(&err, Error::CreateDir { path, .. } if path == &blocker));
    assert!(src.exists());
}
