use std::fs;
use std::io::Read;
use std::sync::Arc;
use std::thread;

use flate2::read::ZlibDecoder;
use minigit_core::object::{Attribution, Commit, Id, Object, Tree, TreeEntry};
use minigit_core::repo::{Error, Repo};
use tempfile::tempdir;

use crate::OnDiskRepo;

const TEST_CONTENT: &[u8; 13] = b"test content\n";

fn inflate(path: &std::path::Path) -> Vec<u8> {
    let compressed = fs::read(path).unwrap();
    let mut raw = Vec::new();
    ZlibDecoder::new(compressed.as_slice())
        .read_to_end(&mut raw)
        .unwrap();
    raw
}

#[test]
fn stores_hello_blob() {
    let temp = tempdir().unwrap();
    let r = OnDiskRepo::init(temp.path()).unwrap();

    let o = Object::blob("hello\n");
    let id = r.put_object(&o).unwrap();
    assert_eq!(id.to_string(), "ce013625030ba8dba906f756967f9e9ca394464a");

    let path = temp
        .path()
        .join(".git/objects/ce/013625030ba8dba906f756967f9e9ca394464a");
    assert!(path.is_file());
    assert_eq!(r.object_path(&id), path);
    assert!(r.has_object(&id).unwrap());

    assert_eq!(inflate(&path), b"blob 6\0hello\n");
}

#[test]
fn round_trips_every_kind() {
    let temp = tempdir().unwrap();
    let r = OnDiskRepo::init(temp.path()).unwrap();

    let blob = Object::blob(TEST_CONTENT.to_vec());
    let tree = Tree::new(vec![TreeEntry::new(
        "test.txt",
        minigit_core::object::FileMode::Normal,
        *blob.id(),
    )
    .unwrap()])
    .unwrap();
    let a = Attribution::new("A U Thor", "author@example.com", 1_142_878_501, 0).unwrap();
    let commit = Commit::new(*tree.id(), a.clone(), a, "message\n");

    for o in &[&blob, tree.object(), commit.object()] {
        let id = r.put_object(o).unwrap();
        assert_eq!(&id, o.id());

        let raw = inflate(&r.object_path(&id));
        let header = o.header();
        assert!(raw.starts_with(&header));
        assert_eq!(&raw[header.len()..], o.content());
    }
}

#[test]
fn large_blob() {
    let temp = tempdir().unwrap();
    let r = OnDiskRepo::init(temp.path()).unwrap();

    let content = "foobar".repeat(1000);
    let o = Object::blob(content.as_bytes());
    let id = r.put_object(&o).unwrap();

    let raw = inflate(&r.object_path(&id));
    assert!(raw.starts_with(b"blob 6000\0"));
    assert_eq!(raw.len(), 6000 + 10);

    // Highly repetitive content compresses well.
    assert!(fs::metadata(r.object_path(&id)).unwrap().len() < 100);
}

#[test]
fn existing_object_is_not_rewritten() {
    let temp = tempdir().unwrap();
    let r = OnDiskRepo::init(temp.path()).unwrap();

    let mut object_path = temp.path().join(".git/objects/d6");
    fs::create_dir(&object_path).unwrap();

    object_path.push("70460b4b4aece5915caf5c68d12f560a9fe3e4");
    fs::write(&object_path, "sand in the gears").unwrap();

    let o = Object::blob(TEST_CONTENT.to_vec());
    let id = r.put_object(&o).unwrap();

    assert_eq!(id.to_string(), "d670460b4b4aece5915caf5c68d12f560a9fe3e4");
    assert_eq!(fs::read(&object_path).unwrap(), b"sand in the gears");
}

#[test]
fn storing_twice_is_harmless() {
    let temp = tempdir().unwrap();
    let r = OnDiskRepo::init(temp.path()).unwrap();

    let o = Object::blob(TEST_CONTENT.to_vec());
    let id1 = r.put_object(&o).unwrap();
    let bytes = fs::read(r.object_path(&id1)).unwrap();

    let id2 = r.put_object(&o).unwrap();
    assert_eq!(id1, id2);
    assert_eq!(fs::read(r.object_path(&id2)).unwrap(), bytes);
}

#[test]
fn error_cant_create_objects_dir() {
    let temp = tempdir().unwrap();
    let r = OnDiskRepo::init(temp.path()).unwrap();

    let objects_dir = temp.path().join(".git/objects/d6");
    fs::write(&objects_dir, "sand in the gears").unwrap();

    let o = Object::blob(TEST_CONTENT.to_vec());
    let err = r.put_object(&o).unwrap_err();

    match err {
        Error::FileSystemError(_) => (),
        _ => panic!("Unexpected error {:?}", err),
    }
    assert!(!r.has_object(o.id()).unwrap());
}

#[test]
fn concurrent_stores_of_identical_content() {
    let temp = tempdir().unwrap();
    let r = Arc::new(OnDiskRepo::init(temp.path()).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let r = Arc::clone(&r);
            thread::spawn(move || r.put_object(&Object::blob("hello\n")))
        })
        .collect();

    let ids: Vec<Id> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert!(ids.iter().all(|id| *id == ids[0]));

    let dir = r.objects_dir().join("ce");
    let names: Vec<String> = fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["013625030ba8dba906f756967f9e9ca394464a"]);

    assert_eq!(inflate(&r.object_path(&ids[0])), b"blob 6\0hello\n");
}

#[test]
fn concurrent_stores_of_different_content() {
    let temp = tempdir().unwrap();
    let r = Arc::new(OnDiskRepo::init(temp.path()).unwrap());

    let handles: Vec<_> = (0..16)
        .map(|n| {
            let r = Arc::clone(&r);
            thread::spawn(move || r.put_object(&Object::blob(format!("file {}\n", n))))
        })
        .collect();

    for h in handles {
        let id = h.join().unwrap().unwrap();
        assert!(r.has_object(&id).unwrap());
    }
}
