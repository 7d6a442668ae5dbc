//! Loading manifests from disk.

use cwrap_manifest::{CwrapToml, Error, Manifest};
use tempfile::TempDir;

#[test]
fn test_open_and_generate() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("cwrap.toml");
    std::fs::write(
        &path,
        "[files.\"my.c\"]\nprefix = \"super_\"\n[files.\"my.c\".values]\nok = \"yes\"\n",
    )
    .unwrap();

    let toml = CwrapToml::open(&path).unwrap();
    assert_eq!(toml.path(), path);
    assert!(toml.content().contains("super_"));

    let pairs = toml.manifest().declaration_pairs().unwrap();
    pairs[0].write(temp.path()).unwrap();

    let c_text = std::fs::read_to_string(temp.path().join("my.c")).unwrap();
    assert_eq!(
        c_text,
        "#include \"my.h\"\nconst char * super_ok = \"yes\";\n"
    );
    let h_text = std::fs::read_to_string(temp.path().join("my.h")).unwrap();
    assert_eq!(
        h_text,
        "#ifndef MY_H\n#define MY_H\nextern const char * super_ok; /* yes */\n#endif /* MY_H */\n"
    );
}

#[test]
fn test_missing_file() {
    let temp = TempDir::new().unwrap();
    let result = Manifest::from_file(temp.path().join("absent.toml"));
    assert!(matches!(*result.unwrap_err(), Error::Io { .. }));
}
