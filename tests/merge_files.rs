//! File-to-file merge through temporary directories.

use vault_fusion::{merge_vaults, VaultDocument};

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn merge_two_export_files() {
    let dir = tempfile::tempdir().unwrap();

    let base_path = write_file(
        &dir,
        "base.json",
        r#"{
            "encrypted": false,
            "folders": [{"id": "f1", "name": "Work"}],
            "items": [
                {"id": "1", "name": "Site",
                 "login": {"username": "u", "password": "p", "uris": [{"uri": "https://s.com"}]}}
            ]
        }"#,
    );
    let incoming_path = write_file(
        &dir,
        "incoming.json",
        r#"{
            "items": [
                {"id": "1", "name": "Site",
                 "login": {"username": "u", "password": "p", "uris": [{"uri": "https://s.com"}]}},
                {"id": "2", "name": "Other",
                 "login": {"username": "u2", "password": "p2", "uris": []}}
            ]
        }"#,
    );

    let base = VaultDocument::load(&base_path).unwrap();
    let incoming = VaultDocument::load(&incoming_path).unwrap();
    let output = merge_vaults(&base, &incoming);

    assert_eq!(output.stats.base_count, 1);
    assert_eq!(output.stats.added_count, 1);
    assert_eq!(output.stats.skipped_count, 1);
    assert!(output.conflicts.is_empty());

    // Round-trip through the output file
    let merged_path = dir.path().join("merged-vault.json");
    output.document.save(&merged_path).unwrap();
    let reloaded = VaultDocument::load(&merged_path).unwrap();

    assert_eq!(reloaded, output.document);
    assert_eq!(reloaded.item_count(), 2);

    // Base metadata survives verbatim
    let json = reloaded.to_json_pretty().unwrap();
    assert!(json.contains(r#""encrypted": false"#));
    assert!(json.contains(r#""name": "Work""#));
}

#[test]
fn load_rejects_malformed_and_missing_files() {
    let dir = tempfile::tempdir().unwrap();

    let bad_path = write_file(&dir, "bad.json", "{ not json at all");
    assert!(VaultDocument::load(&bad_path).is_err());

    assert!(VaultDocument::load(dir.path().join("does-not-exist.json")).is_err());
}
