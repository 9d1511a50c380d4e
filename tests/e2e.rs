use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;
use zip::write::{FileOptions, ZipWriter};

const FOLLOWERS_1: &str = r#"[
  {"string_list_data": [{"href": "https://www.instagram.com/a", "value": "a", "timestamp": 1628000001}]},
  {"string_list_data": [{"timestamp": 1628000009}]}
]"#;

const FOLLOWERS_2: &str = r#"[
  {"string_list_data": [{"href": "https://www.instagram.com/b", "value": "b", "timestamp": 1628000002}]}
]"#;

const FOLLOWING: &str = r#"{
  "relationships_following": [
    {"string_list_data": [{"value": "b", "timestamp": 1628000003}]},
    {"string_list_data": [{"value": "c"}]}
  ]
}"#;

fn add_file(zip: &mut ZipWriter<fs::File>, name: &str, contents: &str) {
    zip.start_file::<_, ()>(name, FileOptions::default()).unwrap();
    zip.write_all(contents.as_bytes()).unwrap();
}

fn write_export_zip(path: &Path) {
    let file = fs::File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    add_file(
        &mut zip,
        "connections/followers_and_following/followers_1.json",
        FOLLOWERS_1,
    );
    add_file(
        &mut zip,
        "connections/followers_and_following/followers_2.json",
        FOLLOWERS_2,
    );
    add_file(
        &mut zip,
        "connections/followers_and_following/following.json",
        FOLLOWING,
    );
    zip.finish().unwrap();
}

#[test]
fn e2e_runs_and_writes_outputs() {
    let tmp = tempdir().unwrap();
    let zip_path = tmp.path().join("export.zip");
    let outdir = tmp.path().join("out");
    write_export_zip(&zip_path);

    let mut cmd = Command::cargo_bin("ig-audit").unwrap();
    cmd.arg("-z").arg(&zip_path).arg("-o").arg(&outdir);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Relation Counts"))
        .stdout(predicate::str::contains("Output directory:"));

    for name in [
        "followers.csv",
        "following.csv",
        "relations.csv",
        "you_follow_they_do_not.csv",
        "they_follow_you_only.csv",
        "mutual.csv",
        "instagram_audit_report.html",
    ] {
        assert!(outdir.join(name).is_file(), "missing {name}");
    }

    // Aggregate order is rank (you-follow-only, they-follow-only, mutual)
    // then username within a rank.
    let relations = fs::read_to_string(outdir.join("relations.csv")).unwrap();
    let lines: Vec<&str> = relations.lines().collect();
    assert_eq!(
        lines,
        vec![
            "username,follows_you,you_follow,relation,profile_url",
            "c,false,true,you_follow_they_do_not,https://instagram.com/c",
            "a,true,false,they_follow_you_only,https://instagram.com/a",
            "b,true,true,mutual,https://instagram.com/b",
        ]
    );

    // Raw CSVs mirror the loader row order; the malformed followers entry
    // is dropped, and absent timestamps serialize as empty cells.
    let followers = fs::read_to_string(outdir.join("followers.csv")).unwrap();
    assert_eq!(
        followers.lines().collect::<Vec<_>>(),
        vec!["username,follow_ts", "a,1628000001", "b,1628000002"]
    );
    let following = fs::read_to_string(outdir.join("following.csv")).unwrap();
    assert_eq!(
        following.lines().collect::<Vec<_>>(),
        vec!["username,follow_ts", "b,1628000003", "c,"]
    );

    let mutual = fs::read_to_string(outdir.join("mutual.csv")).unwrap();
    assert_eq!(mutual.lines().count(), 2);
    assert!(mutual.lines().nth(1).unwrap().starts_with("b,"));

    let html = fs::read_to_string(outdir.join("instagram_audit_report.html")).unwrap();
    assert!(html.contains("followers: 2"));
    assert!(html.contains("following: 2"));
    assert!(html.contains("mutual: 1"));
}

#[test]
fn missing_archive_causes_non_zero_exit() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("ig-audit").unwrap();
    cmd.arg("-z").arg(tmp.path().join("missing.zip"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("archive not found"));
}

#[test]
fn archive_without_connections_dir_fails() {
    let tmp = tempdir().unwrap();
    let zip_path = tmp.path().join("export.zip");
    {
        let file = fs::File::create(&zip_path).unwrap();
        let mut zip = ZipWriter::new(file);
        add_file(&mut zip, "media/posts_1.json", "[]");
        zip.finish().unwrap();
    }
    let mut cmd = Command::cargo_bin("ig-audit").unwrap();
    cmd.arg("-z").arg(&zip_path).arg("-o").arg(tmp.path().join("out"));
    cmd.assert().failure().stderr(predicate::str::contains(
        "connections/followers_and_following",
    ));
}

#[test]
fn archive_without_following_file_fails() {
    let tmp = tempdir().unwrap();
    let zip_path = tmp.path().join("export.zip");
    {
        let file = fs::File::create(&zip_path).unwrap();
        let mut zip = ZipWriter::new(file);
        add_file(
            &mut zip,
            "connections/followers_and_following/followers_1.json",
            FOLLOWERS_1,
        );
        zip.finish().unwrap();
    }
    let mut cmd = Command::cargo_bin("ig-audit").unwrap();
    cmd.arg("-z").arg(&zip_path).arg("-o").arg(tmp.path().join("out"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("following.json not found"));
}

#[test]
fn repeated_runs_yield_identical_csvs() {
    let tmp = tempdir().unwrap();
    let zip_path = tmp.path().join("export.zip");
    let outdir = tmp.path().join("out");
    write_export_zip(&zip_path);

    for _ in 0..2 {
        let mut cmd = Command::cargo_bin("ig-audit").unwrap();
        cmd.arg("-z").arg(&zip_path).arg("-o").arg(&outdir).arg("-q");
        cmd.assert().success();
    }
    let first = fs::read(outdir.join("relations.csv")).unwrap();

    let mut cmd = Command::cargo_bin("ig-audit").unwrap();
    cmd.arg("-z").arg(&zip_path).arg("-o").arg(&outdir).arg("-q");
    cmd.assert().success();
    let second = fs::read(outdir.join("relations.csv")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn quiet_suppresses_summary_but_still_exports() {
    let tmp = tempdir().unwrap();
    let zip_path = tmp.path().join("export.zip");
    let outdir = tmp.path().join("out");
    write_export_zip(&zip_path);

    let mut cmd = Command::cargo_bin("ig-audit").unwrap();
    cmd.arg("-z").arg(&zip_path).arg("-o").arg(&outdir).arg("--quiet");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Relation Counts").not())
        .stdout(predicate::str::contains("Output directory:"));
    assert!(outdir.join("relations.csv").is_file());
}
