use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[allow(deprecated)]
fn outline() -> Command {
    let mut cmd = Command::cargo_bin("java-outline").expect("binary");
    cmd.env_remove("RUST_LOG").env_remove("RUST_BACKTRACE");
    cmd
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn setup_repo() -> tempfile::TempDir {
    let temp = tempdir().unwrap();
    write(
        temp.path(),
        "com/example/Account.java",
        r#"
        package com.example;

        public class Account {
            private static final Logger logger = Logger.get();
            public static int OPEN = 0;
            private long balance;

            public Account(long balance) { this.balance = balance; }
            public long balance() { return balance; }
            void audit() {}
            public String toString() { return ""; }
        }
        "#,
    );
    write(
        temp.path(),
        "com/example/util/Ids.java",
        r#"
        package com.example;

        public final class Ids {
            public static String next() { return ""; }
        }
        "#,
    );
    temp
}

#[test]
fn cli_prints_outline_and_succeeds() {
    let repo = setup_repo();

    outline()
        .arg(repo.path())
        .assert()
        .success()
        .stdout(
            "# Package com.example\n\
             Class Account:\n  \
               Static fields:\n    \
                 int OPEN\n  \
               Fields:\n    \
                 long balance\n  \
               Methods:\n    \
                 Account(long balance)\n    \
                 long balance()\n\
             \n\
             Class Ids:\n  \
               Static methods:\n    \
                 String next()\n",
        );
}

#[test]
fn cli_methods_only_hides_fields() {
    let repo = setup_repo();

    outline()
        .arg("--methods-only")
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Fields:").not())
        .stdout(predicate::str::contains("Static fields:").not())
        .stdout(predicate::str::contains("    long balance()"));
}

#[test]
fn cli_sequential_matches_default() {
    let repo = setup_repo();

    let concurrent = outline().arg(repo.path()).output().unwrap();
    let sequential = outline()
        .arg("--sequential")
        .arg(repo.path())
        .output()
        .unwrap();
    assert_eq!(concurrent.stdout, sequential.stdout);
}

#[test]
fn cli_fail_fast_names_the_file_and_exits_non_zero() {
    let repo = setup_repo();
    write(repo.path(), "com/Broken.java", "public class Broken { void x( }");

    outline()
        .arg(repo.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Broken.java"));
}

#[test]
fn cli_best_effort_keeps_summaries_and_lists_failures() {
    let repo = setup_repo();
    write(repo.path(), "com/Broken.java", "public class Broken { void x( }");

    outline()
        .arg("--best-effort")
        .arg(repo.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Class Account:"))
        .stdout(predicate::str::contains("Class Ids:"))
        .stderr(predicate::str::contains("Broken.java"));
}

#[test]
fn cli_json_format_emits_one_record_per_unit() {
    let repo = setup_repo();

    let output = outline()
        .args(["--format", "json"])
        .arg(repo.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["path"], "com/example/Account.java");
    assert_eq!(records[1]["path"], "com/example/util/Ids.java");
}

#[test]
fn cli_missing_root_fails() {
    let temp = tempdir().unwrap();

    outline()
        .arg(temp.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
