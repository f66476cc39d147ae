//! CLI integration tests for akz commands.
//!
//! These tests focus on exit codes and basic behavioral verification,
//! not specific output formatting which may change.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;

/// A small fixture dictionary covering both query modes and tag filters.
const FIXTURE_DICT: &str = r#"{
  "words": [
    {
      "lemma": "ayó",
      "definition": [{"definition": "to go", "wordClass": "2a-LI"}],
      "principalPart": "ishayó, ilayó, hashayó",
      "relatedTerms": ["ayohli"],
      "audio": ["ayo-1"]
    },
    {
      "lemma": "ayohli",
      "definition": [{"definition": "road"}]
    },
    {
      "lemma": "bihi",
      "definition": [{"definition": "mulberry"}],
      "audio": ["bihi-1"]
    },
    {
      "lemma": "oki",
      "definition": [{"definition": "water"}]
    }
  ]
}"#;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Writes the fixture dictionary into `dir` and returns its path.
fn write_fixture(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("dict.json");
    fs::write(&path, FIXTURE_DICT).unwrap();
    path
}

/// Helper to get an akz command wired to a fixture in `dir`.
fn akz(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("akz").unwrap();
    cmd.arg("--dict")
        .arg(write_fixture(dir))
        .arg("--favorites")
        .arg(dir.join("favorites.json"));
    cmd
}

mod search {
    use super::*;

    #[test]
    fn finds_headword_matches() {
        let dir = temp_dir();

        akz(dir.path())
            .args(["search", "ayo"])
            .assert()
            .success()
            .stdout(predicate::str::contains("ayó"))
            .stdout(predicate::str::contains("ayohli"))
            .stdout(predicate::str::contains("of 2 results"));
    }

    #[test]
    fn finds_gloss_matches() {
        let dir = temp_dir();

        akz(dir.path())
            .args(["search", "water"])
            .assert()
            .success()
            .stdout(predicate::str::contains("oki"));
    }

    #[test]
    fn empty_query_lists_whole_dictionary() {
        let dir = temp_dir();

        akz(dir.path())
            .args(["search", ""])
            .assert()
            .success()
            .stdout(predicate::str::contains("of 4 results"));
    }

    #[test]
    fn no_matches_reports_cleanly() {
        let dir = temp_dir();

        akz(dir.path())
            .args(["search", "zzz"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No results."));
    }

    #[test]
    fn pattern_mode_uses_cv_shorthand() {
        let dir = temp_dir();

        akz(dir.path())
            .args(["search", "--pattern", "^CVCV$"])
            .assert()
            .success()
            .stdout(predicate::str::contains("bihi"))
            .stdout(predicate::str::contains("of 1 results"));
    }

    #[test]
    fn invalid_pattern_is_not_a_crash() {
        let dir = temp_dir();

        akz(dir.path())
            .args(["search", "--pattern", "[C"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No results."));
    }

    #[test]
    fn audio_only_filters_results() {
        let dir = temp_dir();

        akz(dir.path())
            .args(["search", "--audio-only", ""])
            .assert()
            .success()
            .stdout(predicate::str::contains("of 2 results"));
    }

    #[test]
    fn tag_directive_scopes_to_glosses() {
        let dir = temp_dir();

        // "oki" as plain text matches the headword; scoped to English
        // glosses it matches nothing.
        akz(dir.path())
            .args(["search", "oki #en"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No results."));
    }

    #[test]
    fn offset_pages_through_results() {
        let dir = temp_dir();

        akz(dir.path())
            .args(["search", "", "--offset", "3", "-n", "2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("3 - 4 of 4 results"));
    }

    #[test]
    fn missing_dictionary_is_fatal() {
        let dir = temp_dir();

        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("akz").unwrap();
        cmd.arg("--dict")
            .arg(dir.path().join("nope.json"))
            .args(["search", "ayo"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error:"));
    }

    #[test]
    fn malformed_dictionary_is_fatal() {
        let dir = temp_dir();
        let dict = dir.path().join("broken.json");
        fs::write(&dict, "{\"words\": [{]}").unwrap();

        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("akz").unwrap();
        cmd.arg("--dict")
            .arg(&dict)
            .args(["search", "ayo"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("malformed lexicon"));
    }
}

mod show {
    use super::*;

    #[test]
    fn prints_full_entry() {
        let dir = temp_dir();

        akz(dir.path())
            .args(["show", "ayó"])
            .assert()
            .success()
            .stdout(predicate::str::contains("to go"))
            .stdout(predicate::str::contains("second person singular"))
            .stdout(predicate::str::contains("related: ayohli"));
    }

    #[test]
    fn unknown_headword_fails() {
        let dir = temp_dir();

        akz(dir.path())
            .args(["show", "missing"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no entry"));
    }
}

mod favorites {
    use super::*;

    #[test]
    fn add_list_remove_roundtrip() {
        let dir = temp_dir();

        akz(dir.path())
            .args(["favorites", "add", "ayó"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Added"));

        akz(dir.path())
            .args(["favorites", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("ayó"));

        akz(dir.path())
            .args(["favorites", "remove", "ayó"])
            .assert()
            .success();

        akz(dir.path())
            .args(["favorites", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No favorites."));
    }

    #[test]
    fn duplicate_add_reports_already_present() {
        let dir = temp_dir();

        akz(dir.path())
            .args(["favorites", "add", "bihi"])
            .assert()
            .success();

        akz(dir.path())
            .args(["favorites", "add", "bihi"])
            .assert()
            .success()
            .stdout(predicate::str::contains("already"));
    }

    #[test]
    fn add_unknown_headword_fails() {
        let dir = temp_dir();

        akz(dir.path())
            .args(["favorites", "add", "missing"])
            .assert()
            .failure();
    }

    #[test]
    fn remove_missing_favorite_fails() {
        let dir = temp_dir();

        akz(dir.path())
            .args(["favorites", "remove", "ayó"])
            .assert()
            .failure();
    }

    #[test]
    fn corrupt_favorites_degrades_to_empty() {
        let dir = temp_dir();
        fs::write(dir.path().join("favorites.json"), "{not json").unwrap();

        akz(dir.path())
            .args(["favorites", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No favorites."));
    }
}
