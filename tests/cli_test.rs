use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn tauview() -> assert_cmd::Command {
    cargo_bin_cmd!("tauview")
}

#[test]
fn test_help() {
    tauview()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tauview image viewer"));
}

#[test]
fn test_version() {
    tauview()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tauview"));
}

#[test]
fn test_system_locale() {
    // Whatever the host reports, the menu renders in English or Japanese
    tauview()
        .assert()
        .success()
        .stdout(predicate::str::contains("File").or(predicate::str::contains("ファイル")));
}

#[test]
fn test_japanese_menu() {
    tauview()
        .args(["--lang", "ja"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ファイル"))
        .stdout(predicate::str::contains("ゴミ箱に入れる"))
        .stdout(predicate::str::contains("Move to Trash").not());
}

#[test]
fn test_english_menu() {
    tauview()
        .args(["--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Toggle Fullscreen"))
        .stdout(predicate::str::contains("ファイル").not());
}

#[test]
fn test_region_tag_uses_language() {
    tauview()
        .args(["--lang", "ja-JP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ファイル"));
}

#[test]
fn test_unsupported_locale_falls_back() {
    tauview()
        .args(["--lang", "fr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File"))
        .stdout(predicate::str::contains("Support URL..."));
}

#[test]
fn test_first_preference_wins() {
    tauview()
        .args(["-l", "ja", "-l", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ファイル"));
}

#[test]
fn test_coverage() {
    tauview()
        .arg("--coverage")
        .assert()
        .success()
        .stdout(predicate::str::contains("fallback: en"))
        .stdout(predicate::str::contains("100.0%"))
        .stdout(predicate::str::contains("missing:").not());
}

#[test]
fn test_verbose_logs_to_stderr() {
    tauview()
        .args(["--verbose", "--lang", "fr"])
        .assert()
        .success()
        .stderr(predicate::str::contains("locale fr (serving en)"));
}
