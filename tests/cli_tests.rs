use assert_cmd::Command;
use predicates::prelude::*;

const ENV_VARS: [&str; 10] = [
    "DRONE_ACCESS_TOKEN",
    "DRONE_DOMAIN",
    "DRONE_REPO",
    "DRONE_RELEASE",
    "DRONE_TAG",
    "DRONE_DESCRIPTION",
    "DRONE_REF",
    "DRONE_ASSETS",
    "DRONE_VERBOSE",
    "NO_COLOR",
];

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("gitlab_release").expect("binary builds");
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1");
    cmd
}

fn with_required(cmd: &mut Command, token: &str, domain: &str, tag: &str) {
    cmd.args([
        "--access-token",
        token,
        "--domain",
        domain,
        "--repo",
        "group/app",
        "--release",
        "Release 1.0",
        "--tag",
        tag,
        "--description",
        "Notes",
        "--ref",
        "main",
    ]);
}

#[test]
fn test_help_lists_env_bindings() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("DRONE_ACCESS_TOKEN"))
        .stdout(predicate::str::contains("--assets"));
}

#[test]
fn test_missing_required_arguments_fail() {
    cmd()
        .args(["--domain", "gitlab.example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--access-token"));
}

#[test]
fn test_blank_tag_fails_validation() {
    let mut cmd = cmd();
    with_required(&mut cmd, "glpat-test", "gitlab.example.com", " ");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[test]
fn test_domain_that_is_not_a_host_fails() {
    let mut cmd = cmd();
    with_required(&mut cmd, "glpat-test", "bad host", "v1.0");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("does not form a valid URL"));
}

#[test]
fn test_unusable_token_fails_authentication() {
    let mut cmd = cmd();
    with_required(&mut cmd, "bad\ntoken", "gitlab.example.com", "v1.0");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Authentication failed"));
}

#[test]
fn test_env_variables_are_read() {
    cmd()
        .env("DRONE_ACCESS_TOKEN", "glpat-test")
        .env("DRONE_DOMAIN", "gitlab.example.com")
        .env("DRONE_REPO", "group/app")
        .env("DRONE_RELEASE", "Release 1.0")
        .env("DRONE_TAG", "  ")
        .env("DRONE_DESCRIPTION", "Notes")
        .env("DRONE_REF", "main")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--tag must not be empty"));
}
