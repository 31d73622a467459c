//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("clickup-mcp"));
    cmd.env_clear();
    cmd
}

fn with_credentials(cmd: &mut Command) -> &mut Command {
    cmd.env("CLICKUP_API_KEY", "pk_test_secret").env("CLICKUP_TEAM_ID", "B")
}

#[test]
fn test_cli_version() {
    let mut cmd = bin();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("clickup-mcp"));
}

#[test]
fn test_cli_help() {
    let mut cmd = bin();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--env"))
        .stdout(predicate::str::contains("--print-config"));
}

#[test]
fn test_missing_credentials_names_both_fields() {
    let mut cmd = bin();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("missing required configuration"))
        .stderr(predicate::str::contains("CLICKUP_API_KEY"))
        .stderr(predicate::str::contains("CLICKUP_TEAM_ID"));
}

#[test]
fn test_missing_team_id_only() {
    let mut cmd = bin();
    cmd.env("CLICKUP_API_KEY", "pk_1");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("CLICKUP_TEAM_ID"))
        .stderr(predicate::str::contains("CLICKUP_API_KEY").not());
}

#[test]
fn test_oauth_mode_starts_without_credentials() {
    let mut cmd = bin();
    cmd.env("ENABLE_OAUTH", "true").arg("--print-config");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""enable_oauth": true"#))
        .stdout(predicate::str::contains(r#""api_key": """#));
}

#[test]
fn test_cli_pair_overrides_environment() {
    let mut cmd = bin();
    with_credentials(&mut cmd).args(["--env", "CLICKUP_TEAM_ID=A", "--print-config"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""team_id": "A""#))
        .stdout(predicate::str::contains(r#""source": "cli""#));
}

#[test]
fn test_print_config_redacts_api_key() {
    let mut cmd = bin();
    with_credentials(&mut cmd).arg("--print-config");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""api_key": "***""#))
        .stdout(predicate::str::contains("pk_test_secret").not());
}

#[test]
fn test_defaults_in_print_config() {
    let mut cmd = bin();
    with_credentials(&mut cmd).arg("--print-config");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""port": "3231""#))
        .stdout(predicate::str::contains(r#""log_level": "ERROR""#))
        .stdout(predicate::str::contains(r#""document_support": "false""#))
        .stdout(predicate::str::contains(r#""enable_sponsor_message": true"#));
}

#[test]
fn test_legacy_aliases_are_honored() {
    let mut cmd = bin();
    with_credentials(&mut cmd)
        .env("DOCUMENT_MODULE", "true")
        .args(["--env", "DISABLED_COMMANDS=delete_task, delete_list", "--print-config"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""document_support": "true""#))
        .stdout(predicate::str::contains(r#""delete_task""#))
        .stdout(predicate::str::contains(r#""DOCUMENT_MODULE""#));
}

#[test]
fn test_malformed_env_tokens_are_ignored() {
    let mut cmd = bin();
    with_credentials(&mut cmd).args(["--env", "NOT_A_PAIR", "--env", "FUTURE_KEY=1", "--env"]);
    cmd.assert().success();
}

#[test]
fn test_log_level_gates_output() {
    let mut cmd = bin();
    with_credentials(&mut cmd).env("LOG_LEVEL", "info");
    cmd.assert().success().stderr(predicate::str::contains("Configuration: port=3231"));

    let mut cmd = bin();
    with_credentials(&mut cmd);
    cmd.assert().success().stderr(predicate::str::contains("Configuration:").not());
}

#[test]
fn test_debug_level_reports_sources_without_secrets() {
    let mut cmd = bin();
    with_credentials(&mut cmd).env("LOG_LEVEL", "Debug");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("configuration value resolved"))
        .stderr(predicate::str::contains("pk_test_secret").not());
}

#[test]
fn test_attached_env_form_overrides_environment() {
    let mut cmd = bin();
    with_credentials(&mut cmd).args(["--env=CLICKUP_TEAM_ID=A", "--print-config"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""team_id": "A""#))
        .stdout(predicate::str::contains(r#""source": "cli""#));
}

#[test]
fn test_print_config_after_bare_env_flag() {
    let mut cmd = bin();
    with_credentials(&mut cmd).args(["--env", "--print-config"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""config""#))
        .stdout(predicate::str::contains(r#""team_id": "B""#));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_argument_does_not_abort() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let mut cmd = bin();
    with_credentials(&mut cmd)
        .arg(OsStr::from_bytes(&[0x66, 0xff]))
        .args(["--env", "PORT=9000", "--print-config"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""port": "9000""#));
}
