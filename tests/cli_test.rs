use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = common::router();
    cmd.arg("tests/fixtures/payments.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("payment,provider,reference"))
        .stdout(predicate::str::contains("1,PagSeguro,pagseguro-1"))
        .stdout(predicate::str::contains("2,PagSeguro,pagseguro-2"))
        .stdout(predicate::str::contains("3,PagSeguro,pagseguro-3"));

    Ok(())
}

#[test]
fn test_cli_selected_payment_ids() {
    let mut cmd = common::router();
    cmd.arg("tests/fixtures/payments.csv")
        .arg("--payment-id")
        .arg("2");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2,PagSeguro,pagseguro-2"))
        .stdout(predicate::str::contains("1,PagSeguro").not());
}

#[test]
fn test_cli_unknown_payment_id_reports_and_continues() {
    let mut cmd = common::router();
    cmd.arg("tests/fixtures/payments.csv")
        .args(["--payment-id", "404", "--payment-id", "1"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains(
            "Error processing payment 404: Payment 404 not found",
        ))
        .stdout(predicate::str::contains("1,PagSeguro,pagseguro-1"));
}

#[test]
fn test_cli_config_priority() {
    let mut cmd = common::router();
    cmd.arg("tests/fixtures/payments.csv")
        .arg("--config")
        .arg("tests/fixtures/stripe_first.toml");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,Stripe,stripe-1"));
}

#[test]
fn test_cli_env_priority_overrides_config() {
    let mut cmd = common::router();
    cmd.arg("tests/fixtures/payments.csv")
        .arg("--config")
        .arg("tests/fixtures/stripe_first.toml")
        .env("PAYMENT_ROUTER_PRIORITY", "pagarme");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,Pagarme,pagarme-1"));
}

#[test]
fn test_cli_empty_chain_dry_run_yields_default() {
    let mut cmd = common::router();
    cmd.arg("tests/fixtures/payments.csv")
        .arg("--config")
        .arg("tests/fixtures/empty_chain.toml")
        .arg("--dry-run");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,Default,"))
        .stdout(predicate::str::contains("3,Default,"));
}

#[test]
fn test_cli_empty_chain_default_is_not_processed() {
    let mut cmd = common::router();
    cmd.arg("tests/fixtures/payments.csv")
        .arg("--config")
        .arg("tests/fixtures/empty_chain.toml");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains(
            "No client available for provider Default",
        ))
        .stdout(predicate::str::contains("Default").not());
}

#[test]
fn test_cli_json_output() {
    let mut cmd = common::router();
    cmd.arg("tests/fixtures/payments.csv")
        .args(["--payment-id", "3", "--format", "json"]);

    cmd.assert().success().stdout(predicate::str::contains(
        r#"{"payment":3,"provider":"PagSeguro","reference":"pagseguro-3"}"#,
    ));
}

#[test]
fn test_cli_missing_config_file_fails() {
    let mut cmd = common::router();
    cmd.arg("tests/fixtures/payments.csv")
        .arg("--config")
        .arg("tests/fixtures/does_not_exist.toml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_cli_priority_without_rule_fails() {
    let mut cmd = common::router();
    cmd.arg("tests/fixtures/payments.csv")
        .env("PAYMENT_ROUTER_PRIORITY", "paypal");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no preference rule is registered"));
}
