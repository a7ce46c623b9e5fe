mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn run(rows: &[[&str; 2]]) -> assert_cmd::assert::Assert {
    let file = common::actions_file(rows);
    let mut cmd = Command::new(cargo_bin!("checkout-pricing"));
    cmd.arg(file.path());
    cmd.assert()
}

#[test]
fn test_percentage_coupon_then_points() {
    run(&[["coupon", "10%"], ["points", "1000"]])
        .success()
        .stdout(predicate::str::contains("망고T,1개,10000,9000,1000,8000,2000"));
}

#[test]
fn test_fixed_coupon_then_points() {
    run(&[["coupon", "5,000원"], ["points", "2000"]])
        .success()
        .stdout(predicate::str::contains("망고T,1개,10000,5000,2000,3000,2000"));
}

#[test]
fn test_points_over_ceiling_are_ignored() {
    run(&[["points", "2500"]])
        .success()
        .stderr(predicate::str::contains("Error").not())
        .stdout(predicate::str::contains("망고T,1개,10000,10000,0,10000,2000"));
}

#[test]
fn test_new_coupon_invalidates_points() {
    run(&[
        ["coupon", "9%"],
        ["points", "500"],
        ["coupon", "10%"],
    ])
    .success()
    .stdout(predicate::str::contains("망고T,1개,10000,9000,0,9000,2000"));
}

#[test]
fn test_payment_request_uses_final_price() {
    let file = common::actions_file(&[["coupon", "10%"], ["points", "1000"]]);

    let mut cmd = Command::new(cargo_bin!("checkout-pricing"));
    cmd.arg(file.path())
        .arg("--payment-request")
        .arg("--origin")
        .arg("https://shop.test");

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json_line = stdout.lines().last().unwrap();
    let request: serde_json::Value = serde_json::from_str(json_line).unwrap();

    assert_eq!(request["amount"], 8000);
    assert_eq!(request["orderName"], "망고T");
    assert_eq!(request["successUrl"], "https://shop.test/success");
    assert_eq!(request["failUrl"], "https://shop.test/fail");
}
