// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finpro::models::{Transaction, TransactionType};
use finpro::services::transactions;
use finpro::{cli, commands::exporter};
use rusqlite::Connection;
use rust_decimal::Decimal;
use tempfile::tempdir;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    finpro::db::init_schema(&mut conn).unwrap();
    conn
}

fn tx(date: &str, description: &str) -> Transaction {
    Transaction {
        id: String::new(),
        user_id: String::new(),
        description: description.into(),
        amount: Decimal::new(-1250, 2),
        date: date.into(),
        category: Some("Food".into()),
        r#type: TransactionType::Expense,
        is_applied: true,
        observations: None,
        account_id: None,
        fitid: Some("FIT-9".into()),
        split: Vec::new(),
        invoice_month: None,
        batch_id: None,
        installment_number: None,
        total_installments: None,
    }
}

fn run_export(conn: &Connection, user: &str, format: &str, out: &str) {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "finpro", "--user", user, "export", "transactions", "--format", format, "--out", out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(conn, user, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn csv_export_contains_only_the_acting_users_rows() {
    let conn = setup();
    transactions::save(&conn, "u1", tx("2025-02-01", "mine")).unwrap();
    transactions::save(&conn, "u2", tx("2025-02-02", "theirs")).unwrap();

    let dir = tempdir().unwrap();
    let out = dir.path().join("tx.csv");
    run_export(&conn, "u1", "csv", out.to_str().unwrap());

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.contains("mine"));
    assert!(!content.contains("theirs"));
    assert!(content.contains("FIT-9"));
}

#[test]
fn json_export_uses_the_api_field_names() {
    let conn = setup();
    transactions::save(&conn, "u1", tx("2025-02-01", "mine")).unwrap();

    let dir = tempdir().unwrap();
    let out = dir.path().join("tx.json");
    run_export(&conn, "u1", "json", out.to_str().unwrap());

    let content = std::fs::read_to_string(&out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    let first = &parsed.as_array().unwrap()[0];
    assert_eq!(first["description"], "mine");
    assert_eq!(first["userId"], "u1");
    assert_eq!(first["isApplied"], true);
    assert!(first["id"].as_str().map(|s| !s.is_empty()).unwrap_or(false));
}
