// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finpro::models::{Account, AccountType};
use finpro::services::{accounts, transactions};
use finpro::{cli, commands::importer};
use rusqlite::Connection;
use std::io::Write;
use tempfile::NamedTempFile;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    finpro::db::init_schema(&mut conn).unwrap();
    conn
}

fn add_account(conn: &Connection, user: &str, name: &str) -> Account {
    accounts::save(
        conn,
        user,
        Account {
            id: String::new(),
            user_id: String::new(),
            name: name.into(),
            r#type: AccountType::Bank,
            initial_balance: None,
            closing_day: None,
            due_day: None,
            is_default: false,
        },
    )
    .unwrap()
}

fn run_import(conn: &mut Connection, user: &str, path: &str) {
    let cli = cli::build_cli();
    let matches =
        cli.get_matches_from(["finpro", "--user", user, "import", "transactions", "--path", path]);
    if let Some(("import", import_m)) = matches.subcommand() {
        importer::handle(conn, user, import_m).unwrap();
    } else {
        panic!("no import subcommand");
    }
}

#[test]
fn import_resolves_accounts_and_skips_duplicate_fitids() {
    let mut conn = setup();
    let account = add_account(&conn, "u1", "Main");

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,description,amount,type,category,account,fitid").unwrap();
    writeln!(file, "2025-02-03,Shop,-5.00,EXPENSE,Food,Main,FIT-1").unwrap();
    writeln!(file, "2025-02-04,Shop again,-6.00,EXPENSE,Food,Main,FIT-1").unwrap();
    writeln!(file, "2025-02-05,Salary,2000.00,INCOME,,Main,FIT-2").unwrap();
    file.flush().unwrap();
    let path = file.path().to_str().unwrap().to_string();

    run_import(&mut conn, "u1", &path);

    let rows = transactions::find_all(&conn, "u1").unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|t| t.account_id.as_deref() == Some(account.id.as_str())));
    assert!(rows.iter().all(|t| t.is_applied));

    // Re-importing the same file is a no-op thanks to the fitid dedup.
    run_import(&mut conn, "u1", &path);
    assert_eq!(transactions::find_all(&conn, "u1").unwrap().len(), 2);
}

#[test]
fn import_without_fitid_never_dedups() {
    let mut conn = setup();
    add_account(&conn, "u1", "Main");

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,description,amount,type,category,account,fitid").unwrap();
    writeln!(file, "2025-02-03,Cash,-5.00,EXPENSE,,Main,").unwrap();
    writeln!(file, "2025-02-03,Cash,-5.00,EXPENSE,,Main,").unwrap();
    file.flush().unwrap();

    run_import(&mut conn, "u1", file.path().to_str().unwrap());
    assert_eq!(transactions::find_all(&conn, "u1").unwrap().len(), 2);
}

#[test]
fn import_only_sees_the_acting_users_accounts() {
    let mut conn = setup();
    add_account(&conn, "u2", "Main"); // same name, different owner

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,description,amount,type,category,account,fitid").unwrap();
    writeln!(file, "2025-02-03,Shop,-5.00,EXPENSE,,Main,").unwrap();
    file.flush().unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "finpro",
        "--user",
        "u1",
        "import",
        "transactions",
        "--path",
        path.as_str(),
    ]);
    if let Some(("import", import_m)) = matches.subcommand() {
        let err = importer::handle(&mut conn, "u1", import_m).unwrap_err();
        assert!(err.to_string().contains("Account 'Main' not found"));
    } else {
        panic!("no import subcommand");
    }
    // Nothing partial sticks: the whole file is one transaction.
    assert!(transactions::find_all(&conn, "u1").unwrap().is_empty());
}
