// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finpro::models::{Account, AccountType};
use finpro::services::accounts;
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    finpro::db::init_schema(&mut conn).unwrap();
    conn
}

fn bank(name: &str, is_default: bool) -> Account {
    Account {
        id: String::new(),
        user_id: String::new(),
        name: name.into(),
        r#type: AccountType::Bank,
        initial_balance: Some(Decimal::new(10000, 2)),
        closing_day: None,
        due_day: None,
        is_default,
    }
}

#[test]
fn save_assigns_id_and_stamps_user() {
    let conn = setup();
    let mut incoming = bank("Checking", false);
    incoming.user_id = "someone-else".into();

    let saved = accounts::save(&conn, "u1", incoming).unwrap();
    assert!(!saved.id.is_empty());
    assert_eq!(saved.user_id, "u1");
    assert_eq!(saved.initial_balance, Some(Decimal::new(10000, 2)));
}

#[test]
fn find_all_is_scoped_to_the_acting_user() {
    let conn = setup();
    accounts::save(&conn, "u1", bank("Checking", false)).unwrap();
    accounts::save(&conn, "u2", bank("Other", false)).unwrap();

    let mine = accounts::find_all(&conn, "u1").unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].name, "Checking");
    assert!(accounts::find_all(&conn, "u3").unwrap().is_empty());
}

#[test]
fn find_by_id_hides_foreign_rows() {
    let conn = setup();
    let saved = accounts::save(&conn, "u1", bank("Checking", false)).unwrap();

    assert!(accounts::find_by_id(&conn, "u1", &saved.id).unwrap().is_some());
    assert!(accounts::find_by_id(&conn, "u2", &saved.id).unwrap().is_none());
    assert!(accounts::find_by_id(&conn, "u1", "missing").unwrap().is_none());
}

#[test]
fn setting_default_clears_previous_default_of_same_type() {
    let conn = setup();
    let a = accounts::save(&conn, "u1", bank("A", true)).unwrap();
    let b = accounts::save(&conn, "u1", bank("B", true)).unwrap();

    let a_after = accounts::find_by_id(&conn, "u1", &a.id).unwrap().unwrap();
    let b_after = accounts::find_by_id(&conn, "u1", &b.id).unwrap().unwrap();
    assert!(!a_after.is_default);
    assert!(b_after.is_default);
}

#[test]
fn default_exclusivity_is_per_type() {
    let conn = setup();
    let card = Account {
        r#type: AccountType::CreditCard,
        initial_balance: None,
        closing_day: Some(5),
        due_day: Some(12),
        ..bank("Card", true)
    };
    let b = accounts::save(&conn, "u1", bank("Bank", true)).unwrap();
    let c = accounts::save(&conn, "u1", card).unwrap();

    assert!(accounts::find_by_id(&conn, "u1", &b.id).unwrap().unwrap().is_default);
    assert!(accounts::find_by_id(&conn, "u1", &c.id).unwrap().unwrap().is_default);
}

#[test]
fn resaving_the_default_account_keeps_its_flag() {
    let conn = setup();
    let a = accounts::save(&conn, "u1", bank("A", true)).unwrap();
    let again = accounts::save(&conn, "u1", a.clone()).unwrap();
    assert!(again.is_default);
    assert!(accounts::find_by_id(&conn, "u1", &a.id).unwrap().unwrap().is_default);
}

#[test]
fn default_flip_does_not_cross_users() {
    let conn = setup();
    let theirs = accounts::save(&conn, "u2", bank("Theirs", true)).unwrap();
    accounts::save(&conn, "u1", bank("Mine", true)).unwrap();

    assert!(accounts::find_by_id(&conn, "u2", &theirs.id).unwrap().unwrap().is_default);
}

#[test]
fn delete_is_a_silent_noop_for_missing_or_foreign_ids() {
    let conn = setup();
    let saved = accounts::save(&conn, "u1", bank("Checking", false)).unwrap();

    accounts::delete_by_id(&conn, "u2", &saved.id).unwrap();
    assert!(accounts::find_by_id(&conn, "u1", &saved.id).unwrap().is_some());

    accounts::delete_by_id(&conn, "u1", "missing").unwrap();
    accounts::delete_by_id(&conn, "u1", &saved.id).unwrap();
    assert!(accounts::find_by_id(&conn, "u1", &saved.id).unwrap().is_none());
}

#[test]
fn save_all_stamps_every_record() {
    let mut conn = setup();
    let batch = vec![bank("A", false), bank("B", false), bank("C", false)];
    let saved = accounts::save_all(&mut conn, "u1", batch).unwrap();

    assert_eq!(saved.len(), 3);
    assert!(saved.iter().all(|a| a.user_id == "u1" && !a.id.is_empty()));
    assert_eq!(accounts::find_all(&conn, "u1").unwrap().len(), 3);
}

#[test]
fn update_by_id_overwrites_in_place() {
    let conn = setup();
    let saved = accounts::save(&conn, "u1", bank("Old name", false)).unwrap();
    let mut changed = saved.clone();
    changed.name = "New name".into();

    accounts::save(&conn, "u1", changed).unwrap();
    let all = accounts::find_all(&conn, "u1").unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "New name");
    assert_eq!(all[0].id, saved.id);
}
