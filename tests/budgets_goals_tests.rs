// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finpro::models::{Budget, FinancialGoal};
use finpro::services::{budgets, goals};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    finpro::db::init_schema(&mut conn).unwrap();
    conn
}

fn budget(category_id: &str, month: u32) -> Budget {
    Budget {
        id: String::new(),
        user_id: String::new(),
        category_id: category_id.into(),
        month,
        year: 2025,
        amount: Decimal::new(40000, 2),
    }
}

fn goal(account_id: &str) -> FinancialGoal {
    FinancialGoal {
        id: String::new(),
        user_id: String::new(),
        account_id: account_id.into(),
        target_amount: Decimal::new(500000, 2),
        target_date: "2026-06-30".into(),
    }
}

#[test]
fn budgets_are_isolated_per_user() {
    let conn = setup();
    let mine = budgets::save(&conn, "u1", budget("cat-1", 0)).unwrap();
    budgets::save(&conn, "u2", budget("cat-2", 5)).unwrap();

    let all = budgets::find_all(&conn, "u1").unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, mine.id);
    assert!(budgets::find_by_id(&conn, "u2", &mine.id).unwrap().is_none());
}

#[test]
fn budget_delete_noop_then_effective() {
    let conn = setup();
    let mine = budgets::save(&conn, "u1", budget("cat-1", 0)).unwrap();

    budgets::delete_by_id(&conn, "u2", &mine.id).unwrap();
    assert!(budgets::find_by_id(&conn, "u1", &mine.id).unwrap().is_some());

    budgets::delete_by_id(&conn, "u1", &mine.id).unwrap();
    assert!(budgets::find_by_id(&conn, "u1", &mine.id).unwrap().is_none());
}

#[test]
fn budget_update_keeps_identity() {
    let conn = setup();
    let saved = budgets::save(&conn, "u1", budget("cat-1", 0)).unwrap();
    let mut changed = saved.clone();
    changed.amount = Decimal::new(99900, 2);
    changed.month = 11;

    budgets::save(&conn, "u1", changed).unwrap();
    let found = budgets::find_by_id(&conn, "u1", &saved.id).unwrap().unwrap();
    assert_eq!(found.amount, Decimal::new(99900, 2));
    assert_eq!(found.month, 11);
    assert_eq!(budgets::find_all(&conn, "u1").unwrap().len(), 1);
}

#[test]
fn budget_save_all_is_stamped() {
    let mut conn = setup();
    let saved = budgets::save_all(
        &mut conn,
        "u1",
        vec![budget("cat-1", 0), budget("cat-1", 1)],
    )
    .unwrap();
    assert!(saved.iter().all(|b| b.user_id == "u1"));
    assert_eq!(budgets::find_all(&conn, "u1").unwrap().len(), 2);
}

#[test]
fn goals_are_isolated_per_user() {
    let conn = setup();
    let mine = goals::save(&conn, "u1", goal("acc-1")).unwrap();
    goals::save(&conn, "u2", goal("acc-2")).unwrap();

    assert_eq!(goals::find_all(&conn, "u1").unwrap().len(), 1);
    assert!(goals::find_by_id(&conn, "u2", &mine.id).unwrap().is_none());
    assert!(goals::find_by_id(&conn, "u1", &mine.id).unwrap().is_some());
}

#[test]
fn goal_save_stamps_user_and_delete_is_idempotent() {
    let conn = setup();
    let mut incoming = goal("acc-1");
    incoming.user_id = "spoofed".into();
    let saved = goals::save(&conn, "u1", incoming).unwrap();
    assert_eq!(saved.user_id, "u1");

    goals::delete_by_id(&conn, "u1", &saved.id).unwrap();
    goals::delete_by_id(&conn, "u1", &saved.id).unwrap();
    assert!(goals::find_all(&conn, "u1").unwrap().is_empty());
}
