// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finpro::models::WealthConfig;
use finpro::services::wealth;
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    finpro::db::init_schema(&mut conn).unwrap();
    conn
}

fn config(goal: i64) -> WealthConfig {
    WealthConfig {
        id: None,
        user_id: String::new(),
        passive_income_goal: Decimal::new(goal, 2),
    }
}

#[test]
fn get_returns_zero_default_without_persisting() {
    let conn = setup();
    let cfg = wealth::get(&conn, "u1").unwrap();
    assert_eq!(cfg.passive_income_goal, Decimal::ZERO);
    assert!(cfg.id.is_none());

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM wealth_config", [], |r| r.get(0))
        .unwrap();
    assert_eq!(rows, 0);
}

#[test]
fn save_twice_updates_the_single_row() {
    let conn = setup();
    let first = wealth::save(&conn, "u1", config(100000)).unwrap();
    let second = wealth::save(&conn, "u1", config(250000)).unwrap();

    assert_eq!(first.id, second.id);
    let rows: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM wealth_config WHERE user_id='u1'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(rows, 1);
    assert_eq!(
        wealth::get(&conn, "u1").unwrap().passive_income_goal,
        Decimal::new(250000, 2)
    );
}

#[test]
fn configs_are_isolated_per_user() {
    let conn = setup();
    wealth::save(&conn, "u1", config(100000)).unwrap();

    assert_eq!(wealth::get(&conn, "u2").unwrap().passive_income_goal, Decimal::ZERO);
    wealth::save(&conn, "u2", config(500)).unwrap();
    assert_eq!(
        wealth::get(&conn, "u1").unwrap().passive_income_goal,
        Decimal::new(100000, 2)
    );
}

#[test]
fn save_overrides_spoofed_user_id() {
    let conn = setup();
    let mut incoming = config(100);
    incoming.user_id = "someone-else".into();
    let saved = wealth::save(&conn, "u1", incoming).unwrap();
    assert_eq!(saved.user_id, "u1");
}
