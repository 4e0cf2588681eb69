// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::{params, Connection};

use crate::models::FinancialGoal;
use crate::utils::{new_id, parse_decimal};

const COLS: &str = "id, user_id, account_id, target_amount, target_date";

fn read_row(r: &rusqlite::Row) -> Result<FinancialGoal> {
    let amount_s: String = r.get(3)?;
    Ok(FinancialGoal {
        id: r.get(0)?,
        user_id: r.get(1)?,
        account_id: r.get(2)?,
        target_amount: parse_decimal(&amount_s)?,
        target_date: r.get(4)?,
    })
}

pub fn find_all(conn: &Connection, user: &str) -> Result<Vec<FinancialGoal>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLS} FROM financial_goals WHERE user_id=?1 ORDER BY target_date"
    ))?;
    let mut rows = stmt.query(params![user])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(read_row(r)?);
    }
    Ok(out)
}

pub fn find_by_id(conn: &Connection, user: &str, id: &str) -> Result<Option<FinancialGoal>> {
    let mut stmt = conn.prepare(&format!("SELECT {COLS} FROM financial_goals WHERE id=?1"))?;
    let mut rows = stmt.query(params![id])?;
    match rows.next()? {
        Some(r) => {
            let goal = read_row(r)?;
            if goal.user_id != user {
                return Ok(None);
            }
            Ok(Some(goal))
        }
        None => Ok(None),
    }
}

pub fn save(conn: &Connection, user: &str, mut goal: FinancialGoal) -> Result<FinancialGoal> {
    goal.user_id = user.to_string();
    if goal.id.is_empty() {
        goal.id = new_id();
    }
    conn.execute(
        "INSERT INTO financial_goals(id, user_id, account_id, target_amount, target_date)
         VALUES (?1,?2,?3,?4,?5)
         ON CONFLICT(id) DO UPDATE SET
             user_id=excluded.user_id, account_id=excluded.account_id,
             target_amount=excluded.target_amount, target_date=excluded.target_date",
        params![
            goal.id,
            goal.user_id,
            goal.account_id,
            goal.target_amount.to_string(),
            goal.target_date,
        ],
    )?;
    Ok(goal)
}

pub fn delete_by_id(conn: &Connection, user: &str, id: &str) -> Result<()> {
    if find_by_id(conn, user, id)?.is_some() {
        conn.execute("DELETE FROM financial_goals WHERE id=?1", params![id])?;
    }
    Ok(())
}
