// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::{params, Connection};

use crate::models::Budget;
use crate::utils::{new_id, parse_decimal};

const COLS: &str = "id, user_id, category_id, month, year, amount";

fn read_row(r: &rusqlite::Row) -> Result<Budget> {
    let amount_s: String = r.get(5)?;
    Ok(Budget {
        id: r.get(0)?,
        user_id: r.get(1)?,
        category_id: r.get(2)?,
        month: r.get(3)?,
        year: r.get(4)?,
        amount: parse_decimal(&amount_s)?,
    })
}

pub fn find_all(conn: &Connection, user: &str) -> Result<Vec<Budget>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLS} FROM budgets WHERE user_id=?1 ORDER BY year, month"
    ))?;
    let mut rows = stmt.query(params![user])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(read_row(r)?);
    }
    Ok(out)
}

pub fn find_by_id(conn: &Connection, user: &str, id: &str) -> Result<Option<Budget>> {
    let mut stmt = conn.prepare(&format!("SELECT {COLS} FROM budgets WHERE id=?1"))?;
    let mut rows = stmt.query(params![id])?;
    match rows.next()? {
        Some(r) => {
            let budget = read_row(r)?;
            if budget.user_id != user {
                return Ok(None);
            }
            Ok(Some(budget))
        }
        None => Ok(None),
    }
}

pub fn save(conn: &Connection, user: &str, mut budget: Budget) -> Result<Budget> {
    budget.user_id = user.to_string();
    if budget.id.is_empty() {
        budget.id = new_id();
    }
    conn.execute(
        "INSERT INTO budgets(id, user_id, category_id, month, year, amount)
         VALUES (?1,?2,?3,?4,?5,?6)
         ON CONFLICT(id) DO UPDATE SET
             user_id=excluded.user_id, category_id=excluded.category_id,
             month=excluded.month, year=excluded.year, amount=excluded.amount",
        params![
            budget.id,
            budget.user_id,
            budget.category_id,
            budget.month,
            budget.year,
            budget.amount.to_string(),
        ],
    )?;
    Ok(budget)
}

pub fn save_all(conn: &mut Connection, user: &str, budgets: Vec<Budget>) -> Result<Vec<Budget>> {
    let tx = conn.transaction()?;
    let mut out = Vec::with_capacity(budgets.len());
    for budget in budgets {
        out.push(save(&tx, user, budget)?);
    }
    tx.commit()?;
    Ok(out)
}

pub fn delete_by_id(conn: &Connection, user: &str, id: &str) -> Result<()> {
    if find_by_id(conn, user, id)?.is_some() {
        conn.execute("DELETE FROM budgets WHERE id=?1", params![id])?;
    }
    Ok(())
}
