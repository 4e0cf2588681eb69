// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

use crate::models::{Account, AccountType};
use crate::utils::{new_id, parse_decimal};

const COLS: &str = "id, user_id, name, type, initial_balance, closing_day, due_day, is_default";

fn read_row(r: &rusqlite::Row) -> Result<Account> {
    let type_s: String = r.get(3)?;
    let balance: Option<String> = r.get(4)?;
    Ok(Account {
        id: r.get(0)?,
        user_id: r.get(1)?,
        name: r.get(2)?,
        r#type: AccountType::parse(&type_s)?,
        initial_balance: balance.as_deref().map(parse_decimal).transpose()?,
        closing_day: r.get(5)?,
        due_day: r.get(6)?,
        is_default: r.get::<_, bool>(7)?,
    })
}

pub fn find_all(conn: &Connection, user: &str) -> Result<Vec<Account>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLS} FROM accounts WHERE user_id=?1 ORDER BY name"
    ))?;
    let mut rows = stmt.query(params![user])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(read_row(r)?);
    }
    Ok(out)
}

pub fn find_by_id(conn: &Connection, user: &str, id: &str) -> Result<Option<Account>> {
    let mut stmt = conn.prepare(&format!("SELECT {COLS} FROM accounts WHERE id=?1"))?;
    let mut rows = stmt.query(params![id])?;
    match rows.next()? {
        Some(r) => {
            let account = read_row(r)?;
            if account.user_id != user {
                return Ok(None);
            }
            Ok(Some(account))
        }
        None => Ok(None),
    }
}

/// Upsert an account for the acting user. When the incoming record is marked
/// default, the previous default of the same type loses its flag first
/// (read-then-write; concurrent default-setters can race, accepted).
pub fn save(conn: &Connection, user: &str, mut account: Account) -> Result<Account> {
    account.user_id = user.to_string();
    if account.id.is_empty() {
        account.id = new_id();
    }

    if account.is_default {
        let current: Option<String> = conn
            .query_row(
                "SELECT id FROM accounts WHERE user_id=?1 AND type=?2 AND is_default=1 AND id<>?3",
                params![user, account.r#type.as_str(), account.id],
                |r| r.get(0),
            )
            .optional()?;
        if let Some(old_id) = current {
            conn.execute(
                "UPDATE accounts SET is_default=0 WHERE id=?1",
                params![old_id],
            )?;
        }
    }

    conn.execute(
        "INSERT INTO accounts(id, user_id, name, type, initial_balance, closing_day, due_day, is_default)
         VALUES (?1,?2,?3,?4,?5,?6,?7,?8)
         ON CONFLICT(id) DO UPDATE SET
             user_id=excluded.user_id, name=excluded.name, type=excluded.type,
             initial_balance=excluded.initial_balance, closing_day=excluded.closing_day,
             due_day=excluded.due_day, is_default=excluded.is_default",
        params![
            account.id,
            account.user_id,
            account.name,
            account.r#type.as_str(),
            account.initial_balance.map(|d| d.to_string()),
            account.closing_day,
            account.due_day,
            account.is_default,
        ],
    )?;
    Ok(account)
}

/// Batch upsert in a single transaction; any failure rolls the batch back.
pub fn save_all(conn: &mut Connection, user: &str, accounts: Vec<Account>) -> Result<Vec<Account>> {
    let tx = conn.transaction()?;
    let mut out = Vec::with_capacity(accounts.len());
    for account in accounts {
        out.push(save(&tx, user, account)?);
    }
    tx.commit()?;
    Ok(out)
}

/// Idempotent: deleting an absent or foreign-owned id is a silent no-op.
pub fn delete_by_id(conn: &Connection, user: &str, id: &str) -> Result<()> {
    if find_by_id(conn, user, id)?.is_some() {
        conn.execute("DELETE FROM accounts WHERE id=?1", params![id])?;
    }
    Ok(())
}
