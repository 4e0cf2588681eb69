// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::{params, Connection};

use crate::error::DomainError;
use crate::models::{Category, CategorySubtype, TransactionType};
use crate::utils::new_id;

const COLS: &str = "id, user_id, name, type, subtype, impacts_budget, icon";

fn read_row(r: &rusqlite::Row) -> Result<Category> {
    let type_s: String = r.get(3)?;
    let subtype_s: Option<String> = r.get(4)?;
    Ok(Category {
        id: r.get(0)?,
        user_id: r.get(1)?,
        name: r.get(2)?,
        r#type: TransactionType::parse(&type_s)?,
        subtype: subtype_s.as_deref().map(CategorySubtype::parse).transpose()?,
        impacts_budget: r.get::<_, bool>(5)?,
        icon: r.get(6)?,
    })
}

pub fn find_all(conn: &Connection, user: &str) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLS} FROM categories WHERE user_id=?1 ORDER BY name"
    ))?;
    let mut rows = stmt.query(params![user])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(read_row(r)?);
    }
    Ok(out)
}

pub fn find_by_id(conn: &Connection, user: &str, id: &str) -> Result<Option<Category>> {
    let mut stmt = conn.prepare(&format!("SELECT {COLS} FROM categories WHERE id=?1"))?;
    let mut rows = stmt.query(params![id])?;
    match rows.next()? {
        Some(r) => {
            let category = read_row(r)?;
            if category.user_id != user {
                return Ok(None);
            }
            Ok(Some(category))
        }
        None => Ok(None),
    }
}

pub fn save(conn: &Connection, user: &str, mut category: Category) -> Result<Category> {
    category.user_id = user.to_string();
    if category.id.is_empty() {
        category.id = new_id();
    }
    conn.execute(
        "INSERT INTO categories(id, user_id, name, type, subtype, impacts_budget, icon)
         VALUES (?1,?2,?3,?4,?5,?6,?7)
         ON CONFLICT(id) DO UPDATE SET
             user_id=excluded.user_id, name=excluded.name, type=excluded.type,
             subtype=excluded.subtype, impacts_budget=excluded.impacts_budget, icon=excluded.icon",
        params![
            category.id,
            category.user_id,
            category.name,
            category.r#type.as_str(),
            category.subtype.map(|s| s.as_str()),
            category.impacts_budget,
            category.icon,
        ],
    )?;
    Ok(category)
}

pub fn save_all(
    conn: &mut Connection,
    user: &str,
    categories: Vec<Category>,
) -> Result<Vec<Category>> {
    let tx = conn.transaction()?;
    let mut out = Vec::with_capacity(categories.len());
    for category in categories {
        out.push(save(&tx, user, category)?);
    }
    tx.commit()?;
    Ok(out)
}

/// Deleting a category still referenced by the user's transactions (by name)
/// or budgets (by id) is rejected with a domain error. An absent or
/// foreign-owned id is still a silent no-op.
pub fn delete_by_id(conn: &Connection, user: &str, id: &str) -> Result<()> {
    let Some(category) = find_by_id(conn, user, id)? else {
        return Ok(());
    };

    let used_in_transactions: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM transactions WHERE user_id=?1 AND category=?2)",
        params![user, category.name],
        |r| r.get(0),
    )?;
    if used_in_transactions {
        return Err(DomainError::CategoryUsedByTransactions(category.name).into());
    }

    let used_in_budgets: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM budgets WHERE user_id=?1 AND category_id=?2)",
        params![user, id],
        |r| r.get(0),
    )?;
    if used_in_budgets {
        return Err(DomainError::CategoryUsedByBudgets(category.name).into());
    }

    conn.execute("DELETE FROM categories WHERE id=?1", params![id])?;
    Ok(())
}
