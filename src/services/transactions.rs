// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::{params, Connection};

use crate::models::{Transaction, TransactionType};
use crate::utils::{decode_split, encode_split, new_id, parse_decimal};

const COLS: &str = "id, user_id, description, amount, date, category, type, is_applied, \
                    observations, account_id, fitid, split, invoice_month, batch_id, \
                    installment_number, total_installments";

fn read_row(r: &rusqlite::Row) -> Result<Transaction> {
    let amount_s: String = r.get(3)?;
    let type_s: String = r.get(6)?;
    let split_s: Option<String> = r.get(11)?;
    Ok(Transaction {
        id: r.get(0)?,
        user_id: r.get(1)?,
        description: r.get(2)?,
        amount: parse_decimal(&amount_s)?,
        date: r.get(4)?,
        category: r.get(5)?,
        r#type: TransactionType::parse(&type_s)?,
        is_applied: r.get::<_, bool>(7)?,
        observations: r.get(8)?,
        account_id: r.get(9)?,
        fitid: r.get(10)?,
        split: decode_split(split_s)?,
        invoice_month: r.get(12)?,
        batch_id: r.get(13)?,
        installment_number: r.get(14)?,
        total_installments: r.get(15)?,
    })
}

pub fn find_all(conn: &Connection, user: &str) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLS} FROM transactions WHERE user_id=?1 ORDER BY date DESC, id"
    ))?;
    let mut rows = stmt.query(params![user])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(read_row(r)?);
    }
    Ok(out)
}

/// Inclusive bounds, both ISO YYYY-MM-DD. Lexicographic order on ISO strings
/// is chronological order, so a plain BETWEEN does the range scan.
pub fn find_by_date_range(
    conn: &Connection,
    user: &str,
    start: &str,
    end: &str,
) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLS} FROM transactions WHERE user_id=?1 AND date BETWEEN ?2 AND ?3 \
         ORDER BY date, id"
    ))?;
    let mut rows = stmt.query(params![user, start, end])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(read_row(r)?);
    }
    Ok(out)
}

pub fn find_by_id(conn: &Connection, user: &str, id: &str) -> Result<Option<Transaction>> {
    let mut stmt = conn.prepare(&format!("SELECT {COLS} FROM transactions WHERE id=?1"))?;
    let mut rows = stmt.query(params![id])?;
    match rows.next()? {
        Some(r) => {
            let transaction = read_row(r)?;
            if transaction.user_id != user {
                return Ok(None);
            }
            Ok(Some(transaction))
        }
        None => Ok(None),
    }
}

/// Whether the acting user already has a transaction imported under this
/// OFX fitid. Backs the import dedup.
pub fn exists_fitid(conn: &Connection, user: &str, fitid: &str) -> Result<bool> {
    let found: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM transactions WHERE user_id=?1 AND fitid=?2)",
        params![user, fitid],
        |r| r.get(0),
    )?;
    Ok(found)
}

pub fn save(conn: &Connection, user: &str, mut transaction: Transaction) -> Result<Transaction> {
    transaction.user_id = user.to_string();
    if transaction.id.is_empty() {
        transaction.id = new_id();
    }
    conn.execute(
        "INSERT INTO transactions(id, user_id, description, amount, date, category, type, \
             is_applied, observations, account_id, fitid, split, invoice_month, batch_id, \
             installment_number, total_installments)
         VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12,?13,?14,?15,?16)
         ON CONFLICT(id) DO UPDATE SET
             user_id=excluded.user_id, description=excluded.description,
             amount=excluded.amount, date=excluded.date, category=excluded.category,
             type=excluded.type, is_applied=excluded.is_applied,
             observations=excluded.observations, account_id=excluded.account_id,
             fitid=excluded.fitid, split=excluded.split,
             invoice_month=excluded.invoice_month, batch_id=excluded.batch_id,
             installment_number=excluded.installment_number,
             total_installments=excluded.total_installments",
        params![
            transaction.id,
            transaction.user_id,
            transaction.description,
            transaction.amount.to_string(),
            transaction.date,
            transaction.category,
            transaction.r#type.as_str(),
            transaction.is_applied,
            transaction.observations,
            transaction.account_id,
            transaction.fitid,
            encode_split(&transaction.split)?,
            transaction.invoice_month,
            transaction.batch_id,
            transaction.installment_number,
            transaction.total_installments,
        ],
    )?;
    Ok(transaction)
}

pub fn save_all(
    conn: &mut Connection,
    user: &str,
    transactions: Vec<Transaction>,
) -> Result<Vec<Transaction>> {
    let tx = conn.transaction()?;
    let mut out = Vec::with_capacity(transactions.len());
    for transaction in transactions {
        out.push(save(&tx, user, transaction)?);
    }
    tx.commit()?;
    Ok(out)
}

pub fn delete_by_id(conn: &Connection, user: &str, id: &str) -> Result<()> {
    if find_by_id(conn, user, id)?.is_some() {
        conn.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
    }
    Ok(())
}

/// Delete many by id. Ids that are absent or owned by another user are
/// dropped silently; the owned subset goes in one transaction.
pub fn delete_batch(conn: &mut Connection, user: &str, ids: &[String]) -> Result<()> {
    let tx = conn.transaction()?;
    for id in ids {
        if find_by_id(&tx, user, id)?.is_some() {
            tx.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
        }
    }
    tx.commit()?;
    Ok(())
}
