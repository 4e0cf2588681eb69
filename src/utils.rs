// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

use crate::models::TransactionSplit;

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Budget months are 0-11 (January = 0), matching the API contract.
pub fn parse_budget_month(s: &str) -> Result<u32> {
    let m: u32 = s
        .parse()
        .with_context(|| format!("Invalid month '{}', expected 0-11", s))?;
    if m > 11 {
        anyhow::bail!("Invalid month {}, expected 0-11", m);
    }
    Ok(m)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// Resolve one of the acting user's accounts by name.
pub fn id_for_account(conn: &Connection, user: &str, name: &str) -> Result<String> {
    let mut stmt = conn.prepare("SELECT id FROM accounts WHERE user_id=?1 AND name=?2")?;
    let id: String = stmt
        .query_row(params![user, name], |r| r.get(0))
        .with_context(|| format!("Account '{}' not found", name))?;
    Ok(id)
}

pub fn encode_split(split: &[TransactionSplit]) -> Result<Option<String>> {
    if split.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::to_string(split)?))
}

pub fn decode_split(raw: Option<String>) -> Result<Vec<TransactionSplit>> {
    match raw {
        Some(s) if !s.is_empty() => {
            serde_json::from_str(&s).with_context(|| format!("Invalid split JSON '{}'", s))
        }
        _ => Ok(Vec::new()),
    }
}

pub fn fmt_opt_decimal(d: &Option<Decimal>) -> String {
    d.map(|v| v.round_dp(2).to_string()).unwrap_or_default()
}
