// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TransactionType};
use crate::services::transactions;
use crate::utils::{parse_date, parse_decimal};
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use rusqlite::{params, Connection};
use std::collections::{hash_map::Entry, HashMap, HashSet};

pub fn handle(conn: &mut Connection, user: &str, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(conn, user, sub),
        _ => Ok(()),
    }
}

/// CSV columns: date,description,amount,type,category,account,fitid.
/// Rows whose non-empty fitid already exists for the acting user are skipped
/// (safe OFX re-import). The whole file is one transaction.
fn import_transactions(conn: &mut Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let tx = conn.transaction()?;
    let mut account_cache: HashMap<String, String> = HashMap::new();
    let mut seen_fitids: HashSet<String> = HashSet::new();
    let mut imported = 0usize;
    let mut skipped = 0usize;

    for result in rdr.records() {
        let rec = result?;
        let date_raw = rec.get(0).context("date missing")?.trim();
        let description = rec.get(1).context("description missing")?.trim().to_string();
        let amount_raw = rec.get(2).context("amount missing")?.trim();
        let type_raw = rec.get(3).context("type missing")?.trim();
        let category = rec
            .get(4)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());
        let account = rec.get(5).map(|s| s.trim()).unwrap_or("");
        let fitid = rec
            .get(6)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());

        let date = parse_date(date_raw)
            .with_context(|| format!("Invalid transaction date '{}'", date_raw))?;
        let amount = parse_decimal(amount_raw)
            .with_context(|| format!("Invalid amount '{}' for {}", amount_raw, description))?;
        let r#type = TransactionType::parse(type_raw)?;

        if let Some(ref f) = fitid {
            if seen_fitids.contains(f) || transactions::exists_fitid(&tx, user, f)? {
                skipped += 1;
                continue;
            }
            seen_fitids.insert(f.clone());
        }

        let account_id = if account.is_empty() {
            None
        } else {
            let id = match account_cache.entry(account.to_string()) {
                Entry::Occupied(entry) => entry.get().clone(),
                Entry::Vacant(entry) => {
                    let fetched: String = tx
                        .query_row(
                            "SELECT id FROM accounts WHERE user_id=?1 AND name=?2",
                            params![user, account],
                            |r| r.get(0),
                        )
                        .with_context(|| format!("Account '{}' not found", account))?;
                    entry.insert(fetched).clone()
                }
            };
            Some(id)
        };

        transactions::save(
            &tx,
            user,
            Transaction {
                id: String::new(),
                user_id: String::new(),
                description,
                amount,
                date: date.to_string(),
                category,
                r#type,
                is_applied: true,
                observations: None,
                account_id,
                fitid,
                split: Vec::new(),
                invoice_month: None,
                batch_id: None,
                installment_number: None,
                total_installments: None,
            },
        )?;
        imported += 1;
    }
    tx.commit()?;
    println!(
        "Imported {} transaction(s) from {} ({} duplicate(s) skipped)",
        imported, path, skipped
    );
    Ok(())
}
