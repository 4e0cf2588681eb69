// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TransactionType};
use crate::services::transactions;
use crate::utils::{id_for_account, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &mut Connection, user: &str, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, user, sub),
        Some(("list", sub)) => list(conn, user, sub),
        Some(("range", sub)) => range(conn, user, sub),
        Some(("update", sub)) => update(conn, user, sub),
        Some(("rm", sub)) => rm(conn, user, sub),
        Some(("rm-batch", sub)) => rm_batch(conn, user, sub),
        _ => Ok(()),
    }
}

fn add(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let account_id = sub
        .get_one::<String>("account")
        .map(|name| id_for_account(conn, user, name))
        .transpose()?;
    let transaction = Transaction {
        id: String::new(),
        user_id: String::new(),
        description: sub.get_one::<String>("description").unwrap().clone(),
        amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
        date: date.to_string(),
        category: sub.get_one::<String>("category").cloned(),
        r#type: TransactionType::parse(sub.get_one::<String>("type").unwrap())?,
        is_applied: sub.get_flag("applied"),
        observations: sub.get_one::<String>("observations").cloned(),
        account_id,
        fitid: None,
        split: Vec::new(),
        invoice_month: None,
        batch_id: None,
        installment_number: None,
        total_installments: None,
    };
    let saved = transactions::save(conn, user, transaction)?;
    println!(
        "Recorded {} on {} '{}' id {}",
        saved.amount, saved.date, saved.description, saved.id
    );
    Ok(())
}

fn print_rows(data: &[Transaction]) {
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|t| {
            vec![
                t.id.clone(),
                t.date.clone(),
                t.description.clone(),
                t.amount.to_string(),
                t.r#type.as_str().to_string(),
                t.category.clone().unwrap_or_default(),
                if t.is_applied { "yes".into() } else { String::new() },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Id", "Date", "Description", "Amount", "Type", "Category", "Applied"],
            rows,
        )
    );
}

fn list(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let data = transactions::find_all(conn, user)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        print_rows(&data);
    }
    Ok(())
}

fn range(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let start = parse_date(sub.get_one::<String>("start").unwrap())?;
    let end = parse_date(sub.get_one::<String>("end").unwrap())?;
    let data =
        transactions::find_by_date_range(conn, user, &start.to_string(), &end.to_string())?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        print_rows(&data);
    }
    Ok(())
}

fn update(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let Some(mut transaction) = transactions::find_by_id(conn, user, id)? else {
        println!("Transaction '{}' not found", id);
        return Ok(());
    };
    if let Some(description) = sub.get_one::<String>("description") {
        transaction.description = description.clone();
    }
    if let Some(amount) = sub.get_one::<String>("amount") {
        transaction.amount = parse_decimal(amount)?;
    }
    if let Some(date) = sub.get_one::<String>("date") {
        transaction.date = parse_date(date)?.to_string();
    }
    if let Some(category) = sub.get_one::<String>("category") {
        transaction.category = Some(category.clone());
    }
    if sub.get_flag("applied") {
        transaction.is_applied = true;
    }
    transaction.id = id.clone();
    transactions::save(conn, user, transaction)?;
    println!("Updated transaction '{}'", id);
    Ok(())
}

fn rm(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    transactions::delete_by_id(conn, user, id)?;
    println!("Removed transaction '{}'", id);
    Ok(())
}

fn rm_batch(conn: &mut Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let ids: Vec<String> = sub
        .get_many::<String>("ids")
        .unwrap()
        .cloned()
        .collect();
    transactions::delete_batch(conn, user, &ids)?;
    println!("Removed {} transaction id(s) (foreign ids skipped)", ids.len());
    Ok(())
}
