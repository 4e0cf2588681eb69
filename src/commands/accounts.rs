// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Account, AccountType};
use crate::services::accounts;
use crate::utils::{fmt_opt_decimal, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, user: &str, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, user, sub),
        Some(("list", sub)) => list(conn, user, sub),
        Some(("update", sub)) => update(conn, user, sub),
        Some(("set-default", sub)) => set_default(conn, user, sub),
        Some(("rm", sub)) => rm(conn, user, sub),
        _ => Ok(()),
    }
}

fn add(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let r#type = AccountType::parse(sub.get_one::<String>("type").unwrap())?;
    let initial_balance = sub
        .get_one::<String>("initial-balance")
        .map(|s| parse_decimal(s))
        .transpose()?;
    let account = Account {
        id: String::new(),
        user_id: String::new(),
        name: name.clone(),
        r#type,
        initial_balance,
        closing_day: sub.get_one::<u32>("closing-day").copied(),
        due_day: sub.get_one::<u32>("due-day").copied(),
        is_default: sub.get_flag("default"),
    };
    let saved = accounts::save(conn, user, account)?;
    println!("Added account '{}' ({}) id {}", saved.name, saved.r#type.as_str(), saved.id);
    Ok(())
}

fn list(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let data = accounts::find_all(conn, user)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|a| {
                vec![
                    a.id.clone(),
                    a.name.clone(),
                    a.r#type.as_str().to_string(),
                    fmt_opt_decimal(&a.initial_balance),
                    if a.is_default { "yes".into() } else { String::new() },
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Name", "Type", "Initial balance", "Default"], rows)
        );
    }
    Ok(())
}

// PUT semantics: load by id (not-found when absent or foreign-owned), force
// the path id onto the record, save.
fn update(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let Some(mut account) = accounts::find_by_id(conn, user, id)? else {
        println!("Account '{}' not found", id);
        return Ok(());
    };
    if let Some(name) = sub.get_one::<String>("name") {
        account.name = name.clone();
    }
    if let Some(balance) = sub.get_one::<String>("initial-balance") {
        account.initial_balance = Some(parse_decimal(balance)?);
    }
    if let Some(day) = sub.get_one::<u32>("closing-day") {
        account.closing_day = Some(*day);
    }
    if let Some(day) = sub.get_one::<u32>("due-day") {
        account.due_day = Some(*day);
    }
    account.id = id.clone();
    accounts::save(conn, user, account)?;
    println!("Updated account '{}'", id);
    Ok(())
}

fn set_default(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let Some(mut account) = accounts::find_by_id(conn, user, id)? else {
        println!("Account '{}' not found", id);
        return Ok(());
    };
    account.is_default = true;
    let saved = accounts::save(conn, user, account)?;
    println!(
        "'{}' is now the default {} account",
        saved.name,
        saved.r#type.as_str()
    );
    Ok(())
}

fn rm(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    accounts::delete_by_id(conn, user, id)?;
    println!("Removed account '{}'", id);
    Ok(())
}
