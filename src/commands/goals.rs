// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::FinancialGoal;
use crate::services::goals;
use crate::utils::{id_for_account, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, user: &str, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, user, sub),
        Some(("list", sub)) => list(conn, user, sub),
        Some(("update", sub)) => update(conn, user, sub),
        Some(("rm", sub)) => rm(conn, user, sub),
        _ => Ok(()),
    }
}

fn add(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let account_id = id_for_account(conn, user, sub.get_one::<String>("account").unwrap())?;
    let goal = FinancialGoal {
        id: String::new(),
        user_id: String::new(),
        account_id,
        target_amount: parse_decimal(sub.get_one::<String>("target-amount").unwrap())?,
        target_date: parse_date(sub.get_one::<String>("target-date").unwrap())?.to_string(),
    };
    let saved = goals::save(conn, user, goal)?;
    println!(
        "Added goal {} by {} id {}",
        saved.target_amount, saved.target_date, saved.id
    );
    Ok(())
}

fn list(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let data = goals::find_all(conn, user)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|g| {
                vec![
                    g.id.clone(),
                    g.account_id.clone(),
                    g.target_amount.to_string(),
                    g.target_date.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Account", "Target", "By"], rows)
        );
    }
    Ok(())
}

fn update(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let Some(mut goal) = goals::find_by_id(conn, user, id)? else {
        println!("Goal '{}' not found", id);
        return Ok(());
    };
    if let Some(amount) = sub.get_one::<String>("target-amount") {
        goal.target_amount = parse_decimal(amount)?;
    }
    if let Some(date) = sub.get_one::<String>("target-date") {
        goal.target_date = parse_date(date)?.to_string();
    }
    goal.id = id.clone();
    goals::save(conn, user, goal)?;
    println!("Updated goal '{}'", id);
    Ok(())
}

fn rm(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    goals::delete_by_id(conn, user, id)?;
    println!("Removed goal '{}'", id);
    Ok(())
}
