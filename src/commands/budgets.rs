// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Budget;
use crate::services::budgets;
use crate::utils::{maybe_print_json, parse_budget_month, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, user: &str, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, user, sub),
        Some(("list", sub)) => list(conn, user, sub),
        Some(("rm", sub)) => rm(conn, user, sub),
        _ => Ok(()),
    }
}

fn set(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let budget = Budget {
        id: String::new(),
        user_id: String::new(),
        category_id: sub.get_one::<String>("category-id").unwrap().clone(),
        month: parse_budget_month(sub.get_one::<String>("month").unwrap())?,
        year: *sub.get_one::<i32>("year").unwrap(),
        amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
    };
    let saved = budgets::save(conn, user, budget)?;
    println!(
        "Budget set for {}/{} category {} = {}",
        saved.month, saved.year, saved.category_id, saved.amount
    );
    Ok(())
}

fn list(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let data = budgets::find_all(conn, user)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|b| {
                vec![
                    b.id.clone(),
                    b.category_id.clone(),
                    b.month.to_string(),
                    b.year.to_string(),
                    b.amount.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Category", "Month", "Year", "Amount"], rows)
        );
    }
    Ok(())
}

fn rm(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    budgets::delete_by_id(conn, user, id)?;
    println!("Removed budget '{}'", id);
    Ok(())
}
