// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::DomainError;
use crate::models::{Category, CategorySubtype, TransactionType};
use crate::services::categories;
use crate::utils::{maybe_print_json, pretty_table};
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
    let category = Category {
        id: String::new(),
        user_id: String::new(),
        name: sub.get_one::<String>("name").unwrap().clone(),
        r#type: TransactionType::parse(sub.get_one::<String>("type").unwrap())?,
        subtype: sub
            .get_one::<String>("subtype")
            .map(|s| CategorySubtype::parse(s))
            .transpose()?,
        impacts_budget: !sub.get_flag("no-budget"),
        icon: sub.get_one::<String>("icon").cloned(),
    };
    let saved = categories::save(conn, user, category)?;
    println!("Added category '{}' id {}", saved.name, saved.id);
    Ok(())
}

fn list(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let data = categories::find_all(conn, user)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|c| {
                vec![
                    c.id.clone(),
                    c.name.clone(),
                    c.r#type.as_str().to_string(),
                    c.subtype.map(|s| s.as_str().to_string()).unwrap_or_default(),
                    if c.impacts_budget { "yes".into() } else { "no".into() },
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Name", "Type", "Subtype", "Budget"], rows)
        );
    }
    Ok(())
}

fn update(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let Some(mut category) = categories::find_by_id(conn, user, id)? else {
        println!("Category '{}' not found", id);
        return Ok(());
    };
    if let Some(name) = sub.get_one::<String>("name") {
        category.name = name.clone();
    }
    if let Some(icon) = sub.get_one::<String>("icon") {
        category.icon = Some(icon.clone());
    }
    category.id = id.clone();
    categories::save(conn, user, category)?;
    println!("Updated category '{}'", id);
    Ok(())
}

fn rm(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    // A rejected deletion is reported, not propagated as a failure.
    match categories::delete_by_id(conn, user, id) {
        Ok(()) => {
            println!("Removed category '{}'", id);
            Ok(())
        }
        Err(e) if e.downcast_ref::<DomainError>().is_some() => {
            println!("{}", e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}
