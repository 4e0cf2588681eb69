// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::WealthConfig;
use crate::services::wealth;
use crate::utils::{maybe_print_json, parse_decimal};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, user: &str, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("get", sub)) => {
            let config = wealth::get(conn, user)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &config)? {
                println!("Passive income goal: {}", config.passive_income_goal);
            }
            Ok(())
        }
        Some(("set", sub)) => {
            let goal = parse_decimal(sub.get_one::<String>("passive-income-goal").unwrap())?;
            let saved = wealth::save(
                conn,
                user,
                WealthConfig {
                    id: None,
                    user_id: String::new(),
                    passive_income_goal: goal,
                },
            )?;
            println!("Passive income goal set to {}", saved.passive_income_goal);
            Ok(())
        }
        _ => Ok(()),
    }
}
