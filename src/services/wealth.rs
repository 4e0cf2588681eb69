// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

use crate::models::WealthConfig;
use crate::utils::parse_decimal;

fn find_by_user(conn: &Connection, user: &str) -> Result<Option<WealthConfig>> {
    let row: Option<(i64, String, String)> = conn
        .query_row(
            "SELECT id, user_id, passive_income_goal FROM wealth_config WHERE user_id=?1",
            params![user],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )
        .optional()?;
    match row {
        Some((id, user_id, goal_s)) => Ok(Some(WealthConfig {
            id: Some(id),
            user_id,
            passive_income_goal: parse_decimal(&goal_s)?,
        })),
        None => Ok(None),
    }
}

/// The user's config row, or a zero-value default. The default is not
/// persisted by the read.
pub fn get(conn: &Connection, user: &str) -> Result<WealthConfig> {
    Ok(find_by_user(conn, user)?.unwrap_or_else(|| WealthConfig::default_for(user)))
}

/// Upsert the per-user singleton: an existing row's id is forced onto the
/// incoming record so the write is an update, not a second insert. Two
/// concurrent first-time saves can still race; accepted limitation.
pub fn save(conn: &Connection, user: &str, mut config: WealthConfig) -> Result<WealthConfig> {
    if let Some(existing) = find_by_user(conn, user)? {
        config.id = existing.id;
    }
    config.user_id = user.to_string();

    match config.id {
        Some(id) => {
            conn.execute(
                "UPDATE wealth_config SET user_id=?1, passive_income_goal=?2 WHERE id=?3",
                params![config.user_id, config.passive_income_goal.to_string(), id],
            )?;
        }
        None => {
            conn.execute(
                "INSERT INTO wealth_config(user_id, passive_income_goal) VALUES (?1,?2)",
                params![config.user_id, config.passive_income_goal.to_string()],
            )?;
            config.id = Some(conn.last_insert_rowid());
        }
    }
    Ok(config)
}
