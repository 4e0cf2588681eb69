// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.finpro", "Finpro", "finpro"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("finpro.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let mut conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&mut conn)?;
    Ok(conn)
}

/// Create all tables if missing. Referential rules (category-in-use, account
/// ownership) are enforced in the service layer, not by SQL constraints.
pub fn init_schema(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS accounts(
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        name TEXT NOT NULL,
        type TEXT NOT NULL,
        initial_balance TEXT,          -- BANK / INVESTMENT only
        closing_day INTEGER,           -- CREDIT_CARD only
        due_day INTEGER,               -- CREDIT_CARD only
        is_default INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_accounts_user ON accounts(user_id);

    CREATE TABLE IF NOT EXISTS categories(
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        name TEXT NOT NULL,
        type TEXT NOT NULL,
        subtype TEXT,
        impacts_budget INTEGER NOT NULL DEFAULT 1,
        icon TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_categories_user ON categories(user_id);

    CREATE TABLE IF NOT EXISTS budgets(
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        category_id TEXT NOT NULL,
        month INTEGER NOT NULL,        -- 0-11
        year INTEGER NOT NULL,
        amount TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_budgets_user ON budgets(user_id);

    CREATE TABLE IF NOT EXISTS transactions(
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        description TEXT NOT NULL,
        amount TEXT NOT NULL,
        date TEXT NOT NULL,            -- ISO YYYY-MM-DD, string order == date order
        category TEXT,                 -- category referenced by name
        type TEXT NOT NULL,
        is_applied INTEGER NOT NULL DEFAULT 0,
        observations TEXT,
        account_id TEXT,
        fitid TEXT,                    -- OFX import dedup key
        split TEXT,                    -- JSON [{categoryName, amount}]
        invoice_month TEXT,
        batch_id TEXT,
        installment_number INTEGER,
        total_installments INTEGER
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_user_date ON transactions(user_id, date);

    CREATE TABLE IF NOT EXISTS financial_goals(
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        account_id TEXT NOT NULL,
        target_amount TEXT NOT NULL,
        target_date TEXT NOT NULL      -- ISO YYYY-MM-DD
    );
    CREATE INDEX IF NOT EXISTS idx_financial_goals_user ON financial_goals(user_id);

    CREATE TABLE IF NOT EXISTS wealth_config(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id TEXT NOT NULL,
        passive_income_goal TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_wealth_config_user ON wealth_config(user_id);
    "#,
    )?;
    Ok(())
}
