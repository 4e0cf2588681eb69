// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::{params, Connection};

/// Wipe every record the acting user owns, in one SQLite transaction.
///
/// The order is load-bearing: transactions and budgets go before categories
/// because the category in-use guard would otherwise block the implicit
/// deletes. Other users' rows are untouched.
pub fn reset_user_data(conn: &mut Connection, user: &str) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM transactions WHERE user_id=?1", params![user])?;
    tx.execute("DELETE FROM budgets WHERE user_id=?1", params![user])?;
    tx.execute("DELETE FROM financial_goals WHERE user_id=?1", params![user])?;
    tx.execute("DELETE FROM categories WHERE user_id=?1", params![user])?;
    tx.execute("DELETE FROM accounts WHERE user_id=?1", params![user])?;
    tx.execute("DELETE FROM wealth_config WHERE user_id=?1", params![user])?;
    tx.commit()?;
    Ok(())
}
