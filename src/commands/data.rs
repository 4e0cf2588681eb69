// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::services::reset;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &mut Connection, user: &str, m: &clap::ArgMatches) -> Result<()> {
    if !m.get_flag("yes") {
        println!("This deletes ALL data for user '{}'. Re-run with --yes to confirm.", user);
        return Ok(());
    }
    reset::reset_user_data(conn, user)?;
    println!("All data for user '{}' removed", user);
    Ok(())
}
