// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use finpro::{cli, commands, db};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    // Acting-user resolution lives here, not in the services: the CLI is the
    // hosting layer and hands an explicit user id to every call.
    let user = matches
        .get_one::<String>("user")
        .cloned()
        .unwrap_or_else(|| "local".into());

    let mut conn = db::open_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("account", sub)) => commands::accounts::handle(&conn, &user, sub)?,
        Some(("category", sub)) => commands::categories::handle(&conn, &user, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&conn, &user, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut conn, &user, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&conn, &user, sub)?,
        Some(("wealth", sub)) => commands::wealth::handle(&conn, &user, sub)?,
        Some(("import", sub)) => commands::importer::handle(&mut conn, &user, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&conn, &user, sub)?,
        Some(("reset", sub)) => commands::data::handle(&mut conn, &user, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
