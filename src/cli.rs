// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("finpro")
        .about("User-scoped personal finance backend: accounts, budgets, categories, goals, transactions")
        .version(clap::crate_version!())
        .arg(
            Arg::new("user")
                .long("user")
                .global(true)
                .default_value("local")
                .help("Acting user id; every command is scoped to this user"),
        )
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("account")
                .about("Manage accounts")
                .subcommand(
                    Command::new("add")
                        .about("Create an account")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("BANK, CREDIT_CARD or INVESTMENT"),
                        )
                        .arg(
                            Arg::new("initial-balance")
                                .long("initial-balance")
                                .help("Opening balance (BANK/INVESTMENT)"),
                        )
                        .arg(
                            Arg::new("closing-day")
                                .long("closing-day")
                                .value_parser(clap::value_parser!(u32))
                                .help("Statement closing day (CREDIT_CARD)"),
                        )
                        .arg(
                            Arg::new("due-day")
                                .long("due-day")
                                .value_parser(clap::value_parser!(u32))
                                .help("Payment due day (CREDIT_CARD)"),
                        )
                        .arg(
                            Arg::new("default")
                                .long("default")
                                .action(ArgAction::SetTrue)
                                .help("Mark as the default account for its type"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List accounts")))
                .subcommand(
                    Command::new("update")
                        .about("Update an account by id")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("initial-balance").long("initial-balance"))
                        .arg(
                            Arg::new("closing-day")
                                .long("closing-day")
                                .value_parser(clap::value_parser!(u32)),
                        )
                        .arg(
                            Arg::new("due-day")
                                .long("due-day")
                                .value_parser(clap::value_parser!(u32)),
                        ),
                )
                .subcommand(
                    Command::new("set-default")
                        .about("Make an account the default for its type")
                        .arg(Arg::new("id").long("id").required(true)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an account by id")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .about("Create a category")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("INCOME, EXPENSE, TRANSFER_OUT or TRANSFER_IN"),
                        )
                        .arg(
                            Arg::new("subtype")
                                .long("subtype")
                                .help("FIXA or VARIAVEL"),
                        )
                        .arg(Arg::new("icon").long("icon"))
                        .arg(
                            Arg::new("no-budget")
                                .long("no-budget")
                                .action(ArgAction::SetTrue)
                                .help("Exclude from budget impact"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List categories")))
                .subcommand(
                    Command::new("update")
                        .about("Update a category by id")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("icon").long("icon")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a category by id (rejected while in use)")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Manage monthly category budgets")
                .subcommand(
                    Command::new("set")
                        .about("Create a budget entry")
                        .arg(Arg::new("category-id").long("category-id").required(true))
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .required(true)
                                .help("0-11 (January = 0)"),
                        )
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .required(true)
                                .value_parser(clap::value_parser!(i32)),
                        )
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(json_flags(Command::new("list").about("List budgets")))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a budget by id")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .help("YYYY-MM-DD"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("INCOME, EXPENSE, TRANSFER_OUT or TRANSFER_IN"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Category name"),
                        )
                        .arg(
                            Arg::new("account")
                                .long("account")
                                .help("Account name to book against"),
                        )
                        .arg(Arg::new("observations").long("observations"))
                        .arg(
                            Arg::new("applied")
                                .long("applied")
                                .action(ArgAction::SetTrue)
                                .help("Mark as already applied/cleared"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List transactions")))
                .subcommand(json_flags(
                    Command::new("range")
                        .about("List transactions in an inclusive date range")
                        .arg(
                            Arg::new("start")
                                .long("start")
                                .required(true)
                                .help("YYYY-MM-DD"),
                        )
                        .arg(
                            Arg::new("end")
                                .long("end")
                                .required(true)
                                .help("YYYY-MM-DD"),
                        ),
                ))
                .subcommand(
                    Command::new("update")
                        .about("Update a transaction by id")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("applied")
                                .long("applied")
                                .action(ArgAction::SetTrue),
                        ),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").long("id").required(true)),
                )
                .subcommand(
                    Command::new("rm-batch")
                        .about("Delete many transactions; foreign ids are skipped")
                        .arg(
                            Arg::new("ids")
                                .long("ids")
                                .required(true)
                                .value_delimiter(',')
                                .help("Comma-separated transaction ids"),
                        ),
                ),
        )
        .subcommand(
            Command::new("goal")
                .about("Manage financial goals")
                .subcommand(
                    Command::new("add")
                        .about("Create a goal tied to an account")
                        .arg(Arg::new("account").long("account").required(true))
                        .arg(
                            Arg::new("target-amount")
                                .long("target-amount")
                                .required(true),
                        )
                        .arg(
                            Arg::new("target-date")
                                .long("target-date")
                                .required(true)
                                .help("YYYY-MM-DD"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List goals")))
                .subcommand(
                    Command::new("update")
                        .about("Update a goal by id")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("target-amount").long("target-amount"))
                        .arg(Arg::new("target-date").long("target-date")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a goal by id")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("wealth")
                .about("Per-user wealth configuration")
                .subcommand(json_flags(Command::new("get").about("Show the config")))
                .subcommand(
                    Command::new("set")
                        .about("Set the passive income goal")
                        .arg(
                            Arg::new("passive-income-goal")
                                .long("passive-income-goal")
                                .required(true),
                        ),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Import data")
                .subcommand(
                    Command::new("transactions")
                        .about("Import transactions from CSV (fitid-deduplicated)")
                        .arg(Arg::new("path").long("path").required(true)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("transactions")
                        .about("Export the user's transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv or json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("reset")
                .about("Delete ALL data owned by the acting user")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Confirm the wipe"),
                ),
        )
}
