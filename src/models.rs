// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Field names follow the JSON contract of the REST API (camelCase). Records
// arriving without an id get a server-assigned uuid on save; userId supplied
// by a caller is always overwritten with the acting user.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    #[serde(rename = "BANK")]
    Bank,
    #[serde(rename = "CREDIT_CARD")]
    CreditCard,
    #[serde(rename = "INVESTMENT")]
    Investment,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Bank => "BANK",
            AccountType::CreditCard => "CREDIT_CARD",
            AccountType::Investment => "INVESTMENT",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "BANK" => Ok(AccountType::Bank),
            "CREDIT_CARD" => Ok(AccountType::CreditCard),
            "INVESTMENT" => Ok(AccountType::Investment),
            other => Err(anyhow!("Unknown account type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "INCOME")]
    Income,
    #[serde(rename = "EXPENSE")]
    Expense,
    #[serde(rename = "TRANSFER_OUT")]
    TransferOut,
    #[serde(rename = "TRANSFER_IN")]
    TransferIn,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
            TransactionType::TransferOut => "TRANSFER_OUT",
            TransactionType::TransferIn => "TRANSFER_IN",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "INCOME" => Ok(TransactionType::Income),
            "EXPENSE" => Ok(TransactionType::Expense),
            "TRANSFER_OUT" => Ok(TransactionType::TransferOut),
            "TRANSFER_IN" => Ok(TransactionType::TransferIn),
            other => Err(anyhow!("Unknown transaction type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategorySubtype {
    #[serde(rename = "FIXA")]
    Fixed,
    #[serde(rename = "VARIAVEL")]
    Variable,
}

impl CategorySubtype {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategorySubtype::Fixed => "FIXA",
            CategorySubtype::Variable => "VARIAVEL",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "FIXA" => Ok(CategorySubtype::Fixed),
            "VARIAVEL" => Ok(CategorySubtype::Variable),
            other => Err(anyhow!("Unknown category subtype '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub name: String,
    pub r#type: AccountType,
    pub initial_balance: Option<Decimal>, // BANK / INVESTMENT only
    pub closing_day: Option<u32>,         // CREDIT_CARD only
    pub due_day: Option<u32>,             // CREDIT_CARD only
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub name: String,
    pub r#type: TransactionType,
    pub subtype: Option<CategorySubtype>,
    #[serde(default = "default_true")]
    pub impacts_budget: bool,
    pub icon: Option<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub category_id: String,
    pub month: u32, // 0-11
    pub year: i32,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSplit {
    pub category_name: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub description: String,
    pub amount: Decimal,
    pub date: String, // ISO YYYY-MM-DD
    pub category: Option<String>,
    pub r#type: TransactionType,
    #[serde(default)]
    pub is_applied: bool,
    pub observations: Option<String>,
    pub account_id: Option<String>,
    pub fitid: Option<String>,
    #[serde(default)]
    pub split: Vec<TransactionSplit>,
    pub invoice_month: Option<String>,
    pub batch_id: Option<String>,
    pub installment_number: Option<u32>,
    pub total_installments: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialGoal {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub account_id: String,
    pub target_amount: Decimal,
    pub target_date: String, // ISO YYYY-MM-DD
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WealthConfig {
    pub id: Option<i64>,
    #[serde(default)]
    pub user_id: String,
    pub passive_income_goal: Decimal,
}

impl WealthConfig {
    /// Zero-value config returned when a user has no persisted row.
    pub fn default_for(user_id: &str) -> Self {
        WealthConfig {
            id: None,
            user_id: user_id.to_string(),
            passive_income_goal: Decimal::ZERO,
        }
    }
}
