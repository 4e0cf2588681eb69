// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Business-rule violations that must stay distinguishable from not-found
/// and from plain storage failures. Not-found is never an error here: lookups
/// return `Option` and deletes of missing rows are silent no-ops.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("cannot delete category '{0}': still used by transactions")]
    CategoryUsedByTransactions(String),

    #[error("cannot delete category '{0}': still used by budgets")]
    CategoryUsedByBudgets(String),
}
