// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod categories;
pub mod budgets;
pub mod transactions;
pub mod goals;
pub mod wealth;
pub mod data;
pub mod importer;
pub mod exporter;
