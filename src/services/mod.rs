// Copyright (c) 2025 Finpro Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

// One service module per entity. Every function takes the acting user as an
// explicit parameter; a record whose user_id does not match is treated as
// not found, never as an error.

pub mod accounts;
pub mod budgets;
pub mod categories;
pub mod goals;
pub mod transactions;
pub mod wealth;
pub mod reset;
