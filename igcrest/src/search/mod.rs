// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Search request construction

pub mod condition;
pub mod query;

pub use condition::{ConditionSet, Criterion, LogicalOperator, Operator, SearchCondition};
pub use query::{Search, Sort, MAX_PAGE_SIZE};
