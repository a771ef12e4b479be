// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for igcrest
//!
//! Browses the built-in type catalog, fetches and searches assets on a live
//! IGC server, and checks or regenerates models against the server's types.

pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{Cli, Commands};
pub use handlers::{
    handle_codegen, handle_describe, handle_drift, handle_get, handle_search, handle_types,
};
