// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! REST client

pub mod config;
pub mod rest;

pub use config::ClientConfig;
pub use rest::IgcRestClient;
