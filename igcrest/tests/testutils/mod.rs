//! Test utilities for igcrest integration tests
//!
//! - fixtures: sample IGC REST payloads
//! - stub_server: loopback HTTP server that replays canned responses

#![allow(dead_code)]

pub mod fixtures;
pub mod stub_server;
