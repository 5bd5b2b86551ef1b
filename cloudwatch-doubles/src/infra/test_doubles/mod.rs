// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//
//! Test doubles for the cloud monitoring clients, enabling testing without I/O.
//!
//! Every fake answers from canned data handed over at construction and never
//! mutates it. Operations a fake does not model are forwarded to the matching
//! stub in [`unimplemented`], which fails fast.

pub mod fake_inventory_client;
pub mod fake_logs_client;
pub mod fake_metrics_client;
mod pager;
pub mod unimplemented;

/// Query handle returned by every `start_query` call of [`fake_logs_client::FakeLogsClient`].
pub const FAKE_QUERY_ID: &str = "abcd-efgh-ijkl-mnop";
