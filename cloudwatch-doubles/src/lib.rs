// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//
//! In-process doubles for the CloudWatch, CloudWatch Logs and EC2 clients.
//!
//! Code under test is written against the capability traits in
//! [`domain::traits`]. Tests hand it one of the fakes from
//! [`infra::test_doubles`], pre-loaded with canned responses, instead of a
//! network client.

pub mod config;
pub mod domain;
pub mod infra;

pub use config::fake_data_source;
pub use config::DataSource;
pub use domain::context::RequestContext;
pub use domain::error::ApiError;
pub use domain::traits::InventoryApi;
pub use domain::traits::LogsApi;
pub use domain::traits::MetricsApi;
pub use infra::test_doubles::fake_inventory_client::FakeInventoryClient;
pub use infra::test_doubles::fake_logs_client::FakeLogsClient;
pub use infra::test_doubles::fake_metrics_client::FakeMetricsClient;
