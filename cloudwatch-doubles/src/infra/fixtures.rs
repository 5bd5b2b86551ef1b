// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//
//! Canned response bundles stored as JSON files.
//!
//! Bundle fields use the AWS wire names, so payloads captured from the real
//! APIs can be pasted into a fixture unchanged.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::inventory::Reservation;
use crate::domain::logs::DescribeLogGroupsOutput;
use crate::domain::logs::GetLogGroupFieldsOutput;
use crate::domain::logs::GetQueryResultsOutput;
use crate::domain::metrics::Metric;
use crate::infra::test_doubles::fake_inventory_client::FakeInventoryClient;
use crate::infra::test_doubles::fake_logs_client::FakeLogsClient;
use crate::infra::test_doubles::fake_metrics_client::FakeMetricsClient;

/// Metrics listing; `Pages` wins over `Metrics` when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MetricsBundle {
    pub metrics: Vec<Metric>,
    pub pages: Option<Vec<Vec<Metric>>>,
}

impl MetricsBundle {
    pub fn into_client(self) -> FakeMetricsClient {
        match self.pages {
            Some(pages) => FakeMetricsClient::with_pages(pages),
            None => FakeMetricsClient::new(self.metrics),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LogsBundle {
    pub log_groups: DescribeLogGroupsOutput,
    pub log_group_fields: GetLogGroupFieldsOutput,
    pub query_results: GetQueryResultsOutput,
    /// Successive poll payloads, see [`FakeLogsClient`]
    pub query_progression: Vec<GetQueryResultsOutput>,
}

impl LogsBundle {
    pub fn into_client(self) -> FakeLogsClient {
        FakeLogsClient::builder()
            .log_groups(self.log_groups)
            .log_group_fields(self.log_group_fields)
            .query_results(self.query_results)
            .query_progression(self.query_progression)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InventoryBundle {
    pub regions: Vec<String>,
    pub reservations: Vec<Reservation>,
}

impl InventoryBundle {
    pub fn into_client(self) -> FakeInventoryClient {
        FakeInventoryClient::new(self.regions, self.reservations)
    }
}

/// Reads a JSON fixture into a bundle.
pub fn load_bundle<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).context(format!("Failed to read fixture {path:?}"))?;
    let bundle = serde_json::from_str(&raw).context(format!("Failed to parse fixture {path:?}"))?;
    tracing::debug!(fixture = %path.display(), "loaded canned bundle");
    Ok(bundle)
}
