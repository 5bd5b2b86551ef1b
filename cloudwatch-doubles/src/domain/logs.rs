// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StartQueryInput {
    pub log_group_names: Vec<String>,
    pub query_string: String,
    /// Seconds since the Unix epoch
    pub start_time: i64,
    pub end_time: i64,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StartQueryOutput {
    pub query_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StopQueryInput {
    pub query_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StopQueryOutput {
    pub success: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetQueryResultsInput {
    pub query_id: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryStatus {
    Scheduled,
    Running,
    Complete,
    Failed,
    Cancelled,
    Timeout,
    #[default]
    Unknown,
}

impl QueryStatus {
    /// No further results will arrive once a query is in a terminal state.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            QueryStatus::Complete
                | QueryStatus::Failed
                | QueryStatus::Cancelled
                | QueryStatus::Timeout
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResultField {
    pub field: Option<String>,
    pub value: Option<String>,
}

impl ResultField {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self { field: Some(field.into()), value: Some(value.into()) }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QueryStatistics {
    pub bytes_scanned: Option<f64>,
    pub records_matched: Option<f64>,
    pub records_scanned: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetQueryResultsOutput {
    /// One row per matched record, each a list of field/value pairs
    pub results: Vec<Vec<ResultField>>,
    pub statistics: Option<QueryStatistics>,
    pub status: Option<QueryStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeLogGroupsInput {
    pub log_group_name_prefix: Option<String>,
    pub limit: Option<i64>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LogGroup {
    pub log_group_name: Option<String>,
    pub arn: Option<String>,
    pub creation_time: Option<i64>,
    pub retention_in_days: Option<i64>,
    pub stored_bytes: Option<i64>,
}

impl LogGroup {
    pub fn named(name: impl Into<String>) -> Self {
        Self { log_group_name: Some(name.into()), ..Default::default() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeLogGroupsOutput {
    pub log_groups: Vec<LogGroup>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetLogGroupFieldsInput {
    pub log_group_name: String,
    pub time: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LogGroupField {
    pub name: Option<String>,
    /// Share of sampled events carrying the field, 0..=100
    pub percent: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetLogGroupFieldsOutput {
    pub log_group_fields: Vec<LogGroupField>,
}
