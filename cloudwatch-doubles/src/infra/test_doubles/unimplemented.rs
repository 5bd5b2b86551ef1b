// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use async_trait::async_trait;

use crate::domain::context::RequestContext;
use crate::domain::error::ApiError;
use crate::domain::inventory::DescribeInstancesInput;
use crate::domain::inventory::DescribeInstancesOutput;
use crate::domain::inventory::DescribeRegionsInput;
use crate::domain::inventory::DescribeRegionsOutput;
use crate::domain::logs::DescribeLogGroupsInput;
use crate::domain::logs::DescribeLogGroupsOutput;
use crate::domain::logs::GetLogGroupFieldsInput;
use crate::domain::logs::GetLogGroupFieldsOutput;
use crate::domain::logs::GetQueryResultsInput;
use crate::domain::logs::GetQueryResultsOutput;
use crate::domain::logs::StartQueryInput;
use crate::domain::logs::StartQueryOutput;
use crate::domain::logs::StopQueryInput;
use crate::domain::logs::StopQueryOutput;
use crate::domain::metrics::GetMetricDataInput;
use crate::domain::metrics::GetMetricDataOutput;
use crate::domain::metrics::ListMetricsInput;
use crate::domain::metrics::ListMetricsOutput;
use crate::domain::traits::InventoryApi;
use crate::domain::traits::LogsApi;
use crate::domain::traits::MetricsApi;
use crate::domain::traits::PageCallback;
use crate::domain::traits::INVENTORY_SERVICE;
use crate::domain::traits::LOGS_SERVICE;
use crate::domain::traits::METRICS_SERVICE;

fn fail<T>(service: &'static str, operation: &'static str) -> Result<T, ApiError> {
    tracing::debug!(service, operation, "call reached an unimplemented double");
    Err(ApiError::not_implemented(service, operation))
}

/// Metrics client on which every operation fails with [`ApiError::NotImplemented`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedMetricsClient;

impl MetricsApi for UnimplementedMetricsClient {
    fn list_metrics_pages(
        &self,
        _input: &ListMetricsInput,
        _on_page: &mut PageCallback<'_, ListMetricsOutput>,
    ) -> Result<(), ApiError> {
        fail(METRICS_SERVICE, "ListMetrics")
    }

    fn get_metric_data(
        &self,
        _input: &GetMetricDataInput,
    ) -> Result<GetMetricDataOutput, ApiError> {
        fail(METRICS_SERVICE, "GetMetricData")
    }
}

/// Logs client on which every operation fails with [`ApiError::NotImplemented`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedLogsClient;

#[async_trait]
impl LogsApi for UnimplementedLogsClient {
    async fn start_query(
        &self,
        _ctx: &RequestContext,
        _input: &StartQueryInput,
    ) -> Result<StartQueryOutput, ApiError> {
        fail(LOGS_SERVICE, "StartQuery")
    }

    async fn stop_query(
        &self,
        _ctx: &RequestContext,
        _input: &StopQueryInput,
    ) -> Result<StopQueryOutput, ApiError> {
        fail(LOGS_SERVICE, "StopQuery")
    }

    async fn get_query_results(
        &self,
        _ctx: &RequestContext,
        _input: &GetQueryResultsInput,
    ) -> Result<GetQueryResultsOutput, ApiError> {
        fail(LOGS_SERVICE, "GetQueryResults")
    }

    async fn describe_log_groups(
        &self,
        _ctx: &RequestContext,
        _input: &DescribeLogGroupsInput,
    ) -> Result<DescribeLogGroupsOutput, ApiError> {
        fail(LOGS_SERVICE, "DescribeLogGroups")
    }

    async fn get_log_group_fields(
        &self,
        _ctx: &RequestContext,
        _input: &GetLogGroupFieldsInput,
    ) -> Result<GetLogGroupFieldsOutput, ApiError> {
        fail(LOGS_SERVICE, "GetLogGroupFields")
    }
}

/// Inventory client on which every operation fails with [`ApiError::NotImplemented`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedInventoryClient;

impl InventoryApi for UnimplementedInventoryClient {
    fn describe_regions(
        &self,
        _input: &DescribeRegionsInput,
    ) -> Result<DescribeRegionsOutput, ApiError> {
        fail(INVENTORY_SERVICE, "DescribeRegions")
    }

    fn describe_instances_pages(
        &self,
        _input: &DescribeInstancesInput,
        _on_page: &mut PageCallback<'_, DescribeInstancesOutput>,
    ) -> Result<(), ApiError> {
        fail(INVENTORY_SERVICE, "DescribeInstances")
    }
}
