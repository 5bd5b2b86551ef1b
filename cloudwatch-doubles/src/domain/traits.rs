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

pub const METRICS_SERVICE: &str = "cloudwatch";
pub const LOGS_SERVICE: &str = "logs";
pub const INVENTORY_SERVICE: &str = "ec2";

/// Page callback: receives one page and whether it is the last one, returns
/// `false` to stop the listing.
pub type PageCallback<'a, P> = dyn FnMut(&P, bool) -> bool + 'a;

pub trait MetricsApi: Send + Sync {
    /// Lists metrics, handing each page to `on_page`.
    fn list_metrics_pages(
        &self,
        input: &ListMetricsInput,
        on_page: &mut PageCallback<'_, ListMetricsOutput>,
    ) -> Result<(), ApiError>;

    fn get_metric_data(&self, input: &GetMetricDataInput) -> Result<GetMetricDataOutput, ApiError>;
}

/// Asynchronous log query engine: start a query, poll its results, stop it.
#[async_trait]
pub trait LogsApi: Send + Sync {
    async fn start_query(
        &self,
        ctx: &RequestContext,
        input: &StartQueryInput,
    ) -> Result<StartQueryOutput, ApiError>;

    async fn stop_query(
        &self,
        ctx: &RequestContext,
        input: &StopQueryInput,
    ) -> Result<StopQueryOutput, ApiError>;

    async fn get_query_results(
        &self,
        ctx: &RequestContext,
        input: &GetQueryResultsInput,
    ) -> Result<GetQueryResultsOutput, ApiError>;

    async fn describe_log_groups(
        &self,
        ctx: &RequestContext,
        input: &DescribeLogGroupsInput,
    ) -> Result<DescribeLogGroupsOutput, ApiError>;

    async fn get_log_group_fields(
        &self,
        ctx: &RequestContext,
        input: &GetLogGroupFieldsInput,
    ) -> Result<GetLogGroupFieldsOutput, ApiError>;
}

pub trait InventoryApi: Send + Sync {
    fn describe_regions(
        &self,
        input: &DescribeRegionsInput,
    ) -> Result<DescribeRegionsOutput, ApiError>;

    /// Lists reservations, handing each page to `on_page`.
    fn describe_instances_pages(
        &self,
        input: &DescribeInstancesInput,
        on_page: &mut PageCallback<'_, DescribeInstancesOutput>,
    ) -> Result<(), ApiError>;
}
