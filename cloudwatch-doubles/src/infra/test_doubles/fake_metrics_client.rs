// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use crate::domain::error::ApiError;
use crate::domain::metrics::GetMetricDataInput;
use crate::domain::metrics::GetMetricDataOutput;
use crate::domain::metrics::ListMetricsInput;
use crate::domain::metrics::ListMetricsOutput;
use crate::domain::metrics::Metric;
use crate::domain::traits::MetricsApi;
use crate::domain::traits::PageCallback;
use crate::infra::test_doubles::pager::deliver_pages;
use crate::infra::test_doubles::unimplemented::UnimplementedMetricsClient;

/// Fake metrics catalog answering `ListMetrics` from canned pages.
///
/// Built with [`FakeMetricsClient::new`] it returns every metric in a single
/// last page. [`FakeMetricsClient::with_pages`] keeps the given page split.
/// The listing request is never inspected.
#[derive(Debug, Clone, Default)]
pub struct FakeMetricsClient {
    pages: Vec<Vec<Metric>>,
    error: Option<ApiError>,
    fallback: UnimplementedMetricsClient,
}

impl FakeMetricsClient {
    pub fn new(metrics: Vec<Metric>) -> Self {
        Self::with_pages(vec![metrics])
    }

    pub fn with_pages(pages: Vec<Vec<Metric>>) -> Self {
        FakeMetricsClient { pages, error: None, fallback: UnimplementedMetricsClient }
    }

    /// Makes `ListMetrics` fail with `error` instead of listing anything.
    pub fn with_error(mut self, error: ApiError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn metrics(&self) -> impl Iterator<Item = &Metric> {
        self.pages.iter().flatten()
    }
}

impl MetricsApi for FakeMetricsClient {
    fn list_metrics_pages(
        &self,
        _input: &ListMetricsInput,
        on_page: &mut PageCallback<'_, ListMetricsOutput>,
    ) -> Result<(), ApiError> {
        if let Some(err) = &self.error {
            tracing::debug!(error = %err, "FAKE: ListMetrics fails");
            return Err(err.clone());
        }
        deliver_pages(
            "ListMetrics",
            &self.pages,
            |metrics, next_token| ListMetricsOutput { metrics, next_token },
            on_page,
        );
        Ok(())
    }

    fn get_metric_data(&self, input: &GetMetricDataInput) -> Result<GetMetricDataOutput, ApiError> {
        self.fallback.get_metric_data(input)
    }
}
