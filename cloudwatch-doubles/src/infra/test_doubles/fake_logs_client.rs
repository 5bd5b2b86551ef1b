// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use typed_builder::TypedBuilder;

use crate::domain::context::RequestContext;
use crate::domain::error::ApiError;
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
use crate::domain::traits::LogsApi;
use crate::infra::test_doubles::FAKE_QUERY_ID;

/// Fake log query engine.
///
/// Query state is flat: `get_query_results` returns the same canned payload
/// on every poll and there is no running/complete progression, unless one is
/// supplied with `query_progression`. In that case the n-th poll returns the
/// n-th payload and the last payload repeats forever after.
///
/// Context, query handles and filters are never inspected.
#[derive(Debug, Clone, TypedBuilder)]
pub struct FakeLogsClient {
    #[builder(default)]
    log_groups: DescribeLogGroupsOutput,

    #[builder(default)]
    log_group_fields: GetLogGroupFieldsOutput,

    #[builder(default)]
    query_results: GetQueryResultsOutput,

    /// Successive `get_query_results` payloads; overrides `query_results` when not empty
    #[builder(default)]
    query_progression: Vec<GetQueryResultsOutput>,

    /// Returned by every operation instead of the canned payload
    #[builder(default, setter(strip_option))]
    error: Option<ApiError>,

    #[builder(default, setter(skip))]
    polls: Arc<AtomicUsize>,
}

impl Default for FakeLogsClient {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl FakeLogsClient {
    /// Flat double over the three canned payloads.
    pub fn new(
        log_groups: DescribeLogGroupsOutput,
        log_group_fields: GetLogGroupFieldsOutput,
        query_results: GetQueryResultsOutput,
    ) -> Self {
        Self::builder()
            .log_groups(log_groups)
            .log_group_fields(log_group_fields)
            .query_results(query_results)
            .build()
    }

    /// Number of `get_query_results` calls answered so far.
    pub fn poll_count(&self) -> usize {
        self.polls.load(Ordering::Acquire)
    }

    fn check(&self, operation: &'static str) -> Result<(), ApiError> {
        match &self.error {
            Some(err) => {
                tracing::debug!(operation, error = %err, "FAKE: call fails");
                Err(err.clone())
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LogsApi for FakeLogsClient {
    async fn start_query(
        &self,
        _ctx: &RequestContext,
        _input: &StartQueryInput,
    ) -> Result<StartQueryOutput, ApiError> {
        self.check("StartQuery")?;
        tracing::debug!(query_id = FAKE_QUERY_ID, "FAKE: StartQuery");
        Ok(StartQueryOutput { query_id: Some(FAKE_QUERY_ID.to_string()) })
    }

    async fn stop_query(
        &self,
        _ctx: &RequestContext,
        input: &StopQueryInput,
    ) -> Result<StopQueryOutput, ApiError> {
        self.check("StopQuery")?;
        tracing::debug!(query_id = %input.query_id, "FAKE: StopQuery");
        Ok(StopQueryOutput { success: Some(true) })
    }

    async fn get_query_results(
        &self,
        _ctx: &RequestContext,
        _input: &GetQueryResultsInput,
    ) -> Result<GetQueryResultsOutput, ApiError> {
        self.check("GetQueryResults")?;
        let poll = self.polls.fetch_add(1, Ordering::AcqRel);
        let payload = match self.query_progression.len() {
            0 => &self.query_results,
            len => &self.query_progression[poll.min(len - 1)],
        };
        tracing::debug!(
            poll,
            status = ?payload.status,
            rows = payload.results.len(),
            "FAKE: GetQueryResults"
        );
        Ok(payload.clone())
    }

    async fn describe_log_groups(
        &self,
        _ctx: &RequestContext,
        _input: &DescribeLogGroupsInput,
    ) -> Result<DescribeLogGroupsOutput, ApiError> {
        self.check("DescribeLogGroups")?;
        Ok(self.log_groups.clone())
    }

    async fn get_log_group_fields(
        &self,
        _ctx: &RequestContext,
        _input: &GetLogGroupFieldsInput,
    ) -> Result<GetLogGroupFieldsOutput, ApiError> {
        self.check("GetLogGroupFields")?;
        Ok(self.log_group_fields.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logs::LogGroup;
    use crate::domain::logs::LogGroupField;
    use crate::domain::logs::QueryStatus;
    use crate::domain::logs::ResultField;

    fn query(id: &str) -> GetQueryResultsInput {
        GetQueryResultsInput { query_id: id.to_string() }
    }

    #[tokio::test]
    async fn test_start_query_returns_fixed_handle() {
        let client = FakeLogsClient::default();
        let ctx = RequestContext::background();
        let input =
            StartQueryInput { query_string: "fields @message".into(), ..Default::default() };
        let first = client.start_query(&ctx, &input).await.unwrap();
        let second = client.start_query(&ctx, &StartQueryInput::default()).await.unwrap();
        assert_eq!(first.query_id.as_deref(), Some("abcd-efgh-ijkl-mnop"));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_stop_query_always_succeeds() {
        let client = FakeLogsClient::default();
        let ctx = RequestContext::background();
        ctx.cancel();
        for id in ["", "not a handle", FAKE_QUERY_ID] {
            let out = client
                .stop_query(&ctx, &StopQueryInput { query_id: id.to_string() })
                .await
                .unwrap();
            assert_eq!(out.success, Some(true));
        }
    }

    #[tokio::test]
    async fn test_empty_results_are_stable() {
        let client = FakeLogsClient::default();
        let ctx = RequestContext::background();
        let first = client.get_query_results(&ctx, &query(FAKE_QUERY_ID)).await.unwrap();
        let second = client.get_query_results(&ctx, &query("other")).await.unwrap();
        assert!(first.results.is_empty());
        assert_eq!(first, second);
        assert_eq!(client.poll_count(), 2);
    }

    #[tokio::test]
    async fn test_results_do_not_progress() {
        let payload = GetQueryResultsOutput {
            results: vec![vec![ResultField::new("@message", "boot")]],
            status: Some(QueryStatus::Running),
            ..Default::default()
        };
        let client = FakeLogsClient::builder().query_results(payload.clone()).build();
        let ctx = RequestContext::background();
        for _ in 0..5 {
            let out = client.get_query_results(&ctx, &query(FAKE_QUERY_ID)).await.unwrap();
            assert_eq!(out, payload);
        }
    }

    #[tokio::test]
    async fn test_metadata_lookups() {
        let groups = DescribeLogGroupsOutput {
            log_groups: vec![LogGroup::named("/aws/lambda/a"), LogGroup::named("/aws/lambda/b")],
            next_token: None,
        };
        let fields = GetLogGroupFieldsOutput {
            log_group_fields: vec![LogGroupField {
                name: Some("@timestamp".into()),
                percent: Some(100),
            }],
        };
        let client =
            FakeLogsClient::new(groups.clone(), fields.clone(), GetQueryResultsOutput::default());
        let ctx = RequestContext::background();

        let prefix = DescribeLogGroupsInput {
            log_group_name_prefix: Some("/nothing/matches".into()),
            ..Default::default()
        };
        assert_eq!(client.describe_log_groups(&ctx, &prefix).await.unwrap(), groups);
        assert_eq!(
            client.get_log_group_fields(&ctx, &GetLogGroupFieldsInput::default()).await.unwrap(),
            fields
        );
    }

    #[tokio::test]
    async fn test_query_progression() {
        let running =
            GetQueryResultsOutput { status: Some(QueryStatus::Running), ..Default::default() };
        let complete = GetQueryResultsOutput {
            status: Some(QueryStatus::Complete),
            results: vec![vec![ResultField::new("count", "3")]],
            ..Default::default()
        };
        let client = FakeLogsClient::builder()
            .query_progression(vec![running.clone(), running.clone(), complete.clone()])
            .build();
        let ctx = RequestContext::background();

        let mut statuses = Vec::new();
        for _ in 0..4 {
            let out = client.get_query_results(&ctx, &query(FAKE_QUERY_ID)).await.unwrap();
            statuses.push(out.status);
        }
        assert_eq!(
            statuses,
            vec![
                Some(QueryStatus::Running),
                Some(QueryStatus::Running),
                Some(QueryStatus::Complete),
                Some(QueryStatus::Complete),
            ]
        );

        // clones share the poll position
        let clone = client.clone();
        assert_eq!(clone.get_query_results(&ctx, &query("x")).await.unwrap(), complete);
        assert_eq!(client.poll_count(), 5);
    }

    #[tokio::test]
    async fn test_injected_error() {
        let err = ApiError::service("logs", "LimitExceededException", "too many queries");
        let client = FakeLogsClient::builder().error(err.clone()).build();
        let ctx = RequestContext::background();
        assert_eq!(client.start_query(&ctx, &StartQueryInput::default()).await, Err(err.clone()));
        assert_eq!(client.stop_query(&ctx, &StopQueryInput::default()).await, Err(err.clone()));
        assert_eq!(client.get_query_results(&ctx, &query("q")).await, Err(err.clone()));
        assert_eq!(client.poll_count(), 0);
        assert!(client.describe_log_groups(&ctx, &Default::default()).await.is_err());
        assert!(client.get_log_group_fields(&ctx, &Default::default()).await.is_err());
    }
}
