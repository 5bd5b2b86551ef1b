// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use crate::domain::error::ApiError;
use crate::domain::inventory::DescribeInstancesInput;
use crate::domain::inventory::DescribeInstancesOutput;
use crate::domain::inventory::DescribeRegionsInput;
use crate::domain::inventory::DescribeRegionsOutput;
use crate::domain::inventory::Region;
use crate::domain::inventory::Reservation;
use crate::domain::traits::InventoryApi;
use crate::domain::traits::PageCallback;
use crate::infra::test_doubles::pager::deliver_pages;

/// Fake EC2 inventory with canned region names and reservations.
///
/// Filters and region selectors in requests are ignored.
#[derive(Debug, Clone, Default)]
pub struct FakeInventoryClient {
    regions: Vec<String>,
    reservation_pages: Vec<Vec<Reservation>>,
    error: Option<ApiError>,
}

impl FakeInventoryClient {
    pub fn new<I, S>(regions: I, reservations: Vec<Reservation>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FakeInventoryClient {
            regions: regions.into_iter().map(Into::into).collect(),
            reservation_pages: vec![reservations],
            error: None,
        }
    }

    /// Replaces the single reservation page with an explicit page split.
    pub fn with_reservation_pages(mut self, pages: Vec<Vec<Reservation>>) -> Self {
        self.reservation_pages = pages;
        self
    }

    /// Makes both operations fail with `error`.
    pub fn with_error(mut self, error: ApiError) -> Self {
        self.error = Some(error);
        self
    }

    fn injected_error(&self, operation: &'static str) -> Result<(), ApiError> {
        match &self.error {
            Some(err) => {
                tracing::debug!(operation, error = %err, "FAKE: call fails");
                Err(err.clone())
            }
            None => Ok(()),
        }
    }
}

impl InventoryApi for FakeInventoryClient {
    fn describe_regions(
        &self,
        _input: &DescribeRegionsInput,
    ) -> Result<DescribeRegionsOutput, ApiError> {
        self.injected_error("DescribeRegions")?;
        tracing::debug!(regions = self.regions.len(), "FAKE: DescribeRegions");
        Ok(DescribeRegionsOutput { regions: self.regions.iter().map(Region::named).collect() })
    }

    fn describe_instances_pages(
        &self,
        _input: &DescribeInstancesInput,
        on_page: &mut PageCallback<'_, DescribeInstancesOutput>,
    ) -> Result<(), ApiError> {
        self.injected_error("DescribeInstances")?;
        deliver_pages(
            "DescribeInstances",
            &self.reservation_pages,
            |reservations, next_token| DescribeInstancesOutput { reservations, next_token },
            on_page,
        );
        Ok(())
    }
}
