use async_trait::async_trait;

use crate::{
    prelude::*,
    quantity::time_range::TimeRange,
    tariff::{StandingCharge, UnitRate},
};

/// Tariff data source consumed by the billing fold.
///
/// Implementations own their transport, auth, timeouts, and retries; the
/// calculation only ever sees the returned data. The `tariff_code` is opaque
/// to the calculation and passed through verbatim.
#[async_trait]
pub trait RateProvider: Sync {
    /// Unit rates effective for the tariff over the period.
    async fn get_unit_rates(&self, tariff_code: &str, period: TimeRange) -> Result<Vec<UnitRate>>;

    /// The daily standing charge for the tariff over the period, if the
    /// provider knows one.
    async fn get_standing_charge(
        &self,
        tariff_code: &str,
        period: TimeRange,
    ) -> Result<Option<StandingCharge>>;
}
