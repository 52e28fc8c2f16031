use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    consumption::{ConsumptionInterval, billable_in_order},
    prelude::*,
    provider::RateProvider,
    quantity::{
        energy::KilowattHours,
        money::{Pence, Pounds},
        rate::PencePerKilowattHour,
        time_range::TimeRange,
    },
    tariff::unit_rate_at,
};

/// One priced reading. `[from, to)` are the bounds of the source
/// consumption interval.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Charge {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub consumption: KilowattHours,
    pub rate: PencePerKilowattHour,
    pub cost: Pounds,
}

/// Priced breakdown of a billing window, in chronological order.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub total: Pounds,
    pub total_without_standing_charge: Pounds,
    pub standing_charge: Pounds,

    /// Pass this back as the checkpoint of the next run: readings ending at
    /// or before it are already billed.
    pub billed_until: DateTime<Utc>,

    pub charges: Vec<Charge>,
}

/// Price the consumption readings against the tariff's unit rates and
/// standing charge.
///
/// Readings ending at or before `billed_until` are skipped. Returns [`None`]
/// when there is nothing new to bill or the provider has no data for the
/// period; no-data outcomes are not errors.
#[instrument(skip_all, fields(tariff_code = tariff_code, period = ?period))]
pub async fn calculate(
    provider: &impl RateProvider,
    consumption: &[ConsumptionInterval],
    billed_until: Option<DateTime<Utc>>,
    period: TimeRange,
    tariff_code: &str,
) -> Option<CostBreakdown> {
    let billable = billable_in_order(consumption, billed_until);
    let Some(last_reading) = billable.last().copied() else {
        info!("nothing new to bill");
        return None;
    };

    let (rates, standing_charge) = tokio::join!(
        provider.get_unit_rates(tariff_code, period),
        provider.get_standing_charge(tariff_code, period),
    );
    let rates = rates.unwrap_or_else(|error| {
        warn!(error = %format!("{error:#}"), "failed to fetch the unit rates");
        Vec::new()
    });
    let standing_charge = standing_charge.unwrap_or_else(|error| {
        warn!(error = %format!("{error:#}"), "failed to fetch the standing charge");
        None
    });
    if rates.is_empty() {
        warn!("no unit rates for the period");
        return None;
    }
    let Some(standing_charge) = standing_charge else {
        warn!("no standing charge for the period");
        return None;
    };
    info!(n_rates = rates.len(), n_readings = billable.len(), "pricing");

    let mut total = Pence::ZERO;
    let mut charges = Vec::with_capacity(billable.len());
    for reading in billable {
        let rate = match unit_rate_at(&rates, reading.interval_start) {
            Some(unit_rate) => unit_rate.value_inc_vat,
            None => {
                warn!(start = ?reading.interval_start, "no unit rate covers the reading, charging zero");
                PencePerKilowattHour::ZERO
            }
        };
        let cost = reading.consumption * rate;
        total += cost;
        charges.push(Charge {
            from: reading.interval_start,
            to: reading.interval_end,
            consumption: reading.consumption,
            rate,
            cost: cost.into_pounds(),
        });
    }

    let total_without_standing_charge = total.into_pounds().round_to_pence();
    let standing_charge = standing_charge.value_inc_vat.into_pounds();
    Some(CostBreakdown {
        total: (total_without_standing_charge + standing_charge).round_to_pence(),
        total_without_standing_charge,
        standing_charge,
        billed_until: last_reading.interval_end,
        charges,
    })
}
