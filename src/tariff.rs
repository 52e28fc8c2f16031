use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::quantity::{money::Pence, rate::PencePerKilowattHour, time_range::TimeRange};

/// A unit price effective over `[valid_from, valid_to)`.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct UnitRate {
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
    pub value_inc_vat: PencePerKilowattHour,
}

impl UnitRate {
    pub fn validity(&self) -> TimeRange {
        TimeRange::new(self.valid_from, self.valid_to)
    }
}

/// The daily fee charged regardless of consumption.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct StandingCharge {
    pub value_inc_vat: Pence,
}

/// Find the unit rate whose validity window covers the instant.
#[must_use]
pub fn unit_rate_at(rates: &[UnitRate], at: DateTime<Utc>) -> Option<&UnitRate> {
    rates.iter().find(|rate| rate.validity().contains(at))
}
