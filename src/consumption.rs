use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::Deserialize;

use crate::quantity::energy::KilowattHours;

/// One metered reading: the energy consumed over `[interval_start, interval_end)`.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct ConsumptionInterval {
    pub interval_start: DateTime<Utc>,
    pub interval_end: DateTime<Utc>,
    pub consumption: KilowattHours,
}

/// Drop readings already billed and order the rest chronologically.
///
/// Meter history arrives either ascending or descending; the billing fold
/// relies on ascending order, so normalization happens once at this boundary.
/// A reading survives when its `interval_end` lies past `billed_until`.
pub fn billable_in_order(
    consumption: &[ConsumptionInterval],
    billed_until: Option<DateTime<Utc>>,
) -> Vec<ConsumptionInterval> {
    consumption
        .iter()
        .copied()
        .filter(|reading| billed_until.is_none_or(|until| reading.interval_end > until))
        .sorted_by_key(|reading| reading.interval_start)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone};
    use rust_decimal::Decimal;

    use super::*;

    fn half_hour_reading(start: DateTime<Utc>) -> ConsumptionInterval {
        ConsumptionInterval {
            interval_start: start,
            interval_end: start + TimeDelta::minutes(30),
            consumption: KilowattHours(Decimal::ONE),
        }
    }

    #[test]
    fn test_descending_history_is_reordered() {
        let midnight = Utc.with_ymd_and_hms(2022, 2, 10, 0, 0, 0).unwrap();
        let readings = vec![
            half_hour_reading(midnight + TimeDelta::minutes(60)),
            half_hour_reading(midnight + TimeDelta::minutes(30)),
            half_hour_reading(midnight),
        ];

        let ordered = billable_in_order(&readings, None);

        assert_eq!(ordered.len(), 3);
        assert!(ordered.is_sorted_by_key(|reading| reading.interval_start));
    }

    #[test]
    fn test_billed_readings_are_dropped() {
        let midnight = Utc.with_ymd_and_hms(2022, 2, 10, 0, 0, 0).unwrap();
        let readings = vec![
            half_hour_reading(midnight),
            half_hour_reading(midnight + TimeDelta::minutes(30)),
        ];

        // The first reading ends exactly at the checkpoint and is already billed.
        let billable = billable_in_order(&readings, Some(midnight + TimeDelta::minutes(30)));

        assert_eq!(billable, vec![half_hour_reading(midnight + TimeDelta::minutes(30))]);
    }

    #[test]
    fn test_fully_billed_history_is_empty() {
        let midnight = Utc.with_ymd_and_hms(2022, 2, 10, 0, 0, 0).unwrap();
        let readings = vec![half_hour_reading(midnight)];

        assert!(billable_in_order(&readings, Some(midnight + TimeDelta::days(1))).is_empty());
    }
}
