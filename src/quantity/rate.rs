use std::fmt::{Debug, Display, Formatter};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unit price in pence per kilowatt-hour, VAT included.
#[derive(
    Copy,
    Clone,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::Add,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Sub,
)]
pub struct PencePerKilowattHour(pub Decimal);

impl PencePerKilowattHour {
    pub const ZERO: Self = Self(Decimal::ZERO);
}

impl Display for PencePerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}p/kWh", self.0)
    }
}

impl Debug for PencePerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}p/kWh", self.0)
    }
}
