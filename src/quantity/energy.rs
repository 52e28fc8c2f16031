use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::quantity::{money::Pence, rate::PencePerKilowattHour};

/// Metered energy in kilowatt-hours.
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
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Sub,
    derive_more::Sum,
)]
pub struct KilowattHours(pub Decimal);

impl KilowattHours {
    pub const ZERO: Self = Self(Decimal::ZERO);
}

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kWh", self.0)
    }
}

impl Debug for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}kWh", self.0)
    }
}

impl Mul<PencePerKilowattHour> for KilowattHours {
    type Output = Pence;

    fn mul(self, rhs: PencePerKilowattHour) -> Self::Output {
        Pence(self.0 * rhs.0)
    }
}
