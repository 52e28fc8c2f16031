use std::fmt::{Debug, Display, Formatter};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Amount in minor currency units (pence), VAT included.
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
pub struct Pence(pub Decimal);

impl Pence {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Convert to major currency units.
    #[must_use]
    pub fn into_pounds(self) -> Pounds {
        Pounds(self.0 / Decimal::ONE_HUNDRED)
    }
}

impl Display for Pence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}p", self.0)
    }
}

impl Debug for Pence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}p", self.0)
    }
}

/// Amount in major currency units (pounds).
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
pub struct Pounds(pub Decimal);

impl Pounds {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Round to whole pence.
    #[must_use]
    pub fn round_to_pence(self) -> Self {
        Self(self.0.round_dp(2))
    }
}

impl Display for Pounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "£{:.2}", self.0)
    }
}

impl Debug for Pounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "£{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_pounds() {
        assert_eq!(Pence(Decimal::new(963, 0)).into_pounds(), Pounds(Decimal::new(963, 2)));
    }

    #[test]
    fn test_round_to_pence() {
        assert_eq!(Pounds(Decimal::new(96_299, 4)).round_to_pence(), Pounds(Decimal::new(963, 2)));
    }
}
