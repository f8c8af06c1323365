use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::op;

pub const VND_CURRENCY_CODE: &str = "VND";
pub const VND_CURRENCY_CODE_LOWER: &str = "vnd";

//--------------------------------------        Vnd        -----------------------------------------------------------
/// An amount of Vietnamese đồng. The đồng has no minor unit, so amounts are whole numbers.
#[derive(Debug, Clone, Copy, Default, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Vnd(i64);

op!(binary Vnd, Add, add);
op!(binary Vnd, Sub, sub);
op!(inplace Vnd, SubAssign, sub_assign);

impl Sum for Vnd {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[derive(Debug, Clone, Error)]
#[error("Value cannot be represented in đồng: {0}")]
pub struct VndConversionError(String);

impl From<i64> for Vnd {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl PartialEq for Vnd {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Vnd {}

impl TryFrom<u64> for Vnd {
    type Error = VndConversionError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value > i64::MAX as u64 {
            Err(VndConversionError(format!("Value {value} is too large to convert to Vnd")))
        } else {
            #[allow(clippy::cast_possible_wrap)]
            Ok(Self(value as i64))
        }
    }
}

impl Display for Vnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}₫", self.0)
    }
}

impl Vnd {
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Whether this amount would actually move money. Zero and negative transfer amounts never confirm anything.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Vnd::from(100_000);
        let b = Vnd::from(50_000);
        assert_eq!(a + b, Vnd::from(150_000));
        assert_eq!(a - b, b);
        let mut c = a;
        c -= b;
        assert_eq!(c, b);
        assert_eq!(vec![a, b].into_iter().sum::<Vnd>(), Vnd::from(150_000));
    }

    #[test]
    fn positivity() {
        assert!(Vnd::from(1).is_positive());
        assert!(!Vnd::from(0).is_positive());
        assert!(!Vnd::from(-50_000).is_positive());
    }

    #[test]
    fn display() {
        assert_eq!(Vnd::from(100_000).to_string(), "100000₫");
    }

    #[test]
    fn serde_round_trip() {
        let amount = Vnd::from(75_000);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "75000");
        let back: Vnd = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }
}
