//! Payment amounts as they arrive on the wire.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

/// Most fractional digits a [`Decimal`] can hold.
const MAX_FRACTION_DIGITS: usize = 28;

/// Amount of a payment request.
///
/// Wraps the fixed-point value together with what the conversion from the
/// JSON number lost: the sign of `-0`, and digits past the 28th decimal
/// place (so `1e-30` is not mistaken for zero).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Amount {
    value: Decimal,
    negative: bool,
    truncated: bool,
}

impl Amount {
    /// Returns the fixed-point value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// True if the amount was written with a minus sign, including `-0`.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// True if decimal places were dropped when the amount was decoded.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    fn from_f64(raw: f64) -> Result<Self, rust_decimal::Error> {
        // `Display` for f64 is the shortest round-trip rendering, never exponent form.
        let rendered = raw.to_string();
        let value = Decimal::from_str(&rendered)?;
        let truncated = rendered
            .split_once('.')
            .is_some_and(|(_, fraction)| fraction.len() > MAX_FRACTION_DIGITS);

        Ok(Self {
            value,
            negative: raw.is_sign_negative(),
            truncated,
        })
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self {
            value,
            negative: value.is_sign_negative() && !value.is_zero(),
            truncated: false,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        fmt::Display::fmt(&self.value.abs(), f)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&self.value, serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        Self::from_f64(raw)
            .map_err(|e| D::Error::custom(format!("amount {raw} is out of range: {e}")))
    }
}
