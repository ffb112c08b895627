//! Currencies the gateway accepts payments in.

use std::fmt;

/// Currencies supported by the gateway (a subset of ISO 4217).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    EUR,
    GBP,
}

impl Currency {
    /// Every supported currency, in code order.
    pub const ALL: [Currency; 2] = [Currency::EUR, Currency::GBP];

    /// Looks up a supported currency by its exact ISO 4217 code.
    ///
    /// Matching is case-sensitive: `"gbp"` is not a supported code.
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Returns the ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
