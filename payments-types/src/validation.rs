//! Field rules for incoming payment requests.
//!
//! Rules are evaluated in a fixed order and the first one that fails decides
//! the error, so a request with several bad fields always reports the same
//! message.

use rust_decimal::Decimal;

use crate::domain::Currency;
use crate::dto::PaymentRequest;
use crate::error::ValidationError;

/// A single check paired with the error it reports.
struct Rule {
    passes: fn(&PaymentRequest) -> bool,
    error: ValidationError,
}

const RULES: &[Rule] = &[
    Rule {
        passes: card_number_is_valid,
        error: ValidationError::CardNumber,
    },
    Rule {
        passes: expiry_year_is_valid,
        error: ValidationError::ExpiryYear,
    },
    Rule {
        passes: expiry_month_is_valid,
        error: ValidationError::ExpiryMonth,
    },
    Rule {
        passes: cvv_is_valid,
        error: ValidationError::Cvv,
    },
    Rule {
        passes: amount_has_at_most_two_places,
        error: ValidationError::AmountPrecision,
    },
    Rule {
        passes: amount_is_unsigned_decimal,
        error: ValidationError::AmountFormat,
    },
    Rule {
        passes: amount_is_positive,
        error: ValidationError::AmountNotPositive,
    },
    Rule {
        passes: currency_is_supported,
        error: ValidationError::Currency,
    },
];

/// Validates a payment request, returning the first rule it breaks.
///
/// Order: card number, expiry year, expiry month, CVV, amount (precision,
/// then format, then positivity), currency. No calendar check is made on
/// the expiry date.
pub fn validate(request: &PaymentRequest) -> Result<(), ValidationError> {
    match RULES.iter().find(|rule| !(rule.passes)(request)) {
        Some(rule) => Err(rule.error),
        None => Ok(()),
    }
}

fn is_ascii_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

fn card_number_is_valid(req: &PaymentRequest) -> bool {
    is_ascii_digits(&req.card_number, 16)
}

fn expiry_year_is_valid(req: &PaymentRequest) -> bool {
    (1000..=9999).contains(&req.expiry_year)
}

fn expiry_month_is_valid(req: &PaymentRequest) -> bool {
    (1..=12).contains(&req.expiry_month)
}

fn cvv_is_valid(req: &PaymentRequest) -> bool {
    is_ascii_digits(&req.cvv, 3)
}

fn amount_has_at_most_two_places(req: &PaymentRequest) -> bool {
    let value = req.amount.value();
    !req.amount.is_truncated() && value.round_dp(2) == value
}

// Digits, optionally followed by a point and one or two digits. A negative
// amount renders with a leading `-`, negative zero included.
fn amount_is_unsigned_decimal(req: &PaymentRequest) -> bool {
    let rendered = format!("{:.2}", req.amount);
    let (whole, fraction) = match rendered.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (rendered.as_str(), None),
    };

    let whole_ok = !whole.is_empty() && whole.bytes().all(|b| b.is_ascii_digit());
    let fraction_ok = fraction.is_none_or(|f| {
        (1..=2).contains(&f.len()) && f.bytes().all(|b| b.is_ascii_digit())
    });

    whole_ok && fraction_ok
}

fn amount_is_positive(req: &PaymentRequest) -> bool {
    req.amount.value() > Decimal::ZERO
}

fn currency_is_supported(req: &PaymentRequest) -> bool {
    Currency::parse(&req.currency).is_some()
}
