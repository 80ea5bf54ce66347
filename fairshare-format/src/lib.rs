#![warn(clippy::uninlined_format_args)]

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Final display form: exactly two decimal digits with comma grouping,
/// e.g. `1234.5` -> `"1,234.50"`. Rounding is midpoint-away-from-zero.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = rounded.to_string();

    let (raw_int, raw_frac) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (text.as_str(), ""),
    };

    let negative = raw_int.starts_with('-');
    let digits = raw_int.trim_start_matches('-');
    let mut frac = String::from(raw_frac);
    while frac.len() < 2 {
        frac.push('0');
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{}.{frac}", group_thousands(digits))
}

/// Parses user input into an amount: keeps digits, comma, period, and the
/// sign, removes grouping commas, then parses as decimal. `None` signals
/// invalid input to the validator.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();
    let cleaned = cleaned.replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Per-keystroke echo form: strips invalid characters and regroups the
/// integer digits, leaving any typed decimals untouched. Distinct from
/// [`format_amount`], which is the final two-decimal form.
pub fn live_format(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.'))
        .collect();
    let cleaned = cleaned.replace(',', "");

    match cleaned.split_once('.') {
        Some((int_part, frac_part)) => format!("{}.{frac_part}", group_thousands(int_part)),
        None => group_thousands(&cleaned),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        let remaining = digits.len() - idx;
        if idx > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
