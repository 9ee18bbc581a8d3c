use rust_decimal::RoundingStrategy;
use warikan_domain::Money;
use warikan_i18n as i18n;

const DISPLAY_FRACTION_DIGITS: u32 = 3;

/// Formats an amount with thousands separators and at most three decimals.
pub fn format_amount(amount: Money) -> String {
    let rounded = amount
        .as_decimal()
        .round_dp_with_strategy(DISPLAY_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut formatted = String::with_capacity(digits.len() + integer.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        formatted.push('-');
    }
    for (idx, digit) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    if let Some(fraction) = fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }
    formatted
}

pub fn format_currency(amount: Money) -> String {
    let (negative, magnitude) = split_sign(amount);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{}{magnitude}", i18n::CURRENCY_SYMBOL)
}

/// Currency with an explicit `+` for amounts that display as non-negative.
pub fn format_signed_currency(amount: Money) -> String {
    let (negative, magnitude) = split_sign(amount);
    let sign = if negative { "-" } else { "+" };
    format!("{sign}{}{magnitude}", i18n::CURRENCY_SYMBOL)
}

fn split_sign(amount: Money) -> (bool, String) {
    let magnitude = format_amount(amount.abs());
    (amount.is_negative() && magnitude != "0", magnitude)
}
