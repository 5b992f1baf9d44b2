//! Numbers, currency and percentages.

/// Non-breaking space between the currency symbol and the amount.
const NBSP: char = '\u{a0}';
const CURRENCY_SYMBOL: &str = "R$";

/// Fixed decimals with pt-BR separators: `1234.5, 2` → `"1.234,50"`.
pub fn format_number_with_separator(value: f64, decimals: usize) -> String {
    let (negative, integer, fraction) = split_fixed(value, decimals);
    let sign = if negative { "-" } else { "" };
    join_parts(sign, &integer, &fraction)
}

/// BRL amount with 2 decimals: `1234.56` → `"R$ 1.234,56"` (NBSP after `R$`).
pub fn format_currency(value: f64) -> String {
    currency(value, 2)
}

/// BRL amount without decimals, for KPI cards: `"R$ 1.235"`.
pub fn format_currency_compact(value: f64) -> String {
    currency(value, 0)
}

fn currency(value: f64, decimals: usize) -> String {
    let (negative, integer, fraction) = split_fixed(value, decimals);
    let sign = if negative { "-" } else { "" };
    format!(
        "{}{}{}{}",
        sign,
        CURRENCY_SYMBOL,
        NBSP,
        join_parts("", &integer, &fraction)
    )
}

/// Inverse of [`format_currency`]. Accepts an optional leading `-`, the `R$`
/// symbol with either a regular or non-breaking space, `.` thousands and `,`
/// decimals.
pub fn parse_currency(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let amount = rest
        .strip_prefix(CURRENCY_SYMBOL)?
        .trim_start_matches([' ', NBSP]);

    let normalized: String = amount
        .chars()
        .filter(|c| *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    let value: f64 = normalized.parse().ok()?;

    Some(if negative { -value } else { value })
}

/// `{value:.decimals}%`. With `is_decimal` the value is a ratio and is
/// multiplied by 100 first. The sign comes from the value only.
pub fn format_percentage(value: f64, decimals: usize, is_decimal: bool) -> String {
    let percentage = if is_decimal { value * 100.0 } else { value };
    format!("{:.*}%", decimals, percentage)
}

/// Growth-style percentage with an explicit `+` for positive values.
pub fn format_signed_percent(value: f64) -> String {
    let formatted = format_percentage(value, 1, false);
    if value > 0.0 && formatted != "0.0%" {
        format!("+{}", formatted)
    } else {
        formatted
    }
}

/// Abbreviated number: `B`/`M`/`K` from 1e9/1e6/1e3 on, otherwise pt-BR with
/// at most `decimals` fraction digits (trailing zeros dropped).
pub fn format_number(value: f64, decimals: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    let scaled = [(1e9, 'B'), (1e6, 'M'), (1e3, 'K')]
        .into_iter()
        .find(|(threshold, _)| abs >= *threshold);

    match scaled {
        Some((threshold, suffix)) => format!("{}{:.*}{}", sign, decimals, abs / threshold, suffix),
        None => {
            let (_, integer, fraction) = split_fixed(abs, decimals);
            let fraction = fraction.trim_end_matches('0');
            join_parts(sign, &integer, fraction)
        }
    }
}

/// Rounds to `decimals` and returns (is negative, integer digits, fraction digits).
/// A value that rounds to zero is never negative.
fn split_fixed(value: f64, decimals: usize) -> (bool, String, String) {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer.to_string(), fraction.to_string()),
        None => (fixed, String::new()),
    };
    let is_zero = integer.chars().chain(fraction.chars()).all(|c| c == '0');
    (value < 0.0 && !is_zero, integer, fraction)
}

fn join_parts(sign: &str, integer: &str, fraction: &str) -> String {
    let grouped = group_thousands(integer);
    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{},{}", sign, grouped, fraction)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}
