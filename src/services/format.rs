// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Portuguese-style display formatting for amounts, counts and dates.

use chrono::NaiveDate;

/// Placeholder for values the backend did not provide
pub const MISSING: &str = "—";

// pt-PT separates thousands and the currency symbol with a no-break space
const GROUP_SEPARATOR: char = '\u{a0}';
// Four-digit integers stay ungrouped: "1234", but "12 345"
const MIN_GROUPED_DIGITS: usize = 5;

/// Euro amount from cents, e.g. `1250050` → `"12 500,50 €"` and
/// `123456` → `"1234,56 €"` (separators are no-break spaces)
pub fn format_money(cents: Option<i64>) -> String {
    let Some(cents) = cents else {
        return MISSING.to_string();
    };
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!(
        "{}{},{:02}{}€",
        sign,
        group_thousands(abs / 100),
        abs % 100,
        GROUP_SEPARATOR
    )
}

/// Integer with thousands grouped from five digits up, e.g. `12345` →
/// `"12 345"` but `1000` → `"1000"`
pub fn format_number(value: Option<i64>) -> String {
    match value {
        Some(v) if v < 0 => format!("-{}", group_thousands(v.unsigned_abs())),
        Some(v) => group_thousands(v.unsigned_abs()),
        None => MISSING.to_string(),
    }
}

/// `DD/MM/YYYY`
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() < MIN_GROUPED_DIGITS {
        return digits;
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
