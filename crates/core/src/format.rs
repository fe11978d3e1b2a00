//! Display formatting for CNY amounts and dates, matching zh-CN
//! conventions. Aggregation results stay raw numbers; frontends call
//! these when they want ready-made strings.

use chrono::{NaiveDate, NaiveDateTime};

/// Format a CNY amount as `¥1,234.56`.
///
/// Always two decimals, thousands grouping, minus sign ahead of the
/// currency symbol. Non-finite input is passed through as-is after the
/// symbol.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("¥{amount}");
    }

    let negative = amount < 0.0;
    // Round at two decimals first so 0.005 carries into the yuan digits
    let cents = (amount.abs() * 100.0).round() as u128;
    let yuan = cents / 100;
    let fen = cents % 100;

    format!(
        "{}¥{}.{:02}",
        if negative { "-" } else { "" },
        group_thousands(yuan),
        fen
    )
}

/// Format a date as `2024/01/05`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

/// Format a date and time as `2024/01/05 14:30`.
pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format("%Y/%m/%d %H:%M").to_string()
}

/// Format a percentage with one decimal place, e.g. `66.7%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}
