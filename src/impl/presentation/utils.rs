use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number decimal places for the given currency
/// (ex. KRW = 0, USD = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format cash amount with leading currency symbol, the currency's number of
/// decimal places, and thousands separators (ex. -$1,234.50, ₩1,500,000).
///
/// Uses en grouping ('.' as decimal mark) for every currency; both supported
/// jurisdictions group the same way.
pub fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let scale = 10_i64.pow(decimal_places);
    let minor_units = (amount.abs() * scale as f64).round() as i64;
    let sign = if amount < 0.0 && minor_units != 0 { "-" } else { "" };
    let integer_part = (minor_units / scale).to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        format!("{}{}{}", sign, currency.symbol(), integer_part)
    } else {
        format!(
            "{}{}{}.{:0width$}",
            sign,
            currency.symbol(),
            integer_part,
            minor_units % scale,
            width = decimal_places as usize
        )
    }
}

/// Format a fraction as a percentage with one decimal (ex. 0.1234 -> 12.3%).
pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}
