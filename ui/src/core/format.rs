//! Formatting helpers for presenting dates and numbers.

use time::{macros::format_description, Date};

use super::lang::Lang;

/// Month naming used by [`format_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `March 15, 2024`
    Long,
    /// `Mar 15, 2024`
    Short,
}

const ARABIC_MONTHS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Parse the leading `YYYY-MM-DD` of an ISO date or timestamp.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    let head = raw.trim().get(..10)?;
    Date::parse(head, &format_description!("[year]-[month]-[day]")).ok()
}

/// Gregorian date in the active language. Unparseable input is echoed back.
pub fn format_date(raw: &str, lang: Lang, style: DateStyle) -> String {
    let Some(date) = parse_iso_date(raw) else {
        return raw.to_string();
    };

    match lang {
        Lang::En => {
            let formatted = match style {
                DateStyle::Long => date.format(&format_description!(
                    "[month repr:long] [day padding:none], [year]"
                )),
                DateStyle::Short => date.format(&format_description!(
                    "[month repr:short] [day padding:none], [year]"
                )),
            };
            formatted.unwrap_or_else(|_| raw.to_string())
        }
        // ar-EG uses the same month name for long and short forms.
        Lang::Ar => {
            let month = ARABIC_MONTHS[date.month() as usize - 1];
            let day = arabic_indic_digits(&date.day().to_string());
            let year = arabic_indic_digits(&date.year().to_string());
            format!("{day} {month} {year}")
        }
    }
}

/// Replace ASCII digits with Arabic-Indic digits.
pub fn arabic_indic_digits(value: &str) -> String {
    value
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// Thousands-grouped number, at most three fractional digits (`250,000`, `4.75`).
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "—".into();
    }

    let rounded = (value * 1000.0).round() / 1000.0;
    let sign = if rounded < 0.0 { "-" } else { "" };
    let abs = rounded.abs();
    let whole = abs.trunc() as u64;
    let fraction = format!("{:.3}", abs.fract());
    let fraction = fraction
        .trim_start_matches('0')
        .trim_end_matches('0')
        .trim_end_matches('.');

    format!("{sign}{}{fraction}", group_thousands(whole))
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
