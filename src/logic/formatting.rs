//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format an amount as Brazilian Real, e.g. `R$ 1.234,56`
///
/// Absent and zero amounts render as an em dash.
///
/// # Examples
/// ```
/// use sellertui::logic::formatting::format_currency;
///
/// assert_eq!(format_currency(Some(5000.0)), "R$ 5.000,00");
/// assert_eq!(format_currency(Some(1234567.891)), "R$ 1.234.567,89");
/// assert_eq!(format_currency(None), "—");
/// ```
pub fn format_currency(amount: Option<f64>) -> String {
    let amount = match amount {
        Some(a) if a != 0.0 && a.is_finite() => a,
        _ => return "—".to_string(),
    };

    let cents_total = (amount.abs() * 100.0).round() as u64;
    let whole = cents_total / 100;
    let cents = cents_total % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, cents)
}

/// Format a timestamp as `dd/mm/yyyy hh:mm` in its own time zone
pub fn format_datetime<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%d/%m/%Y %H:%M").to_string()
}

/// Colour band of a lead score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent, // 90+
    Good,      // 80-89
    Fair,      // 70-79
    Low,
}

pub fn score_band(score: u8) -> ScoreBand {
    match score {
        90..=u8::MAX => ScoreBand::Excellent,
        80..=89 => ScoreBand::Good,
        70..=79 => ScoreBand::Fair,
        _ => ScoreBand::Low,
    }
}

pub fn format_score(score: u8) -> String {
    format!("{}%", score)
}

/// Cut `text` to at most `max_width` terminal columns, ending with `…` when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
