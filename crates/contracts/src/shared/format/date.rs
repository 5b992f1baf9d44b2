//! Dates in Brazilian Portuguese.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const MONTHS_LONG: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

const MONTHS_SHORT: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.", "dez.",
];

/// Named date presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `15/03/2024`
    #[default]
    Short,
    /// `15 de março de 2024`
    Long,
    /// `mar. de 2024`
    MonthYear,
}

impl DateFormat {
    /// Preset by name (`short`, `long`, `month`). Unknown names fall back to `Short`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "long" => DateFormat::Long,
            "month" => DateFormat::MonthYear,
            _ => DateFormat::Short,
        }
    }
}

pub fn format_date(date: NaiveDate, format: DateFormat) -> String {
    let month = date.month0() as usize;
    match format {
        DateFormat::Short => format!("{:02}/{:02}/{}", date.day(), date.month(), date.year()),
        DateFormat::Long => format!("{:02} de {} de {}", date.day(), MONTHS_LONG[month], date.year()),
        DateFormat::MonthYear => format!("{} de {}", MONTHS_SHORT[month], date.year()),
    }
}

/// Formats an ISO date (`2024-03-15`) or datetime (`2024-03-15T14:02:26Z`).
/// Input that does not parse is returned unchanged.
pub fn format_date_str(input: &str, format: DateFormat) -> String {
    match parse_date(input) {
        Some(date) => format_date(date, format),
        None => input.to_string(),
    }
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.date_naive());
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|datetime| datetime.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn presets() {
        assert_eq!(format_date(march_15(), DateFormat::Short), "15/03/2024");
        assert_eq!(format_date(march_15(), DateFormat::Long), "15 de março de 2024");
        assert_eq!(format_date(march_15(), DateFormat::MonthYear), "mar. de 2024");
    }

    #[test]
    fn unknown_preset_is_short() {
        assert_eq!(DateFormat::from_name("month"), DateFormat::MonthYear);
        assert_eq!(DateFormat::from_name("iso"), DateFormat::Short);
    }

    #[test]
    fn string_input() {
        assert_eq!(format_date_str("2024-03-15", DateFormat::Short), "15/03/2024");
        assert_eq!(
            format_date_str("2024-12-01T10:00:00Z", DateFormat::Long),
            "01 de dezembro de 2024"
        );
        assert_eq!(
            format_date_str("2024-01-31T23:59:59", DateFormat::MonthYear),
            "jan. de 2024"
        );
    }

    #[test]
    fn invalid_input_is_returned_unchanged() {
        assert_eq!(format_date_str("invalid", DateFormat::Short), "invalid");
        assert_eq!(format_date_str("2024-13-40", DateFormat::Long), "2024-13-40");
    }
}
