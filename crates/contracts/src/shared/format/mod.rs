//! pt-BR presentation formatting.
//!
//! Pure functions: no locale lookup at runtime, the Brazilian conventions are
//! hard-coded (`.` for thousands, `,` for decimals, `R$` prefix).

pub mod date;
pub mod number;
pub mod text;

pub use date::{format_date, format_date_str, DateFormat};
pub use number::{
    format_currency, format_currency_compact, format_number, format_number_with_separator,
    format_percentage, format_signed_percent, parse_currency,
};
pub use text::{capitalize, format_duration, truncate};
