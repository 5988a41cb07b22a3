pub mod date;
pub mod locale;
pub mod number;


pub use date::{format_date, format_date_text, parse_date};
pub use locale::NumberLocale;
pub use number::{format_number, format_number_text, parse_number, ParsedNumber};
