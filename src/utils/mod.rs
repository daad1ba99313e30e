//! Utility modules shared across the engine
//!
//! - Clock: the single wall-clock read, for default evaluation years
//! - Text: id slugs and currency formatting for justification text

pub mod clock;
pub mod text;

pub use clock::{current_year, year_or_now};
pub use text::{format_currency, slugify};
