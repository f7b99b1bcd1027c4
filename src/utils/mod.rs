//! Utility functions for the dashboard backend
//!
//! Provides environment variable handling and date helpers.

pub mod dates;
pub mod env;

pub use dates::{date_stamp, format_nomination_date, parse_date};
pub use env::{get_base_url, get_optional, load_env, validate_base_url};
