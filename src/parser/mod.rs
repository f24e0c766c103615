//! HTML parsing for the controller's status pages
//!
//! This module contains:
//! - Key/value text cleanup
//! - The generic label/bold-value page parser
//! - The alarm page parser (current alarm and alarm history)

mod alarm;
mod clean;
mod page;

pub use alarm::{parse_error_page, AlarmPage};
pub use clean::{clean_key, clean_value, normalize_space};
pub use page::parse_page;
