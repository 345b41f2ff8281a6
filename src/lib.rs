//! Shared design-system template helpers.
//!
//! Display formatting (dates, relative times, numbers, truncation),
//! pagination windows, zero-value defaulting and a name → function map
//! that host template engines call into.

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::DsConfig;

pub use crate::core::clock::{FixedClock, SystemClock};
pub use crate::core::funcmap::{func_map, func_map_with, merge_func_map, FuncMap, TemplateFn};
pub use crate::core::number::format_number;
pub use crate::core::text::{bool_state, bool_yes_no, truncate};
pub use crate::core::time::{format_date, format_date_time, format_time, time_ago, TimeFormatter, TimeInput};
pub use crate::core::values::{coalesce, default_value, dict};
pub use crate::domain::model::*;
pub use crate::domain::ports::Clock;
pub use crate::utils::error::{DsError, Result};
