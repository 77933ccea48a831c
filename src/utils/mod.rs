mod format;
mod perf;
mod time_utils;

pub use format::{format_pct, format_price, format_volume, group_thousands, round2};
pub use time_utils::{AppInstant, TimeUtils};
