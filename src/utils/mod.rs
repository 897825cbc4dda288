mod format_utils;

pub use format_utils::{
    format_capacity, format_fade_rate, format_pct, format_rul, format_signed_pct,
    format_temperature,
};
