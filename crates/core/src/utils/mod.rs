pub mod decimal_utils;

pub use decimal_utils::{
    format_amount, parse_decimal_lenient, parse_decimal_strict,
    parse_months_lenient, parse_months_strict, round_for_display,
};
