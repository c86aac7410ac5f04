pub mod berlin_clock;
pub mod clock_errors;
pub mod converter;
pub mod stripe;
pub mod time_value;
