//! Cycle module - twelve-week cycles and their week arithmetic.

mod aggregate;
pub mod calendar;

pub use aggregate::{Cycle, Week};
pub use calendar::{
    current_week_number, generate_weeks, time_until_week_end, Countdown, WEEKS_PER_CYCLE,
};
