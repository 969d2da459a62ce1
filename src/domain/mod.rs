//! Domain layer containing the tracker's model and pure business rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared value objects (IDs, timestamps, percentages, errors)
//! - `cycle` - The 12-week cycle and its week calendar
//! - `goal` - Main goals, sub goals, and legacy tasks
//! - `gamification` - XP, levels, and completion rewards
//! - `state` - The full application state and its saved document format
//! - `progress` - Completion percentages, trends, and statistics

pub mod cycle;
pub mod foundation;
pub mod gamification;
pub mod goal;
pub mod progress;
pub mod state;
