//! Gamification - XP accrual, level thresholds, and completion rewards.

mod progression;
mod rewards;

pub use progression::{xp_threshold_for_level, UserProgress, XpAward};
pub use rewards::{rewards_for_toggle, Reward, MAIN_GOAL_BONUS_XP, SUB_GOAL_XP};
