//! XP and level progression.
//!
//! Levels follow a linear threshold: level 1 needs 100 XP to advance, and
//! each later level needs 50 XP more than the previous one.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

const BASE_THRESHOLD: i64 = 100;
const THRESHOLD_STEP: i64 = 50;

/// XP needed to advance from `level` to the next level.
pub fn xp_threshold_for_level(level: u32) -> i64 {
    BASE_THRESHOLD + (i64::from(level) - 1) * THRESHOLD_STEP
}

/// The user's XP standing.
///
/// `xp` is the amount accumulated toward the next level and may go
/// negative when completions are undone. `total_xp` only ever grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    #[serde(default)]
    pub xp: i64,
    #[serde(default = "first_level")]
    pub level: u32,
    #[serde(default)]
    pub total_xp: i64,
}

fn first_level() -> u32 {
    1
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            xp: 0,
            level: first_level(),
            total_xp: 0,
        }
    }
}

/// Result of a single XP award.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpAward {
    pub amount: i64,
    pub reason: String,
    /// Levels crossed by this award; 0 when no level-up happened.
    pub levels_gained: u32,
    /// Level after the award.
    pub level: u32,
}

impl XpAward {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

impl UserProgress {
    /// XP needed to leave the current level.
    pub fn threshold(&self) -> i64 {
        xp_threshold_for_level(self.level)
    }

    /// Adds `amount` XP and rolls over into as many levels as it covers.
    ///
    /// Negative amounts reduce current XP but never lifetime XP or level.
    pub fn award(&mut self, amount: i64, reason: impl Into<String>) -> XpAward {
        self.xp += amount;
        self.total_xp += amount.max(0);

        let mut levels_gained = 0;
        while self.xp >= self.threshold() {
            self.xp -= self.threshold();
            self.level += 1;
            levels_gained += 1;
        }

        XpAward {
            amount,
            reason: reason.into(),
            levels_gained,
            level: self.level,
        }
    }

    /// Fill of the XP bar toward the next level, clamped for display.
    pub fn level_fill(&self) -> Percentage {
        let xp = usize::try_from(self.xp.max(0)).unwrap_or(0);
        let threshold = usize::try_from(self.threshold().max(0)).unwrap_or(0);
        Percentage::of(xp, threshold)
    }
}
