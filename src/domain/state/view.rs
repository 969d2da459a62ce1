//! The current view selector.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Which screen the presentation layer shows.
///
/// Any name is accepted; names without a dedicated screen are kept as
/// `Other` and rendered like the weekly view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum View {
    #[default]
    Weekly,
    Cycles,
    MainGoals,
    SubGoals,
    Stats,
    Other(String),
}

impl View {
    pub fn as_str(&self) -> &str {
        match self {
            View::Weekly => "weekly",
            View::Cycles => "cycles",
            View::MainGoals => "main-goals",
            View::SubGoals => "sub-goals",
            View::Stats => "stats",
            View::Other(name) => name,
        }
    }
}

impl From<String> for View {
    fn from(name: String) -> Self {
        match name.as_str() {
            "weekly" => View::Weekly,
            "cycles" => View::Cycles,
            "main-goals" => View::MainGoals,
            "sub-goals" => View::SubGoals,
            "stats" => View::Stats,
            _ => View::Other(name),
        }
    }
}

impl From<View> for String {
    fn from(view: View) -> Self {
        view.as_str().to_string()
    }
}

impl FromStr for View {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(View::from(s.to_string()))
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_parse_to_variants() {
        assert_eq!("main-goals".parse::<View>().unwrap(), View::MainGoals);
        assert_eq!("stats".parse::<View>().unwrap(), View::Stats);
    }

    #[test]
    fn unknown_names_are_kept() {
        let view: View = "dashboard".parse().unwrap();
        assert_eq!(view, View::Other("dashboard".to_string()));
        assert_eq!(view.to_string(), "dashboard");
    }

    #[test]
    fn view_serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&View::SubGoals).unwrap(), "\"sub-goals\"");
        let view: View = serde_json::from_str("\"tasks\"").unwrap();
        assert_eq!(view, View::Other("tasks".to_string()));
    }
}
