//! Run management actions
//!
//! [`RunAction`] is a closed set. Every table keyed by it (eligibility,
//! capability gate) is an exhaustive `match`, so adding a member is a compile
//! error until each table handles it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Management action that can be offered for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunAction {
    /// Hide a finished run from default listings
    Archive,
    /// Permanently remove a run
    Delete,
    /// Force-stop a run
    Kill,
    /// Move a run to another project
    Move,
    /// Suspend a run
    Pause,
    /// Continue a paused run
    Resume,
    /// Restore an archived run
    Unarchive,
}

impl RunAction {
    /// Number of actions in the closed set
    pub const COUNT: usize = 7;

    /// Every action, in declaration order
    pub const ALL: [RunAction; Self::COUNT] = [
        RunAction::Archive,
        RunAction::Delete,
        RunAction::Kill,
        RunAction::Move,
        RunAction::Pause,
        RunAction::Resume,
        RunAction::Unarchive,
    ];

    /// Get the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            RunAction::Archive => "archive",
            RunAction::Delete => "delete",
            RunAction::Kill => "kill",
            RunAction::Move => "move",
            RunAction::Pause => "pause",
            RunAction::Resume => "resume",
            RunAction::Unarchive => "unarchive",
        }
    }

    /// Dense index in `0..COUNT`
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for RunAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RunAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        RunAction::ALL
            .iter()
            .copied()
            .find(|action| action.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::invalid_action(s))
    }
}

/// Parse a list of action names, failing on the first unknown name
///
/// Nothing is evaluated for a list that contains an invalid name.
pub fn parse_actions<S: AsRef<str>>(names: &[S]) -> Result<Vec<RunAction>> {
    names.iter().map(|name| name.as_ref().parse()).collect()
}
