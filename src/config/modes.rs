//! Progress reporting mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How batch progress is rendered while downloads run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressMode {
    /// Redraw on every completion event (default).
    #[default]
    Live,
    /// Re-read a shared counter on a fixed interval.
    Poll,
}

impl fmt::Display for ProgressMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressMode::Live => write!(f, "live"),
            ProgressMode::Poll => write!(f, "poll"),
        }
    }
}

impl FromStr for ProgressMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "live" => Ok(ProgressMode::Live),
            "poll" => Ok(ProgressMode::Poll),
            _ => Err(format!("Unknown progress mode: {}", s)),
        }
    }
}
