use core::fmt;
use serde::{Deserialize, Serialize};

/// User intent reported back to the host, one per gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileAction {
    Reveal,
    Flag,
    Unflag,
}

impl TileAction {
    pub const fn as_str(self) -> &'static str {
        use TileAction::*;
        match self {
            Reveal => "reveal",
            Flag => "flag",
            Unflag => "unflag",
        }
    }
}

impl fmt::Display for TileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value handed to the host: exactly `{"action": "..."}`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPayload {
    pub action: TileAction,
}

impl From<TileAction> for ActionPayload {
    fn from(action: TileAction) -> Self {
        Self { action }
    }
}
