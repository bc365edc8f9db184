use serde::{Deserialize, Serialize};

use super::common::Scalar;

/// Status string the device reports for a shut door
pub const DOOR_CLOSED: &str = "Closed";

/// Door state as reported by `/door`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoorState {
    pub status: String,
    /// Seconds the relay is driven for one door movement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Scalar>,
}

impl DoorState {
    pub fn is_closed(&self) -> bool {
        self.status == DOOR_CLOSED
    }

    /// The only action offered for the current status.
    ///
    /// Anything but an exact `"Closed"` counts as open.
    pub fn toggle_action(&self) -> DoorAction {
        if self.is_closed() {
            DoorAction::Open
        } else {
            DoorAction::Close
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DoorAction {
    Open,
    Close,
}

impl DoorAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Close => "Close",
        }
    }
}

/// Body of a door action request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoorActionRequest {
    pub action: DoorAction,
}
