use serde::{Deserialize, Serialize};

use crate::types::*;

/// Resource loading and reconciliation
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// Fetch a single resource again
    Reload(Resource),

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    DoorLoaded(Result<DoorState, String>),
    #[serde(skip)]
    NetworkLoaded(Result<NetworkConfig, String>),
    #[serde(skip)]
    LocationLoaded(Result<LocationConfig, String>),
    #[serde(skip)]
    DoorSaved(Result<DoorState, String>),
    #[serde(skip)]
    NetworkSaved(Result<NetworkConfig, String>),
    #[serde(skip)]
    LocationSaved(Result<LocationConfig, String>),
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum FormName {
    Network,
    Location,
}

/// Form edits and submission
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum FormEvent {
    NetworkFormUpdate(NetworkFormData),
    LocationFormUpdate(LocationFormData),
    Submit(FormName),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum DoorEvent {
    Toggle,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    DismissConfirmation { generation: u32 },
}

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Initialize,
    Sync(SyncEvent),
    Form(FormEvent),
    Door(DoorEvent),
    Ui(UiEvent),
}
