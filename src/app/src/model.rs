use serde::{Deserialize, Serialize};

use crate::types::*;

/// Last-known value of one resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResourceValue {
    Door(DoorState),
    Network(NetworkConfig),
    Location(LocationConfig),
}

/// Session store of the device resources.
///
/// An entry is absent until the first successful fetch of its resource and is only ever
/// replaced afterwards, never removed or merged.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceStore {
    door: Option<DoorState>,
    network: Option<NetworkConfig>,
    location: Option<LocationConfig>,
}

impl ResourceStore {
    pub fn get(&self, resource: Resource) -> Option<ResourceValue> {
        match resource {
            Resource::Door => self.door.clone().map(ResourceValue::Door),
            Resource::Network => self.network.clone().map(ResourceValue::Network),
            Resource::Location => self.location.clone().map(ResourceValue::Location),
        }
    }

    /// Overwrite the entry named by `value` unconditionally
    pub fn set(&mut self, value: ResourceValue) {
        match value {
            ResourceValue::Door(door) => self.door = Some(door),
            ResourceValue::Network(network) => self.network = Some(network),
            ResourceValue::Location(location) => self.location = Some(location),
        }
    }

    pub fn contains(&self, resource: Resource) -> bool {
        match resource {
            Resource::Door => self.door.is_some(),
            Resource::Network => self.network.is_some(),
            Resource::Location => self.location.is_some(),
        }
    }

    pub fn door(&self) -> Option<&DoorState> {
        self.door.as_ref()
    }

    pub fn network(&self) -> Option<&NetworkConfig> {
        self.network.as_ref()
    }

    pub fn location(&self) -> Option<&LocationConfig> {
        self.location.as_ref()
    }
}

/// Application Model - the complete state
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Model {
    pub store: ResourceStore,

    // Form drafts, reseeded whenever their resource is written
    pub network_form: NetworkFormData,
    pub location_form: LocationFormData,

    pub confirmation: ConfirmationState,
}

impl Model {
    /// Reconcile with a value the device reported: replace the store entry and reseed the
    /// matching form from it.
    pub fn apply(&mut self, value: ResourceValue) {
        match &value {
            ResourceValue::Door(_) => {}
            ResourceValue::Network(config) => self.network_form = config.into(),
            ResourceValue::Location(config) => self.location_form = config.into(),
        }
        self.store.set(value);
    }
}
