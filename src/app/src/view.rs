//! View model derivation.
//!
//! Every region is optional: `None` means the resource has not been loaded yet and the
//! shell must leave that part of the screen as it is. Regions show the device's values;
//! the editable drafts are carried separately.

use serde::{Deserialize, Serialize};

use crate::model::Model;
use crate::types::*;

/// Shown while the device reports no station address
pub const IP_ADDRESS_UNKNOWN: &str = "(unknown)";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoorView {
    pub status: String,
    /// Label of the single toggle button
    pub action_label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkView {
    pub ip_address: String,
    pub essid: String,
    pub password: String,
    pub can_start_ap: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationView {
    pub latitude: String,
    pub longitude: String,
    pub timezone: String,
    pub timezone_name: String,
    pub utc_offset_hours: Option<i8>,
    pub observes_dst: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimezoneOption {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub door: Option<DoorView>,
    pub network: Option<NetworkView>,
    pub location: Option<LocationView>,
    /// Current input of the network form
    pub network_form: NetworkFormData,
    /// Current input of the location form
    pub location_form: LocationFormData,
    pub config_saved: bool,
    pub timezone_options: Vec<TimezoneOption>,
}

fn door_view(door: &DoorState) -> DoorView {
    DoorView {
        status: door.status.clone(),
        action_label: door.toggle_action().label().to_string(),
    }
}

fn network_view(network: &NetworkConfig) -> NetworkView {
    NetworkView {
        ip_address: network
            .ip_address
            .clone()
            .unwrap_or_else(|| IP_ADDRESS_UNKNOWN.to_string()),
        essid: network.essid.clone(),
        password: network.password.clone(),
        can_start_ap: network.can_start_ap,
    }
}

fn location_view(location: &LocationConfig) -> LocationView {
    let timezone = lookup_timezone(&location.timezone);
    LocationView {
        latitude: location.latitude.to_string(),
        longitude: location.longitude.to_string(),
        timezone: location.timezone.clone(),
        timezone_name: timezone_display_name(&location.timezone).to_string(),
        utc_offset_hours: timezone.map(|tz| tz.utc_offset_hours),
        observes_dst: timezone.map(|tz| tz.observes_dst),
    }
}

/// Derive what the shell shows from the model; never mutates it
pub fn render(model: &Model) -> ViewModel {
    ViewModel {
        door: model.store.door().map(door_view),
        network: model.store.network().map(network_view),
        location: model.store.location().map(location_view),
        network_form: model.network_form.clone(),
        location_form: model.location_form.clone(),
        config_saved: model.confirmation.is_visible(),
        timezone_options: TIMEZONES
            .iter()
            .map(|tz| TimezoneOption {
                code: tz.code.to_string(),
                name: tz.name.to_string(),
            })
            .collect(),
    }
}
