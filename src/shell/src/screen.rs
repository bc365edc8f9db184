use dawndoor_ui_core::{
    ViewModel,
    view::{DoorView, LocationView, NetworkView},
};
use std::fmt;

const NOT_LOADED: &str = "(not loaded)";

/// What the operator sees
///
/// A region keeps whatever it showed last until the core has a value for it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Screen {
    door: Option<DoorView>,
    network: Option<NetworkView>,
    location: Option<LocationView>,
    config_saved: bool,
}

impl Screen {
    pub fn apply(&mut self, view: &ViewModel) {
        if let Some(door) = &view.door {
            self.door = Some(door.clone());
        }
        if let Some(network) = &view.network {
            self.network = Some(network.clone());
        }
        if let Some(location) = &view.location {
            self.location = Some(location.clone());
        }
        self.config_saved = view.config_saved;
    }

    pub fn door(&self) -> Option<&DoorView> {
        self.door.as_ref()
    }

    pub fn network(&self) -> Option<&NetworkView> {
        self.network.as_ref()
    }

    pub fn location(&self) -> Option<&LocationView> {
        self.location.as_ref()
    }

    pub fn config_saved(&self) -> bool {
        self.config_saved
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Door")?;
        match &self.door {
            Some(door) => writeln!(f, "  status:       {} [{}]", door.status, door.action_label)?,
            None => writeln!(f, "  {NOT_LOADED}")?,
        }

        writeln!(f, "Network")?;
        match &self.network {
            Some(network) => {
                writeln!(f, "  ip address:   {}", network.ip_address)?;
                writeln!(f, "  essid:        {}", network.essid)?;
                writeln!(f, "  password:     {}", network.password)?;
                writeln!(f, "  can start ap: {}", network.can_start_ap)?;
            }
            None => writeln!(f, "  {NOT_LOADED}")?,
        }

        writeln!(f, "Location")?;
        match &self.location {
            Some(location) => {
                writeln!(f, "  latitude:     {}", location.latitude)?;
                writeln!(f, "  longitude:    {}", location.longitude)?;
                writeln!(f, "  timezone:     {} {}", location.timezone, location.timezone_name)?;
                if let Some(offset) = location.utc_offset_hours {
                    let dst = if location.observes_dst == Some(true) {
                        ", observes DST"
                    } else {
                        ""
                    };
                    writeln!(f, "  utc offset:   {offset:+}h{dst}")?;
                }
            }
            None => writeln!(f, "  {NOT_LOADED}")?,
        }

        if self.config_saved {
            writeln!(f)?;
            writeln!(f, "Configuration saved")?;
        }

        Ok(())
    }
}
