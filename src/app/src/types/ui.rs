use serde::{Deserialize, Serialize};

/// "Configuration saved" indicator.
///
/// Every successful save bumps `generation`; only the dismissal scheduled by the most
/// recent save may hide the indicator again.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfirmationState {
    visible: bool,
    generation: u32,
}

impl ConfirmationState {
    /// Show the indicator and return the generation its dismissal must carry
    pub fn show(&mut self) -> u32 {
        self.visible = true;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Hide the indicator if `generation` is still the latest one.
    ///
    /// Returns whether the indicator changed.
    pub fn dismiss(&mut self, generation: u32) -> bool {
        if self.visible && generation == self.generation {
            self.visible = false;
            true
        } else {
            false
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
