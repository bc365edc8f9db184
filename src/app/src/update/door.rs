use crux_core::Command;

use crate::events::{DoorEvent, Event};
use crate::model::Model;
use crate::types::{DoorActionRequest, Resource};
use crate::Effect;

use super::sync;

/// Handle the door toggle.
///
/// The action is derived from the last known status; without one there is nothing to toggle.
pub fn handle(event: DoorEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        DoorEvent::Toggle => match model.store.door() {
            Some(door) => {
                let request = DoorActionRequest {
                    action: door.toggle_action(),
                };
                log::info!("requesting door action: {}", request.action.label());
                sync::save(Resource::Door, &request)
            }
            None => {
                log::warn!("door toggle ignored: door state not loaded");
                Command::done()
            }
        },
    }
}
