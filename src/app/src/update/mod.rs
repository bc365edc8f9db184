mod door;
mod form;
mod sync;
mod ui;

pub use sync::{load, load_all, save};
pub use ui::{show_confirmation, CONFIRMATION_DISMISS_MS};

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize => load_all(),
        Event::Sync(sync_event) => sync::handle(sync_event, model),
        Event::Form(form_event) => form::handle(form_event, model),
        Event::Door(door_event) => door::handle(door_event, model),
        Event::Ui(ui_event) => ui::handle(ui_event, model),
    }
}
