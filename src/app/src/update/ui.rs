use crux_core::{render::render, Command};

use crate::events::{Event, UiEvent};
use crate::model::Model;
use crate::{Effect, TimerCmd};

/// How long the "configuration saved" indicator stays up after the latest save
pub const CONFIRMATION_DISMISS_MS: u64 = 5000;

/// Show the indicator and (re)start its dismissal timer
pub fn show_confirmation(model: &mut Model) -> Command<Effect, Event> {
    let generation = model.confirmation.show();
    TimerCmd::notify_after(CONFIRMATION_DISMISS_MS)
        .build()
        .then_send(move |_| Event::Ui(UiEvent::DismissConfirmation { generation }))
}

/// Handle UI-related events
pub fn handle(event: UiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        UiEvent::DismissConfirmation { generation } => {
            if model.confirmation.dismiss(generation) {
                render()
            } else {
                Command::done()
            }
        }
    }
}
