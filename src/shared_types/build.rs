use anyhow::Result;
use crux_core::typegen::TypeGen;
use dawndoor_ui_core::{
    events::{DoorEvent, FormEvent, FormName, SyncEvent, UiEvent},
    types::{DoorAction, Resource},
    App, TimerOperation, TimerOutput,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut typegen = TypeGen::new();

    typegen.register_app::<App>()?;

    // Enums nested in events are only fully traced when registered on their own
    typegen.register_type::<SyncEvent>()?;
    typegen.register_type::<FormEvent>()?;
    typegen.register_type::<DoorEvent>()?;
    typegen.register_type::<UiEvent>()?;
    typegen.register_type::<FormName>()?;
    typegen.register_type::<Resource>()?;
    typegen.register_type::<DoorAction>()?;
    typegen.register_type::<TimerOperation>()?;
    typegen.register_type::<TimerOutput>()?;

    let output_root = PathBuf::from("./generated");

    typegen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
