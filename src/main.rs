#![forbid(unsafe_code)]

//! Binary entry point: wire the lifecycle events to the launcher and hand
//! the event loop to the native shell.

use anyhow::Result;

use reloj::events::{EventBus, LifecycleEvent};
use reloj::launcher::Launcher;
use reloj::shell::{NativeShell, Shell};
use reloj::storage;

fn main() -> Result<()> {
    env_logger::init();

    let settings = storage::load_settings();
    let bus = EventBus::new();
    let publisher = bus.publisher();
    let mut shell = NativeShell::new();
    let mut launcher = Launcher::new(settings.window, settings.document);

    // The shell is ready as soon as we are about to enter its event loop.
    publisher.publish(LifecycleEvent::Ready);
    dispatch(&bus, &mut launcher, &mut shell);

    // Blocks for the lifetime of the overlay window.
    shell.run()?;

    publisher.publish(LifecycleEvent::AllWindowsClosed);
    dispatch(&bus, &mut launcher, &mut shell);

    Ok(())
}

/// Drain the bus and hand each event to the launcher.
fn dispatch(bus: &EventBus, launcher: &mut Launcher, shell: &mut dyn Shell) {
    for event in bus.drain() {
        if let Err(err) = launcher.handle_event(event, shell) {
            log::error!("{} failed: {err:#}", event.description());
        }
    }
}
