//! Main TUI runner - entry point and event loop

use std::sync::{Arc, Mutex};

use campus_app::actions::handle_action;
use campus_app::{
    process_message, spawn_signal_handler, AppState, CodeRunSlot, Message, Settings,
    UpdateAction,
};
use campus_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the TUI with the given settings until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!(
        "Starting on {} as {} (run delay {:?})",
        settings.session.page,
        settings.session.role,
        settings.exercise.run_delay()
    );

    let mut state = AppState::with_settings(settings);

    // Unified message channel: signal handler and code runs feed it
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    spawn_signal_handler(msg_tx.clone());

    // At most one simulated code run in flight
    let code_run: CodeRunSlot = Arc::new(Mutex::new(None));

    let mut term = ratatui::init();
    let result = run_loop(&mut term, &mut state, msg_rx, &msg_tx, &code_run);

    // Abort a pending run before tearing down
    handle_action(UpdateAction::CancelCodeRun, msg_tx, &code_run);
    ratatui::restore();

    info!("Shutting down");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    code_run: &CodeRunSlot,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (signal handler, code run completions)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, code_run);
        }

        if state.should_quit() {
            break;
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, msg_tx, code_run);
        }
    }

    Ok(())
}
