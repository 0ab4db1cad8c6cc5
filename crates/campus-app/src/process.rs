//! Message processing
//!
//! Runs a message through the TEA update loop, dispatching any action and
//! following chained messages until the chain ends.

use tokio::sync::mpsc;

use crate::actions::{handle_action, CodeRunSlot};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    code_run: &CodeRunSlot,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), code_run);
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::input_key::InputKey;
    use campus_core::exercise::RUN_OUTPUT;
    use campus_core::Page;

    fn setup() -> (
        AppState,
        mpsc::Sender<Message>,
        mpsc::Receiver<Message>,
        CodeRunSlot,
    ) {
        let (tx, rx) = mpsc::channel(16);
        (
            AppState::new(),
            tx,
            rx,
            Arc::new(std::sync::Mutex::new(None)),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_completes_through_event_loop() {
        let (mut state, tx, mut rx, code_run) = setup();
        process_message(&mut state, Message::Navigate(Page::CodeEditor), &tx, &code_run);
        process_message(&mut state, Message::Key(InputKey::Char('r')), &tx, &code_run);
        assert!(state.view.exercise().is_some_and(|e| e.running));

        let finished = rx.recv().await;
        assert_eq!(finished, Some(Message::CodeRunFinished { generation: 1 }));
        if let Some(msg) = finished {
            process_message(&mut state, msg, &tx, &code_run);
        }

        let exercise = state.view.exercise();
        assert!(exercise.is_some_and(|e| !e.running));
        assert_eq!(exercise.map(|e| e.output.as_str()), Some(RUN_OUTPUT));
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigating_away_stops_pending_run() {
        let (mut state, tx, mut rx, code_run) = setup();
        process_message(&mut state, Message::Navigate(Page::CodeEditor), &tx, &code_run);
        process_message(&mut state, Message::RunCode, &tx, &code_run);
        process_message(&mut state, Message::Navigate(Page::Lesson), &tx, &code_run);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(state.page, Page::Lesson);
    }
}
