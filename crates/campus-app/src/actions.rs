//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;
use std::time::Duration;

use campus_core::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::message::Message;
use crate::UpdateAction;

/// Handle of the simulated code run in flight, if any
pub type CodeRunSlot = Arc<std::sync::Mutex<Option<JoinHandle<()>>>>;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, code_run: &CodeRunSlot) {
    match action {
        UpdateAction::StartCodeRun { generation, delay } => {
            let handle = spawn_code_run(generation, delay, msg_tx);
            replace_run(code_run, Some(handle));
        }

        UpdateAction::CancelCodeRun => {
            replace_run(code_run, None);
        }
    }
}

/// Sleep for `delay`, then report the run as finished
fn spawn_code_run(
    generation: u64,
    delay: Duration,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if let Err(e) = msg_tx.send(Message::CodeRunFinished { generation }).await {
            let err = Error::channel_send(e.to_string());
            debug!("Code run {} finished after the event loop closed: {}", generation, err);
        }
    })
}

/// Store `next` as the in-flight run, aborting whatever was there
fn replace_run(slot: &CodeRunSlot, next: Option<JoinHandle<()>>) {
    match slot.lock() {
        Ok(mut guard) => {
            if let Some(previous) = std::mem::replace(&mut *guard, next) {
                previous.abort();
            }
        }
        Err(e) => warn!("Code run slot poisoned: {}", e),
    }
}
