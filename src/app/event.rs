//! Terminal event reader.
//!
//! A background task polls crossterm and forwards the events we care about
//! over a channel so the main loop can `select!` on it.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Spawn the reader. It exits once the receiver is dropped.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || loop {
        let app_event = match event::poll(tick_rate) {
            Ok(true) => match event::read() {
                // Windows reports releases too; only presses drive the forms.
                Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => AppEvent::Key(k),
                Ok(CtEvent::Resize(..)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(err) => {
                    tracing::warn!(%err, "terminal read failed");
                    break;
                }
            },
            Ok(false) => AppEvent::Tick,
            Err(err) => {
                tracing::warn!(%err, "terminal poll failed");
                break;
            }
        };
        if tx.send(app_event).is_err() {
            break;
        }
    });

    rx
}
