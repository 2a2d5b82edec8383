use tokio::sync::watch;
use tracing::warn;

/// Host side of the single-fire "content ready" notification.
#[derive(Debug)]
pub struct ReadyTrigger {
    tx: watch::Sender<bool>,
}

/// Wallpaper side of the "content ready" notification.
///
/// Waiting on a signal that already fired returns at once, so it does not
/// matter whether the host signals before or after the wallpaper starts.
#[derive(Debug, Clone)]
pub struct ReadySignal {
    rx: watch::Receiver<bool>,
}

/// Creates a connected, not yet fired, trigger/signal pair.
pub fn ready_signal() -> (ReadyTrigger, ReadySignal) {
    let (tx, rx) = watch::channel(false);
    (ReadyTrigger { tx }, ReadySignal { rx })
}

impl ReadyTrigger {
    /// Fires the signal. Firing again has no further effect.
    pub fn fire(&self) {
        self.tx.send_if_modified(|ready| !std::mem::replace(ready, true));
    }
}

impl ReadySignal {
    /// A signal that has already fired.
    pub fn fired() -> Self {
        let (trigger, signal) = ready_signal();
        trigger.fire();
        signal
    }

    /// Whether the host has signalled.
    pub fn is_ready(&self) -> bool {
        *self.rx.borrow()
    }

    /// Waits until the host signals.
    ///
    /// If the host drops its trigger without firing, waiting ends anyway so
    /// the wallpaper still paints.
    pub async fn wait(&mut self) {
        if self.rx.wait_for(|ready| *ready).await.is_err() {
            warn!("Ready trigger dropped before firing, starting anyway");
        }
    }
}
