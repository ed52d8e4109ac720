// Auto-advance cancellation signal

use tokio::sync::watch;

/// Receiving side, held by the advance task
#[derive(Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// Check if cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait for the cancel signal (or for the sender to go away)
    pub async fn cancelled(&mut self) {
        while !*self.rx.borrow() {
            if self.rx.changed().await.is_err() {
                return;
            }
        }
    }
}

/// Sending side, held by the handle
pub struct CancelSender {
    tx: watch::Sender<bool>,
}

impl CancelSender {
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

/// Create a cancel channel
pub fn cancel_channel() -> (CancelSender, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelSender { tx }, CancelToken { rx })
}
