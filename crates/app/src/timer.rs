//! Cancellable single-slot timers.
//!
//! The only scheduling primitive the pages use: one slot per search box
//! debounce, one slot per pending-delete countdown. Re-arming cancels the
//! previous occupant. Cancellation is only effective while the delay is
//! still pending; once the callback has started it runs to completion, so
//! a backend commit is never torn down halfway.

use std::time::Duration;

use tokio::sync::oneshot;

#[derive(Default)]
pub struct CancellableTimer {
    cancel: Option<oneshot::Sender<()>>,
}

impl CancellableTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the slot: after `delay`, run `callback`. Any previously armed
    /// callback that has not fired yet is cancelled.
    pub fn arm<F>(&mut self, delay: Duration, callback: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            tokio::select! {
                _ = rx => {}
                _ = tokio::time::sleep(delay) => {
                    callback.await;
                }
            }
        });
        self.cancel = Some(tx);
    }

    /// Cancel the pending callback, if any. A callback already past its
    /// delay is not interrupted.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
    }

    pub fn is_armed(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|tx| !tx.is_closed())
    }
}

impl Drop for CancellableTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
