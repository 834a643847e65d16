use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Pointer-capture state shared between the event loop and the input
/// tracker.
///
/// Single writer: only the event loop sets the flag, in response to grab
/// requests and focus changes. Readers may observe a value that is stale by
/// up to one event-loop round trip; the simulation tolerates that by simply
/// ignoring pointer input until capture is confirmed.
#[derive(Clone, Debug, Default)]
pub struct CaptureFlag {
    captured: Arc<AtomicBool>,
}

impl CaptureFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, captured: bool) {
        self.captured.store(captured, Ordering::Relaxed);
    }

    pub fn get(&self) -> bool {
        self.captured.load(Ordering::Relaxed)
    }
}
