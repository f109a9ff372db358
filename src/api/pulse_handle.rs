use std::cell::Cell;
use std::rc::Rc;

/// Capability to request a beacon pulse from outside the engine.
///
/// Requests are coalesced: however many arrive between two frames, the next
/// frame runs one pulse. The handle is tied to the UI thread that owns the
/// engine.
#[derive(Debug, Clone)]
pub struct PulseHandle {
    pending: Rc<Cell<u32>>,
}

impl PulseHandle {
    pub(super) fn new(pending: Rc<Cell<u32>>) -> Self {
        Self { pending }
    }

    pub fn pulse(&self) {
        self.pending.set(self.pending.get().saturating_add(1));
    }

    #[must_use]
    pub fn pending(&self) -> u32 {
        self.pending.get()
    }
}
