/// Single-slot reuse pool for the id buffers handed out by `select_events`.
///
/// Holding one buffer amortises allocation across reload ticks while the
/// selected-event count stays stable. Receiving a buffer the pool never
/// handed out is harmless: the slot keeps whatever came back last.
#[derive(Debug, Default)]
pub struct EventBufferPool {
    slot: Option<Vec<u64>>,
}

impl EventBufferPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the pooled buffer truncated to zero length, or a fresh one.
    pub fn acquire(&mut self) -> Vec<u64> {
        match self.slot.take() {
            Some(mut buf) => {
                buf.clear();
                buf
            }
            None => Vec::new(),
        }
    }

    /// Stores a buffer for the next `acquire`.
    pub fn release(&mut self, buf: Vec<u64>) {
        self.slot = Some(buf);
    }
}
