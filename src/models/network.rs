/// Cumulative byte counters for one interface at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterSnapshot {
    pub bytes_sent: u64,
    pub bytes_received: u64,
}

impl CounterSnapshot {
    pub fn new(bytes_sent: u64, bytes_received: u64) -> Self {
        Self {
            bytes_sent,
            bytes_received,
        }
    }

    /// Signed `(sent, received)` change since `previous`. A counter that went
    /// backwards yields a negative component.
    pub fn delta_since(&self, previous: &CounterSnapshot) -> (i128, i128) {
        (
            self.bytes_sent as i128 - previous.bytes_sent as i128,
            self.bytes_received as i128 - previous.bytes_received as i128,
        )
    }
}
