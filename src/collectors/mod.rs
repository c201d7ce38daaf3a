use crate::models::CounterSnapshot;

pub mod network;

pub use network::SystemCounters;

/// Point-in-time access to per-interface byte counters.
pub trait CounterSource {
    /// Current counters for `interface`, or `None` if the OS does not report it.
    fn snapshot(&self, interface: &str) -> Option<CounterSnapshot>;

    /// Names of all interfaces the OS currently reports.
    fn interfaces(&self) -> Vec<String>;
}
