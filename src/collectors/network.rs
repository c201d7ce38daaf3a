use log::{debug, error};
use std::time::Instant;
use systemstat::{Platform, System};

use crate::collectors::CounterSource;
use crate::models::CounterSnapshot;

/// Reads interface counters from the operating system.
pub struct SystemCounters {
    sys: System,
}

impl SystemCounters {
    pub fn new() -> Self {
        Self { sys: System::new() }
    }
}

impl Default for SystemCounters {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterSource for SystemCounters {
    fn snapshot(&self, interface: &str) -> Option<CounterSnapshot> {
        let start = Instant::now();
        let result = match self.sys.network_stats(interface) {
            Ok(stats) => Some(CounterSnapshot::new(
                stats.tx_bytes.as_u64(),
                stats.rx_bytes.as_u64(),
            )),
            Err(x) => {
                debug!("Network statistics unavailable for {}: {}", interface, x);
                None
            }
        };
        debug!("snapshot took: {} ms", start.elapsed().as_millis());
        result
    }

    fn interfaces(&self) -> Vec<String> {
        match self.sys.networks() {
            Ok(networks) => networks.into_keys().collect(),
            Err(x) => {
                error!("Network statistics error listing interfaces: {}", x);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_interface_is_absent() {
        let counters = SystemCounters::new();
        assert!(counters.snapshot("netbw-no-such-if0").is_none());
    }
}
