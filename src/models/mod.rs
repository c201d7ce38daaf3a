pub mod network;
pub mod series;

pub use network::CounterSnapshot;
pub use series::{Completion, Sample, SampleRun, Series};
