pub mod metrics;

pub use metrics::{Census, SimulationMetrics, Totals};
