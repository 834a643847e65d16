mod loop_runner;
mod metrics;
mod rendering;
mod tools;

pub use loop_runner::{run_app, AppError, LoopConfig};
pub use metrics::LoopMetricsSnapshot;
pub use rendering::{PlanRenderer, Viewport};
