//! Pipeline orchestration module.

mod orchestrator;
mod source;
mod stats;

pub use orchestrator::{InputSource, Pipeline, PipelineConfig};
pub use stats::PipelineStats;
