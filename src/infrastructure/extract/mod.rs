//! Content extraction strategies

mod heuristic;
mod summarizer;

pub use heuristic::{HeuristicConfig, HeuristicExtractor};
pub use summarizer::{ModelSummarizer, SummarizerConfig};
