// Matching Engine
// Implements: tokenization, feature extraction, weighted scoring, suggestions.
// Everything in here is synchronous and pure. The HTTP layer runs it inside spawn_blocking.

pub mod features;
pub mod handlers;
pub mod scorer;
pub mod suggestions;
pub mod tokenizer;
pub mod weights;

// Re-export the public API consumed by the handlers and the report renderer.
pub use scorer::{LexicalMatchScorer, MatchScorer};
pub use weights::ScoringConfig;
