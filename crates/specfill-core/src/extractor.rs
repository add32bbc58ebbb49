//! The extraction capability shared by every strategy.
//!
//! Implementations:
//! - `RuleExtractor` (specfill-extract): pattern catalog + merge engine.
//! - `AiExtractor` (specfill-ai): delegates to an external LLM and validates the reply.

use async_trait::async_trait;

use crate::types::{ProductContext, SpecSet};

/// Turns one product context into an ordered spec set.
///
/// Extraction never fails outright: a strategy that cannot produce
/// anything returns an empty set.
#[async_trait]
pub trait SpecExtractor: Send + Sync {
    /// Short strategy name for logs and reports.
    fn name(&self) -> &'static str;

    /// Whether each call reaches an external service (and should be rate limited).
    fn is_remote(&self) -> bool {
        false
    }

    /// Extract the spec set for one record.
    async fn extract(&self, context: &ProductContext) -> SpecSet;
}
