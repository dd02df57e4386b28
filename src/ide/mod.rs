//! IDE features: inline debug values for the host editor.
//!
//! This module turns a document symbol tree plus a paused debug session into
//! annotations of the form `name: type = value` anchored next to the code.
//!
//! ## Design Principles
//!
//! 1. **Best effort**: every collaborator failure yields fewer annotations, never an error
//! 2. **No host types**: uses our own types, converted at the host boundary
//! 3. **Per-refresh state**: the evaluation cache lives and dies with one refresh
//!
//! ## Usage
//!
//! ```ignore
//! use inline_values::ide::{InlineValuesEngine, RefreshContext};
//!
//! let engine = InlineValuesEngine::default();
//! let context = RefreshContext::new(stop_cursor, Some(frame_id));
//! for value in engine
//!     .compute_annotations(&document, Some(&session), &context, &cancel)
//!     .await
//! {
//!     render(value.span, &value.text);
//! }
//! ```

mod engine;
mod error;
mod evaluate;
mod hints;
mod lines;
mod occurrences;
mod options;

pub use engine::{InlineValues, InlineValuesEngine, RefreshContext};
pub use error::InlineValueError;
pub use evaluate::{EvaluationCache, EvaluationResult, Evaluator};
pub use hints::{InlineValue, format_hint};
pub use lines::LineBuckets;
pub use occurrences::{
    Occurrence, pattern_occurrences, reanchor_reference, reference_occurrences,
    resolve_occurrences,
};
pub use options::{HintStyle, InlineValueOptions, MatchPolicy, OccurrenceStrategy};
