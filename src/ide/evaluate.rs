//! Value evaluation against the paused debug session, memoized per refresh.

use indexmap::IndexMap;
use indexmap::map::Entry;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::host::{DebugSession, EvaluateError, EvaluateRequest};

/// Outcome of evaluating one expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvaluationResult {
    /// The session produced a value.
    Value { ty: Option<String>, value: String },
    /// No stack frame is selected, so nothing was evaluated.
    Unavailable,
    /// The session rejected the expression.
    Failed(EvaluateError),
}

impl EvaluationResult {
    /// A typed value.
    pub fn value(ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Value {
            ty: Some(ty.into()),
            value: value.into(),
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value { .. })
    }

    /// Whether the expression failed to resolve in the current frame.
    pub fn is_name_resolution_failure(&self) -> bool {
        matches!(self, Self::Failed(err) if err.is_name_resolution())
    }
}

/// Evaluation results keyed by expression, for one refresh only.
///
/// Keeps the order in which expressions were first evaluated. Never reuse a
/// cache for a later stop: the program state may have changed.
#[derive(Clone, Debug, Default)]
pub struct EvaluationCache {
    entries: IndexMap<SmolStr, EvaluationResult, FxBuildHasher>,
}

impl EvaluationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&EvaluationResult> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of distinct expressions evaluated.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expressions in first-evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(SmolStr::as_str)
    }
}

/// Evaluates expressions in one frame, at most once per distinct expression.
pub struct Evaluator<'s, S> {
    session: &'s S,
    frame_id: Option<i64>,
    cache: EvaluationCache,
}

impl<'s, S: DebugSession> Evaluator<'s, S> {
    /// Create an evaluator with an empty cache.
    pub fn new(session: &'s S, frame_id: Option<i64>) -> Self {
        Self {
            session,
            frame_id,
            cache: EvaluationCache::new(),
        }
    }

    /// Evaluate `name`, or return the cached result of an earlier call.
    ///
    /// Without a frame the result is [`EvaluationResult::Unavailable`] and no
    /// request is sent.
    pub async fn evaluate(&mut self, name: &str) -> &EvaluationResult {
        let Self {
            session,
            frame_id,
            cache,
        } = self;

        match cache.entries.entry(SmolStr::new(name)) {
            Entry::Occupied(entry) => {
                trace!("[EVALUATE] Cache hit for '{}'", name);
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                let result = request(*session, *frame_id, name).await;
                entry.insert(result)
            }
        }
    }

    pub fn frame_id(&self) -> Option<i64> {
        self.frame_id
    }

    pub fn cache(&self) -> &EvaluationCache {
        &self.cache
    }

    pub fn into_cache(self) -> EvaluationCache {
        self.cache
    }
}

async fn request<S: DebugSession>(
    session: &S,
    frame_id: Option<i64>,
    name: &str,
) -> EvaluationResult {
    let Some(frame_id) = frame_id else {
        trace!("[EVALUATE] No frame selected, skipping '{}'", name);
        return EvaluationResult::Unavailable;
    };

    let request = EvaluateRequest::variable(frame_id, name);
    match session.evaluate(&request).await {
        Ok(response) => {
            trace!(
                "[EVALUATE] '{}' = {} ({:?})",
                name, response.result, response.ty
            );
            EvaluationResult::Value {
                ty: response.ty,
                value: response.result,
            }
        }
        Err(err) if err.is_name_resolution() => {
            trace!("[EVALUATE] '{}' not bound in frame {}: {}", name, frame_id, err);
            EvaluationResult::Failed(err)
        }
        Err(err) => {
            debug!("[EVALUATE] '{}' failed in frame {}: {}", name, frame_id, err);
            EvaluationResult::Failed(err)
        }
    }
}
