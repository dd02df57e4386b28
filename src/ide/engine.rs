//! InlineValuesEngine: one refresh of inline values for a paused session.
//!
//! ## Pipeline
//!
//! ```text
//! document_symbols(doc)        ← suspension: symbol provider (once)
//!     │
//!     ▼
//! collect_variables            ← flatten + filter
//!     │
//!     ▼
//! resolve_occurrences          ← pattern scan, or one reference lookup per symbol
//!     │
//!     ▼
//! LineBuckets (≤ stop line)    ← ascending lines, later lines dropped
//!     │
//!     ▼
//! Evaluator (memoized)         ← suspension: at most one evaluate per name
//!     │
//!     ▼
//! format_hint                  ← InlineValue per occurrence with a value
//! ```
//!
//! Every failure degrades to fewer annotations; nothing is returned as an
//! error to the host.

use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::base::{Position, Span};
use crate::hir::collect_variables;
use crate::host::{DebugSession, DocumentHost};
use crate::ide::{
    Evaluator, InlineValue, InlineValueError, InlineValueOptions, LineBuckets, Occurrence,
    format_hint, resolve_occurrences,
};

/// Where the debuggee is paused, as seen by one refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefreshContext {
    /// Position execution is suspended at. Lines after it get no hints.
    pub stop_cursor: Position,
    /// Selected stack frame; `None` means nothing can be evaluated.
    pub frame_id: Option<i64>,
    /// Visible part of the document, if the host restricts hints to it.
    pub viewport: Option<Span>,
}

impl RefreshContext {
    pub fn new(stop_cursor: Position, frame_id: Option<i64>) -> Self {
        Self {
            stop_cursor,
            frame_id,
            viewport: None,
        }
    }

    pub fn with_viewport(mut self, viewport: Span) -> Self {
        self.viewport = Some(viewport);
        self
    }

    fn is_visible(&self, line: u32) -> bool {
        self.viewport.is_none_or(|viewport| viewport.contains_line(line))
    }
}

/// The annotations of one refresh, in processing order (non-decreasing lines).
///
/// Computed eagerly: every evaluation has already happened by the time
/// `compute_annotations` returns. Single pass: iterating consumes it.
#[derive(Debug)]
pub struct InlineValues {
    values: std::vec::IntoIter<InlineValue>,
    cancelled: bool,
}

impl InlineValues {
    fn new(values: Vec<InlineValue>, cancelled: bool) -> Self {
        Self {
            values: values.into_iter(),
            cancelled,
        }
    }

    /// No annotations.
    pub fn empty() -> Self {
        Self::new(Vec::new(), false)
    }

    fn cancelled(values: Vec<InlineValue>) -> Self {
        Self::new(values, true)
    }

    /// Whether the refresh was cancelled before finishing.
    ///
    /// The annotations present were completed before cancellation and are
    /// still valid.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl Iterator for InlineValues {
    type Item = InlineValue;

    fn next(&mut self) -> Option<Self::Item> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl ExactSizeIterator for InlineValues {}

/// Computes inline values for a document while a debug session is paused.
#[derive(Clone, Debug, Default)]
pub struct InlineValuesEngine {
    options: InlineValueOptions,
}

impl InlineValuesEngine {
    pub fn new(options: InlineValueOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &InlineValueOptions {
        &self.options
    }

    /// Run one refresh.
    ///
    /// Without a session, for a document the options do not cover, or without
    /// a selected frame, no collaborator is called and the result is empty.
    /// Each refresh owns a fresh evaluation cache.
    pub async fn compute_annotations<D, S>(
        &self,
        document: &D,
        session: Option<&S>,
        context: &RefreshContext,
        cancel: &CancellationToken,
    ) -> InlineValues
    where
        D: DocumentHost,
        S: DebugSession,
    {
        let Some(session) = session else {
            trace!("[INLINE_VALUES] No active debug session");
            return InlineValues::empty();
        };
        if !self.options.accepts_path(document.path()) {
            trace!("[INLINE_VALUES] Skipping '{}': extension not enabled", document.path());
            return InlineValues::empty();
        }
        if context.frame_id.is_none() {
            trace!("[INLINE_VALUES] No frame selected");
            return InlineValues::empty();
        }
        if cancel.is_cancelled() {
            return InlineValues::cancelled(Vec::new());
        }

        let (occurrences, variable_count) = match self.locate(document, cancel).await {
            Ok(located) => located,
            Err(InlineValueError::Cancelled) => return InlineValues::cancelled(Vec::new()),
            Err(InlineValueError::Host(err)) => {
                debug!("[INLINE_VALUES] No symbols for '{}': {}", document.path(), err);
                return InlineValues::empty();
            }
        };

        let buckets = LineBuckets::new(occurrences, context.stop_cursor.line);
        let mut evaluator = Evaluator::new(session, context.frame_id);
        let mut values = Vec::with_capacity(buckets.occurrence_count());

        for (line, occurrences) in buckets.iter() {
            if !context.is_visible(line) {
                continue;
            }
            for occurrence in occurrences {
                if cancel.is_cancelled() {
                    debug!(
                        "[INLINE_VALUES] Cancelled at line {} with {} values",
                        line,
                        values.len()
                    );
                    return InlineValues::cancelled(values);
                }

                let result = evaluator.evaluate(&occurrence.name).await;
                match format_hint(occurrence, result, self.options.hint_style) {
                    Some(value) => values.push(value),
                    None => trace!(
                        "[INLINE_VALUES] Suppressed '{}' on line {}: {:?}",
                        occurrence.name, line, result
                    ),
                }
            }
        }

        debug!(
            "[INLINE_VALUES] {} values from {} variables, {} evaluations (stop line {})",
            values.len(),
            variable_count,
            evaluator.cache().len(),
            context.stop_cursor.line
        );
        InlineValues::new(values, false)
    }

    /// Fetch the symbol tree and resolve where each collected variable occurs.
    ///
    /// Also returns how many variables were collected.
    async fn locate<D>(
        &self,
        document: &D,
        cancel: &CancellationToken,
    ) -> Result<(Vec<Occurrence>, usize), InlineValueError>
    where
        D: DocumentHost,
    {
        let symbols = document.document_symbols().await?;
        let variables = collect_variables(&symbols, self.options.symbol_filter);
        let occurrences = resolve_occurrences(
            document,
            &variables,
            self.options.strategy,
            self.options.match_policy,
            cancel,
        )
        .await?;
        Ok((occurrences, variables.len()))
    }
}
