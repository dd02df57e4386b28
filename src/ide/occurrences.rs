//! Occurrence resolution: where in the document each variable gets a hint.
//!
//! Two strategies, selected by [`OccurrenceStrategy`]:
//!
//! - **Pattern**: scan every line for the variable's name and anchor at the
//!   declaration's character columns on each matching line.
//! - **References**: ask the host's reference provider and re-anchor each
//!   returned range to the full dotted identifier it starts.

use smol_str::SmolStr;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::base::Span;
use crate::base::text_utils::{char_len, extend_reference_end, find_name, slice_chars};
use crate::hir::VariableSymbol;
use crate::host::{DocumentHost, HostError};
use crate::ide::{InlineValueError, MatchPolicy, OccurrenceStrategy};

/// One place where a variable's value should be shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occurrence {
    /// Expression evaluated for this occurrence.
    pub name: SmolStr,
    /// Exact character range the hint is anchored to.
    pub span: Span,
}

impl Occurrence {
    pub fn new(name: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }

    /// Line the occurrence is bucketed under.
    pub fn line(&self) -> u32 {
        self.span.start.line
    }
}

/// Find pattern-strategy occurrences of `symbol`.
///
/// Emits at most one occurrence per line that contains the name, anchored at
/// the declaration's start/end characters on that line. With
/// [`MatchPolicy::Substring`] a name also matches inside longer identifiers.
pub fn pattern_occurrences<D>(
    document: &D,
    symbol: &VariableSymbol,
    policy: MatchPolicy,
) -> Vec<Occurrence>
where
    D: DocumentHost,
{
    let whole_word = matches!(policy, MatchPolicy::WholeWord);
    let start = symbol.range.start.character;
    let end = symbol.range.end.character;

    (0..document.line_count())
        .filter(|&line| {
            document
                .line_text(line)
                .is_some_and(|text| find_name(text, &symbol.name, whole_word).is_some())
        })
        .map(|line| Occurrence::new(symbol.name.clone(), Span::on_line(line, start, end)))
        .collect()
}

/// Re-anchor one reference range to the full identifier it starts.
///
/// When the reported end lies strictly inside `line`, it is pushed forward
/// over `[A-Za-z0-9_.]`, so a provider that stops at `self` in `self.total`
/// still yields `self.total`. The occurrence name is the text between the
/// reference start and the recovered end. Returns `None` when that text is
/// empty.
pub fn reanchor_reference(line: &str, reference: Span) -> Option<Occurrence> {
    let line_no = reference.start.line;
    let start = reference.start.character;
    let reported_end = if reference.end.line == line_no {
        reference.end.character
    } else {
        char_len(line)
    };
    let end = extend_reference_end(line, reported_end);

    let name = slice_chars(line, start, end);
    if name.is_empty() {
        return None;
    }

    Some(Occurrence::new(name, Span::on_line(line_no, start, end)))
}

/// Find reference-strategy occurrences of `symbol`.
///
/// Issues exactly one reference lookup, at the declaration start.
pub async fn reference_occurrences<D>(
    document: &D,
    symbol: &VariableSymbol,
) -> Result<Vec<Occurrence>, HostError>
where
    D: DocumentHost,
{
    let references = document.references(symbol.range.start).await?;

    let occurrences = references
        .into_iter()
        .filter_map(|reference| {
            let Some(line) = document.line_text(reference.start.line) else {
                trace!(
                    "[OCCURRENCES] Reference for '{}' on missing line {}",
                    symbol.name, reference.start.line
                );
                return None;
            };
            reanchor_reference(line, reference)
        })
        .collect();

    Ok(occurrences)
}

/// Resolve the occurrences of every collected symbol with the given strategy.
///
/// A failed reference lookup drops that symbol only. Cancellation is checked
/// before each lookup.
pub async fn resolve_occurrences<D>(
    document: &D,
    symbols: &[&VariableSymbol],
    strategy: OccurrenceStrategy,
    policy: MatchPolicy,
    cancel: &CancellationToken,
) -> Result<Vec<Occurrence>, InlineValueError>
where
    D: DocumentHost,
{
    let mut occurrences = Vec::new();

    for symbol in symbols {
        if cancel.is_cancelled() {
            return Err(InlineValueError::Cancelled);
        }

        match strategy {
            OccurrenceStrategy::Pattern => {
                occurrences.extend(pattern_occurrences(document, symbol, policy));
            }
            OccurrenceStrategy::References => {
                match reference_occurrences(document, symbol).await {
                    Ok(found) => occurrences.extend(found),
                    Err(err) => {
                        debug!("[OCCURRENCES] Skipping '{}': {}", symbol.name, err);
                    }
                }
            }
        }
    }

    trace!(
        "[OCCURRENCES] {} occurrences for {} symbols ({:?})",
        occurrences.len(),
        symbols.len(),
        strategy
    );
    Ok(occurrences)
}
