//! Hint text for an evaluated occurrence.

use crate::base::Span;
use crate::ide::{EvaluationResult, HintStyle, Occurrence};

/// An annotation to render beside the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineValue {
    /// Character range the annotation belongs to (not the whole line).
    pub span: Span,
    /// Display text, e.g. `total: int = 42`.
    pub text: String,
}

impl InlineValue {
    pub fn new(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            text: text.into(),
        }
    }

    pub fn line(&self) -> u32 {
        self.span.start.line
    }
}

/// Render the hint for `occurrence`, or `None` when there is no value to show.
///
/// Unavailable and failed evaluations produce no hint.
pub fn format_hint(
    occurrence: &Occurrence,
    result: &EvaluationResult,
    style: HintStyle,
) -> Option<InlineValue> {
    let EvaluationResult::Value { ty, value } = result else {
        return None;
    };

    let text = match (style, ty.as_deref()) {
        (HintStyle::Typed, Some(ty)) if !ty.is_empty() => {
            format!("{}: {ty} = {value}", occurrence.name)
        }
        _ => format!("{} = {value}", occurrence.name),
    };

    Some(InlineValue::new(occurrence.span, text))
}
