//! The debug session collaborator: the DAP `evaluate` request.

use smol_str::SmolStr;

use crate::host::EvaluateError;

/// The DAP `context` argument of an `evaluate` request.
///
/// Adapters use it to decide between inspecting a value and running the
/// expression as a statement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvaluateContext {
    /// Inspect a variable, as the variables view does. Side-effect free.
    #[default]
    Variables,
    /// Watch expression.
    Watch,
    /// Debug console input; may execute statements.
    Repl,
    /// Editor hover.
    Hover,
    /// Copy-value to clipboard.
    Clipboard,
}

impl EvaluateContext {
    /// Protocol string for this context.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Variables => "variables",
            Self::Watch => "watch",
            Self::Repl => "repl",
            Self::Hover => "hover",
            Self::Clipboard => "clipboard",
        }
    }
}

/// Arguments of one `evaluate` request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluateRequest {
    pub frame_id: i64,
    pub expression: SmolStr,
    pub context: EvaluateContext,
}

impl EvaluateRequest {
    /// Request a variable-inspection evaluation of `expression` in `frame_id`.
    pub fn variable(frame_id: i64, expression: impl Into<SmolStr>) -> Self {
        Self {
            frame_id,
            expression: expression.into(),
            context: EvaluateContext::Variables,
        }
    }
}

/// Body of a successful `evaluate` response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvaluateResponse {
    /// Type name, when the adapter reports one.
    pub ty: Option<String>,
    /// Rendered value.
    pub result: String,
}

impl EvaluateResponse {
    pub fn new(ty: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            ty: Some(ty.into()),
            result: result.into(),
        }
    }

    /// A response without type information.
    pub fn untyped(result: impl Into<String>) -> Self {
        Self {
            ty: None,
            result: result.into(),
        }
    }
}

/// A live, paused debug session.
#[allow(async_fn_in_trait)]
pub trait DebugSession {
    /// Send one `evaluate` request and wait for its response.
    async fn evaluate(&self, request: &EvaluateRequest) -> Result<EvaluateResponse, EvaluateError>;
}
