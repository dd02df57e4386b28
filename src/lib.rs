//! # debug-inline-values
//!
//! Live variable values shown beside the source while a debugger is paused.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Refresh engine: occurrences, line cutoff, evaluation, hint text
//!   ↓
//! host      → Collaborator traits: document providers, debug session
//!   ↓
//! hir       → Document symbol tree and its flattening
//!   ↓
//! base      → Primitives (Position, Span, identifier scanning)
//! ```

// ============================================================================
// MODULES (dependency order: base → hir → host → ide)
// ============================================================================

/// Foundation types: Position, Span, text utilities
pub mod base;

/// Symbol model: VariableSymbol, SymbolKind, collector
pub mod hir;

/// Collaborator interfaces: DocumentHost, DebugSession
pub mod host;

/// Inline values engine
pub mod ide;

// Re-export foundation types
pub use base::{Position, Span};
pub use ide::{InlineValue, InlineValueOptions, InlineValues, InlineValuesEngine, RefreshContext};
