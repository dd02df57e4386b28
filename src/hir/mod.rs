//! Symbol model: the document symbol tree and its flattening.
//!
//! ## Key Types
//!
//! - [`VariableSymbol`]: One node of the host's document symbol tree
//! - [`SymbolKind`]: LSP symbol categories
//! - [`SymbolFilter`]: Which nodes [`collect_variables`] keeps
//!
//! ```text
//! document_symbols(doc)     ← INPUT: symbol tree from the host
//!     │
//!     ▼
//! collect_variables(tree)   ← Flat, filtered, pre-order
//! ```

mod collect;
mod symbols;

pub use collect::{SymbolFilter, collect_variables};
pub use symbols::{SymbolKind, VariableSymbol};
