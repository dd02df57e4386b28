//! Flattening of a document symbol tree into the symbols worth annotating.

use crate::hir::VariableSymbol;

/// Which symbols the collector keeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SymbolFilter {
    /// Keep only symbols tagged [`SymbolKind::Variable`](crate::hir::SymbolKind::Variable).
    #[default]
    VariablesOnly,
    /// Keep every symbol. For providers that do not tag kinds reliably.
    Permissive,
}

impl SymbolFilter {
    fn accepts(self, symbol: &VariableSymbol) -> bool {
        match self {
            Self::VariablesOnly => symbol.kind.is_variable(),
            Self::Permissive => true,
        }
    }
}

/// Flatten `roots` depth-first (pre-order) and keep the symbols `filter` accepts.
///
/// Uses an explicit work list, so arbitrarily deep trees cannot overflow the
/// stack. Every node is visited exactly once.
pub fn collect_variables(roots: &[VariableSymbol], filter: SymbolFilter) -> Vec<&VariableSymbol> {
    let mut collected = Vec::new();
    let mut work: Vec<&VariableSymbol> = roots.iter().rev().collect();

    while let Some(symbol) = work.pop() {
        if filter.accepts(symbol) {
            collected.push(symbol);
        }
        work.extend(symbol.children.iter().rev());
    }

    collected
}
