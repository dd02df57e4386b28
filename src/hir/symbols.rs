//! Document symbol types as reported by the host's symbol provider.

use smol_str::SmolStr;

use crate::base::Span;

/// The kind of a document symbol.
///
/// Mirrors the LSP `SymbolKind` enumeration; [`SymbolKind::from_lsp`] maps
/// the protocol's numeric tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    File,
    Module,
    Namespace,
    Package,
    Class,
    Method,
    Property,
    Field,
    Constructor,
    Enum,
    Interface,
    Function,
    Variable,
    Constant,
    String,
    Number,
    Boolean,
    Array,
    Object,
    Key,
    Null,
    EnumMember,
    Struct,
    Event,
    Operator,
    TypeParameter,
}

impl SymbolKind {
    /// Create from the LSP numeric tag (1-based). Returns `None` for unknown tags.
    pub fn from_lsp(tag: u32) -> Option<Self> {
        let kind = match tag {
            1 => Self::File,
            2 => Self::Module,
            3 => Self::Namespace,
            4 => Self::Package,
            5 => Self::Class,
            6 => Self::Method,
            7 => Self::Property,
            8 => Self::Field,
            9 => Self::Constructor,
            10 => Self::Enum,
            11 => Self::Interface,
            12 => Self::Function,
            13 => Self::Variable,
            14 => Self::Constant,
            15 => Self::String,
            16 => Self::Number,
            17 => Self::Boolean,
            18 => Self::Array,
            19 => Self::Object,
            20 => Self::Key,
            21 => Self::Null,
            22 => Self::EnumMember,
            23 => Self::Struct,
            24 => Self::Event,
            25 => Self::Operator,
            26 => Self::TypeParameter,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether this kind denotes a variable.
    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable)
    }
}

/// A symbol from the host's document symbol tree.
///
/// Owned for one refresh only. `children` nests to arbitrary depth
/// (functions inside classes inside modules, and so on).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableSymbol {
    /// Symbol name as written in source.
    pub name: SmolStr,
    /// Symbol kind.
    pub kind: SymbolKind,
    /// Optional detail string reported by the provider (unused by the engine).
    pub detail: Option<SmolStr>,
    /// Full declaration range.
    pub range: Span,
    /// Range of the name within the declaration.
    pub selection_range: Span,
    /// Nested symbols.
    pub children: Vec<VariableSymbol>,
}

impl VariableSymbol {
    /// Create a childless symbol whose selection range equals its declaration range.
    pub fn new(name: impl Into<SmolStr>, kind: SymbolKind, range: Span) -> Self {
        Self {
            name: name.into(),
            kind,
            detail: None,
            range,
            selection_range: range,
            children: Vec::new(),
        }
    }

    /// Create a variable symbol.
    pub fn variable(name: impl Into<SmolStr>, range: Span) -> Self {
        Self::new(name, SymbolKind::Variable, range)
    }

    pub fn with_selection_range(mut self, selection_range: Span) -> Self {
        self.selection_range = selection_range;
        self
    }

    pub fn with_detail(mut self, detail: impl Into<SmolStr>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_children(mut self, children: Vec<VariableSymbol>) -> Self {
        self.children = children;
        self
    }
}
