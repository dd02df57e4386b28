//! In-memory document host with scripted symbol and reference providers.

use std::collections::HashMap;

use parking_lot::Mutex;

use inline_values::base::{Position, Span};
use inline_values::hir::VariableSymbol;
use inline_values::host::{DocumentHost, HostError, TextDocument};

/// A document whose providers answer from fixed tables and count their calls.
pub struct FakeDocument {
    text: TextDocument,
    symbols: Option<Vec<VariableSymbol>>,
    references: HashMap<Position, Vec<Span>>,
    failing_references: Vec<Position>,
    symbol_calls: Mutex<usize>,
    reference_calls: Mutex<Vec<Position>>,
}

impl FakeDocument {
    /// A `main.py` document with no symbol provider answer yet.
    pub fn new(text: &str) -> Self {
        Self::with_path("main.py", text)
    }

    pub fn with_path(path: &str, text: &str) -> Self {
        Self {
            text: TextDocument::new(path, text),
            symbols: None,
            references: HashMap::new(),
            failing_references: Vec::new(),
            symbol_calls: Mutex::new(0),
            reference_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn symbols(mut self, symbols: Vec<VariableSymbol>) -> Self {
        self.symbols = Some(symbols);
        self
    }

    /// Answer a reference lookup at `declaration` with `references`.
    pub fn references(mut self, declaration: Position, references: Vec<Span>) -> Self {
        self.references.insert(declaration, references);
        self
    }

    /// Make the reference lookup at `declaration` fail.
    pub fn failing_references(mut self, declaration: Position) -> Self {
        self.failing_references.push(declaration);
        self
    }

    pub fn symbol_calls(&self) -> usize {
        *self.symbol_calls.lock()
    }

    pub fn reference_calls(&self) -> Vec<Position> {
        self.reference_calls.lock().clone()
    }

    /// Total provider calls of either kind.
    pub fn provider_calls(&self) -> usize {
        self.symbol_calls() + self.reference_calls.lock().len()
    }
}

impl DocumentHost for FakeDocument {
    fn path(&self) -> &str {
        self.text.path()
    }

    fn line_count(&self) -> u32 {
        self.text.line_count()
    }

    fn line_text(&self, line: u32) -> Option<&str> {
        self.text.line_text(line)
    }

    async fn document_symbols(&self) -> Result<Vec<VariableSymbol>, HostError> {
        *self.symbol_calls.lock() += 1;
        self.symbols
            .clone()
            .ok_or_else(|| HostError::unavailable("no symbol provider"))
    }

    async fn references(&self, position: Position) -> Result<Vec<Span>, HostError> {
        self.reference_calls.lock().push(position);
        if self.failing_references.contains(&position) {
            return Err(HostError::failed("reference provider crashed"));
        }
        Ok(self.references.get(&position).cloned().unwrap_or_default())
    }
}

/// A document host that reports zero lines.
pub struct EmptyDocument;

impl DocumentHost for EmptyDocument {
    fn path(&self) -> &str {
        "empty.py"
    }

    fn line_count(&self) -> u32 {
        0
    }

    fn line_text(&self, _line: u32) -> Option<&str> {
        None
    }

    async fn document_symbols(&self) -> Result<Vec<VariableSymbol>, HostError> {
        Ok(Vec::new())
    }

    async fn references(&self, _position: Position) -> Result<Vec<Span>, HostError> {
        Ok(Vec::new())
    }
}
