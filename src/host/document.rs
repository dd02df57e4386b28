//! The document collaborator: text access plus symbol and reference providers.

use crate::base::{Position, Span};
use crate::hir::VariableSymbol;
use crate::host::HostError;

/// The host editor's view of one open document.
///
/// Text access is synchronous; the two providers are suspension points of a
/// refresh.
#[allow(async_fn_in_trait)]
pub trait DocumentHost {
    /// Path (or URI) of the document, used for extension filtering.
    fn path(&self) -> &str;

    /// Number of lines in the document.
    fn line_count(&self) -> u32;

    /// Text of a line without its terminator, or `None` past the end.
    fn line_text(&self, line: u32) -> Option<&str>;

    /// The document's symbol tree.
    async fn document_symbols(&self) -> Result<Vec<VariableSymbol>, HostError>;

    /// Every location in this document referring to the declaration at `position`.
    async fn references(&self, position: Position) -> Result<Vec<Span>, HostError>;
}

/// An in-memory document snapshot: a path plus its lines.
///
/// Hosts wrap this to implement the text half of [`DocumentHost`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextDocument {
    path: String,
    lines: Vec<String>,
}

impl TextDocument {
    /// Split `text` into lines on `\n`, dropping a trailing `\r` from each.
    ///
    /// Like an editor buffer, text ending in a newline has a final empty line.
    pub fn new(path: impl Into<String>, text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self {
            path: path.into(),
            lines,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }

    pub fn line_text(&self, line: u32) -> Option<&str> {
        self.lines.get(line as usize).map(String::as_str)
    }
}

/// Extension of a path or URI (text after the last `.` of the final segment).
pub fn extension_of(path: &str) -> Option<&str> {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}
