//! Line aggregation with the stop-line cutoff.

use std::collections::BTreeMap;

use crate::ide::Occurrence;

/// Occurrences grouped by line, cut off at the line where execution stopped.
///
/// Lines iterate in ascending numeric order. Within a line, occurrences keep
/// discovery order (not necessarily left to right).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineBuckets {
    lines: BTreeMap<u32, Vec<Occurrence>>,
}

impl LineBuckets {
    /// Group `occurrences` by line, dropping every line after `stop_line`.
    pub fn new(occurrences: impl IntoIterator<Item = Occurrence>, stop_line: u32) -> Self {
        let mut lines: BTreeMap<u32, Vec<Occurrence>> = BTreeMap::new();
        for occurrence in occurrences {
            let line = occurrence.line();
            if line > stop_line {
                continue;
            }
            lines.entry(line).or_default().push(occurrence);
        }
        Self { lines }
    }

    /// Iterate `(line, occurrences)` in ascending line order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[Occurrence])> {
        self.lines
            .iter()
            .map(|(line, occurrences)| (*line, occurrences.as_slice()))
    }

    /// Occurrences on one line.
    pub fn line(&self, line: u32) -> &[Occurrence] {
        self.lines.get(&line).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of non-empty lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of occurrences across all lines.
    pub fn occurrence_count(&self) -> usize {
        self.lines.values().map(Vec::len).sum()
    }
}
