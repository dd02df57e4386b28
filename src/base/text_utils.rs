//! Text manipulation utilities for working with source lines.
//!
//! All offsets are character indices (Unicode scalar values) within a single line.

/// Check if a character is considered part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 rules for identifier characters.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Check if a character can continue a dotted reference such as `self.items.len`.
///
/// This is the ASCII class `[A-Za-z0-9_.]`.
#[inline]
pub fn is_reference_character(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Number of characters in a line.
pub fn char_len(line: &str) -> u32 {
    line.chars().count() as u32
}

/// Extend a reference end offset forward over reference characters.
///
/// Returns `end` unchanged when it is not strictly inside the line, otherwise
/// the offset just past the last consecutive reference character.
///
/// # Example
/// ```
/// use inline_values::base::text_utils::extend_reference_end;
///
/// assert_eq!(extend_reference_end("x = self.total + 1", 8), 14);
/// assert_eq!(extend_reference_end("x = self", 8), 8);
/// ```
pub fn extend_reference_end(line: &str, end: u32) -> u32 {
    let mut chars = line.chars().skip(end as usize).peekable();
    if chars.peek().is_none() {
        return end;
    }

    end + chars.take_while(|c| is_reference_character(*c)).count() as u32
}

/// Extract the characters in `start..end` from a line.
///
/// Offsets past the end of the line are clamped.
pub fn slice_chars(line: &str, start: u32, end: u32) -> String {
    line.chars()
        .skip(start as usize)
        .take(end.saturating_sub(start) as usize)
        .collect()
}

/// Find the character offset of the first match of `needle` in `line`.
///
/// With `whole_word` set, a match only counts when the characters on either
/// side of it are not word characters. Otherwise any substring match counts,
/// so `x` is found inside `max`.
pub fn find_name(line: &str, needle: &str, whole_word: bool) -> Option<u32> {
    if needle.is_empty() {
        return None;
    }

    line.match_indices(needle)
        .find(|(byte_idx, _)| !whole_word || is_whole_word(line, *byte_idx, needle.len()))
        .map(|(byte_idx, _)| line[..byte_idx].chars().count() as u32)
}

fn is_whole_word(line: &str, byte_idx: usize, len: usize) -> bool {
    let before = line[..byte_idx].chars().next_back();
    let after = line[byte_idx + len..].chars().next();
    !before.is_some_and(is_word_character) && !after.is_some_and(is_word_character)
}
