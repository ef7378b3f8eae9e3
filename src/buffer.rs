//!
//! Single-line edit buffer.
//!
//! Stands in for the host text box: current text, selection, caret and
//! max length, with the primitive mutations the mask machines need.
//! All positions are char positions, all mutations are synchronous.
//!

/// Byte offset of a char position. Clamps to the end of the text.
pub(crate) fn byte_of(text: &str, pos: usize) -> usize {
    text.char_indices()
        .nth(pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Pure caret/selection simulation: replace the chars
/// `sel_start..sel_start+sel_len` with `insert`.
pub fn splice(text: &str, sel_start: usize, sel_len: usize, insert: &str) -> String {
    let start = byte_of(text, sel_start);
    let end = byte_of(text, sel_start + sel_len);
    let mut out = String::with_capacity(text.len() + insert.len());
    out.push_str(&text[..start]);
    out.push_str(insert);
    out.push_str(&text[end..]);
    out
}

/// The editable text surface of one masked field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    text: String,
    sel_start: usize,
    sel_len: usize,
    max_len: usize,
}

impl Default for EditBuffer {
    fn default() -> Self {
        Self {
            text: String::new(),
            sel_start: 0,
            sel_len: 0,
            max_len: usize::MAX,
        }
    }
}

impl EditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text length in chars.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Maximum length in chars. `usize::MAX` if unbounded.
    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn set_max_len(&mut self, max_len: usize) {
        self.max_len = max_len;
    }

    /// Start of the selection. With an empty selection this is the caret.
    #[inline]
    pub fn selection_start(&self) -> usize {
        self.sel_start
    }

    /// Length of the selection in chars.
    #[inline]
    pub fn selection_len(&self) -> usize {
        self.sel_len
    }

    /// Caret position.
    #[inline]
    pub fn caret(&self) -> usize {
        self.sel_start
    }

    /// The selected text.
    pub fn selected_text(&self) -> &str {
        let start = byte_of(&self.text, self.sel_start);
        let end = byte_of(&self.text, self.sel_start + self.sel_len);
        &self.text[start..end]
    }

    /// Select-all-then-type detection: the selection covers the
    /// complete text.
    pub fn is_all_selected(&self) -> bool {
        self.selected_text() == self.text
    }

    /// Set the selection. Clamped to the text.
    pub fn set_selection(&mut self, start: usize, len: usize) {
        let n = self.len();
        self.sel_start = start.min(n);
        self.sel_len = len.min(n - self.sel_start);
    }

    /// Collapse the selection to a caret position. Clamped.
    pub fn set_caret(&mut self, pos: usize) {
        self.sel_start = pos.min(self.len());
        self.sel_len = 0;
    }

    /// Replace the whole text. Caret goes to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.sel_start = self.len();
        self.sel_len = 0;
    }

    /// Replace the selection. Caret ends up after the inserted text.
    pub fn replace_selection(&mut self, insert: &str) {
        self.text = splice(&self.text, self.sel_start, self.sel_len, insert);
        self.sel_start += insert.chars().count();
        self.sel_len = 0;
    }

    /// Append at the end, caret to the end.
    pub fn append(&mut self, suffix: &str) {
        self.text.push_str(suffix);
        self.sel_start = self.len();
        self.sel_len = 0;
    }

    /// Append one char at the end, caret to the end.
    pub fn append_char(&mut self, c: char) {
        self.text.push(c);
        self.sel_start = self.len();
        self.sel_len = 0;
    }

    /// Default backspace: remove the selection, or the char before the
    /// caret. Returns false if there was nothing to remove.
    pub fn remove_prev(&mut self) -> bool {
        if self.sel_len > 0 {
            self.replace_selection("");
            true
        } else if self.sel_start > 0 {
            self.sel_start -= 1;
            self.text = splice(&self.text, self.sel_start, 1, "");
            true
        } else {
            false
        }
    }

    /// Reset to empty. Keeps the max length.
    pub fn clear(&mut self) {
        self.text.clear();
        self.sel_start = 0;
        self.sel_len = 0;
    }
}
