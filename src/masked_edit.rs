//!
//! The masked-edit controller.
//!
//! Owns the buffer, the session counters and the configuration, and
//! routes key events to the machine for the current mask. Hosts feed
//! it printable keys, backspace and focus-leave, and mirror the buffer
//! into their own text display.
//!

use crate::buffer::EditBuffer;
use crate::mask::{EditSession, MaskCtx, machine, rescan};
use crate::message::{EnglishMessages, MessageLookup};
use crate::sink::{ErrorSink, ErrorSlot};
use crate::{DateFormat, Mask, MaskOutcome};
use chrono::{Datelike, Local};
use log::debug;

/// Lower year bound used until [MaskedEditState::set_min_year].
pub const DEFAULT_MIN_YEAR: i32 = 1900;
/// Upper year bound used until [MaskedEditState::set_max_year].
pub const DEFAULT_MAX_YEAR: i32 = 2100;

/// State of one masked input field.
///
/// ```rust
/// use masked_edit::{Mask, MaskedEditState};
///
/// let mut state = MaskedEditState::new();
/// state.set_mask(Mask::PhoneWithArea);
/// for c in "2225551234".chars() {
///     state.key_char(c);
/// }
/// assert_eq!(state.text(), "222-555-1234");
/// ```
#[derive(Debug, Clone)]
pub struct MaskedEditState {
    mask: Mask,
    date_format: DateFormat,
    min_year: i32,
    max_year: i32,
    reference_year: i32,
    buffer: EditBuffer,
    session: EditSession,
    messages: Box<dyn MessageLookup>,
    sink: Box<dyn ErrorSink>,
}

impl Default for MaskedEditState {
    fn default() -> Self {
        Self {
            mask: Mask::default(),
            date_format: DateFormat::default(),
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
            reference_year: Local::now().year(),
            buffer: EditBuffer::default(),
            session: EditSession::default(),
            messages: Box::new(EnglishMessages),
            sink: Box::new(ErrorSlot::new()),
        }
    }
}

impl MaskedEditState {
    pub fn new() -> Self {
        Self::default()
    }

    /// New state with the mask already set.
    pub fn with_mask(mask: Mask) -> Self {
        let mut s = Self::default();
        s.set_mask(mask);
        s
    }

    /// Replace the message catalog.
    pub fn messages(mut self, messages: impl MessageLookup + 'static) -> Self {
        self.messages = Box::new(messages);
        self
    }

    /// Replace the error sink.
    pub fn sink(mut self, sink: impl ErrorSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Current mask.
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Switch the mask. Clears the text and the session, sets the
    /// maximum length. A pending error message stays until the next
    /// key or leave.
    pub fn set_mask(&mut self, mask: Mask) {
        debug!("mask {:?} -> {:?}", self.mask, mask);
        self.mask = mask;
        self.buffer.clear();
        self.buffer.set_max_len(mask.max_len());
        self.session.reset();
    }

    pub fn date_format(&self) -> DateFormat {
        self.date_format
    }

    /// Date sub-format for [Mask::DateOnly].
    pub fn set_date_format(&mut self, format: DateFormat) {
        self.date_format = format;
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    /// Lower year bound for date validation. Values below 1 are
    /// ignored.
    pub fn set_min_year(&mut self, year: i32) {
        if year >= 1 {
            self.min_year = year;
        }
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    /// Upper year bound for date validation. Values above 9999 are
    /// ignored.
    pub fn set_max_year(&mut self, year: i32) {
        if year <= 9999 {
            self.max_year = year;
        }
    }

    /// Year the February day check runs against. Defaults to the
    /// wall-clock year at construction.
    pub fn set_reference_year(&mut self, year: i32) {
        self.reference_year = year;
    }

    /// Current text.
    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Replace the text wholesale, e.g. from a data binding. The
    /// session counters resync to the new text; no validation runs
    /// until the next key or leave.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer.set_text(text);
        self.resync();
    }

    /// Clear text and error.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.session.reset();
        self.sink.set_error("");
    }

    pub fn caret(&self) -> usize {
        self.buffer.caret()
    }

    pub fn set_caret(&mut self, pos: usize) {
        self.buffer.set_caret(pos);
    }

    pub fn selection(&self) -> (usize, usize) {
        (self.buffer.selection_start(), self.buffer.selection_len())
    }

    pub fn set_selection(&mut self, start: usize, len: usize) {
        self.buffer.set_selection(start, len);
    }

    /// Select the complete text.
    pub fn select_all(&mut self) {
        self.buffer.set_selection(0, self.buffer.len());
    }

    /// Current validation message, if any.
    pub fn error(&self) -> Option<&str> {
        self.sink.error()
    }

    /// One printable key.
    ///
    /// Runs the machine for the current mask; on
    /// [MaskOutcome::PassThrough] the default edit is applied here,
    /// replacing the selection with the typed char.
    pub fn key_char(&mut self, c: char) -> MaskOutcome {
        let ctx = MaskCtx {
            msg: self.messages.as_ref(),
            min_year: self.min_year,
            max_year: self.max_year,
            reference_year: self.reference_year,
        };
        let r = machine(self.mask, self.date_format).on_char(
            c,
            &mut self.buffer,
            &mut self.session,
            &ctx,
            self.sink.as_mut(),
        );
        if r == MaskOutcome::PassThrough {
            if self.buffer.selection_len() == 0 && self.buffer.len() >= self.buffer.max_len() {
                return MaskOutcome::Unchanged;
            }
            let mut tmp = [0u8; 4];
            self.buffer.replace_selection(c.encode_utf8(&mut tmp));
        } else if r == MaskOutcome::Unchanged {
            debug!("{:?} rejected {:?}", self.mask, c);
        }
        r
    }

    /// Backspace. The default removal runs first, then the session
    /// counters are recomputed from the remaining text.
    pub fn backspace(&mut self) -> MaskOutcome {
        let changed = self.buffer.remove_prev();
        if changed {
            self.resync();
        }
        changed.into()
    }

    /// Focus leaves the field. Re-checks the complete text and updates
    /// the error sink.
    pub fn focus_leave(&mut self) {
        let ctx = MaskCtx {
            msg: self.messages.as_ref(),
            min_year: self.min_year,
            max_year: self.max_year,
            reference_year: self.reference_year,
        };
        machine(self.mask, self.date_format).on_leave(self.buffer.text(), &ctx, self.sink.as_mut());
    }

    fn resync(&mut self) {
        match self.mask.delimiter() {
            Some(d) => {
                let (run, count) = rescan(self.buffer.text(), d);
                self.session.digit_pos = run;
                self.session.delimiter_count = count.min(self.mask.max_delimiters());
            }
            None => self.session.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_bounds() {
        let mut s = MaskedEditState::new();
        assert_eq!(s.min_year(), DEFAULT_MIN_YEAR);
        assert_eq!(s.max_year(), DEFAULT_MAX_YEAR);

        s.set_min_year(0);
        assert_eq!(s.min_year(), DEFAULT_MIN_YEAR);
        s.set_min_year(1980);
        assert_eq!(s.min_year(), 1980);

        s.set_max_year(10_000);
        assert_eq!(s.max_year(), DEFAULT_MAX_YEAR);
        s.set_max_year(2050);
        assert_eq!(s.max_year(), 2050);
    }

    #[test]
    fn test_set_mask_clears() {
        let mut s = MaskedEditState::with_mask(Mask::DigitOnly);
        s.key_char('1');
        s.key_char('2');
        assert_eq!(s.text(), "12");

        s.set_mask(Mask::Ssn);
        assert_eq!(s.text(), "");
        assert_eq!(s.mask(), Mask::Ssn);
    }

    #[test]
    fn test_set_text_resync() {
        let mut s = MaskedEditState::with_mask(Mask::PhoneWithArea);
        s.set_text("222-555-");
        s.key_char('1');
        s.key_char('2');
        s.key_char('3');
        s.key_char('4');
        assert_eq!(s.text(), "222-555-1234");
    }
}
