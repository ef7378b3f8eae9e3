//!
//! One state machine per mask kind.
//!
//! Every machine consumes one typed character against the buffer and
//! session, decides pass-through/reject/rewrite, and reports through
//! the error sink. Focus-leave re-checks the complete text.
//!

use crate::buffer::{EditBuffer, byte_of};
use crate::calendar::is_valid_day;
use crate::message::{MessageKey, MessageLookup};
use crate::sink::ErrorSink;
use crate::{DateFormat, Mask, MaskOutcome};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::fmt::Debug;
use std::sync::OnceLock;

mod date_dmy;
mod date_mdy;
mod group;
mod ip;
mod plain;

/// Mutable per-field entry state, carried across keystrokes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EditSession {
    /// Digits since the last delimiter, counting the char in flight.
    pub digit_pos: usize,
    /// Delimiters inserted so far.
    pub delimiter_count: usize,
}

impl EditSession {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Configuration visible to the machines for one event.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MaskCtx<'a> {
    pub msg: &'a dyn MessageLookup,
    pub min_year: i32,
    pub max_year: i32,
    /// Year the February check runs against. The wall-clock year,
    /// not the year being entered.
    pub reference_year: i32,
}

/// One mask kind.
pub(crate) trait MaskMachine: Debug + Sync {
    /// The delimiter this mask auto-inserts.
    fn delimiter(&self) -> Option<char> {
        None
    }

    /// One typed character. Backspace never reaches the machines,
    /// the controller handles it with [rescan].
    fn on_char(
        &self,
        c: char,
        buf: &mut EditBuffer,
        session: &mut EditSession,
        ctx: &MaskCtx<'_>,
        sink: &mut dyn ErrorSink,
    ) -> MaskOutcome;

    /// Focus-leave check of the final text.
    fn on_leave(&self, _text: &str, _ctx: &MaskCtx<'_>, _sink: &mut dyn ErrorSink) {}
}

/// The strategy table: one static machine per mask kind.
pub(crate) fn machine(mask: Mask, format: DateFormat) -> &'static dyn MaskMachine {
    static NONE: plain::PassMask = plain::PassMask;
    static DIGIT: plain::DigitMask = plain::DigitMask;
    static DECIMAL: plain::DecimalMask = plain::DecimalMask;
    static PHONE: group::GroupMask = group::GroupMask {
        first: 3,
        second: 3,
        kind: group::GroupKind::Phone,
    };
    static SSN: group::GroupMask = group::GroupMask {
        first: 3,
        second: 2,
        kind: group::GroupKind::Ssn,
    };
    static IP: ip::IpMask = ip::IpMask;
    static DMY: date_dmy::DmyDateMask = date_dmy::DmyDateMask;
    static MDY: date_mdy::MdyDateMask = date_mdy::MdyDateMask;

    match mask {
        Mask::None => &NONE,
        Mask::DateOnly => match format {
            DateFormat::DdMmYyyy => &DMY,
            DateFormat::MmDdYyyy => &MDY,
        },
        Mask::PhoneWithArea => &PHONE,
        Mask::IpAddress => &IP,
        Mask::Ssn => &SSN,
        Mask::Decimal => &DECIMAL,
        Mask::DigitOnly => &DIGIT,
    }
}

/// Recompute the session counters from the text after an edit.
///
/// Digit run scanned back from the end to the last `delim` (or to the
/// start), delimiter count over the whole text.
pub(crate) fn rescan(text: &str, delim: char) -> (usize, usize) {
    let count = text.chars().filter(|c| *c == delim).count();
    let run = text.chars().rev().take_while(|c| *c != delim).count();
    (run, count)
}

/// Char position of the last `delim` in `text`.
pub(crate) fn last_delim(text: &str, delim: char) -> Option<usize> {
    text.chars()
        .rev()
        .position(|c| c == delim)
        .map(|p| text.chars().count() - 1 - p)
}

/// The chars after char position `pos`.
pub(crate) fn tail_after(text: &str, pos: usize) -> &str {
    &text[byte_of(text, pos + 1)..]
}

/// The chars before char position `pos`.
pub(crate) fn head(text: &str, pos: usize) -> &str {
    &text[..byte_of(text, pos)]
}

/// The chars in `start..end`.
pub(crate) fn sub(text: &str, start: usize, end: usize) -> &str {
    &text[byte_of(text, start)..byte_of(text, end)]
}

/// Shared focus-leave check for both date formats.
///
/// Shape first, then the parse: a year outside the bounds overwrites
/// the shape message, a failed parse re-sets it. Empty text clears.
pub(crate) fn date_leave(
    text: &str,
    format: DateFormat,
    ctx: &MaskCtx<'_>,
    sink: &mut dyn ErrorSink,
) {
    static SHAPE: OnceLock<Regex> = OnceLock::new();

    if text.is_empty() {
        sink.set_error("");
        return;
    }

    let format_key = match format {
        DateFormat::DdMmYyyy => MessageKey::DateFormatDmy,
        DateFormat::MmDdYyyy => MessageKey::DateFormatMdy,
    };

    let shape = SHAPE.get_or_init(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("regex"));
    if !shape.is_match(text) {
        sink.set_error(&ctx.msg.text(format_key));
    }

    match NaiveDate::parse_from_str(text, format.pattern()) {
        Ok(d) => {
            if d.year() < ctx.min_year || d.year() > ctx.max_year {
                sink.set_error(&format!(
                    "{}: {}-{}",
                    ctx.msg.text(MessageKey::YearBetween),
                    ctx.min_year,
                    ctx.max_year
                ));
            }
        }
        Err(_) => {
            sink.set_error(&ctx.msg.text(format_key));
        }
    }
}

/// Day-of-month check against the reference year.
pub(crate) fn check_day(month: u32, day: u32, ctx: &MaskCtx<'_>) -> bool {
    is_valid_day(month, day, ctx.reference_year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescan() {
        assert_eq!(rescan("", '-'), (0, 0));
        assert_eq!(rescan("123", '-'), (3, 0));
        assert_eq!(rescan("123-", '-'), (0, 1));
        assert_eq!(rescan("123-45", '-'), (2, 1));
        assert_eq!(rescan("123-45-6789", '-'), (4, 2));
        assert_eq!(rescan("1.2.3", '.'), (1, 2));
    }

    #[test]
    fn test_last_delim() {
        assert_eq!(last_delim("", '/'), None);
        assert_eq!(last_delim("12", '/'), None);
        assert_eq!(last_delim("12/", '/'), Some(2));
        assert_eq!(last_delim("12/05/1", '/'), Some(5));
    }

    #[test]
    fn test_sub() {
        assert_eq!(sub("12/05/1999", 3, 5), "05");
        assert_eq!(tail_after("123-45", 3), "45");
        assert_eq!(head("123-45", 3), "123");
    }
}
