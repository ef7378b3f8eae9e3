//!
//! Dash-delimited digit groups: phone `999-999-9999` and
//! SSN `999-99-9999`. One machine, parameterized with the sizes of
//! the first two groups.
//!

use crate::MaskOutcome;
use crate::buffer::EditBuffer;
use crate::mask::{EditSession, MaskCtx, MaskMachine, last_delim};
use crate::message::MessageKey;
use crate::sink::ErrorSink;
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GroupKind {
    Phone,
    Ssn,
}

#[derive(Debug)]
pub(crate) struct GroupMask {
    /// Size of the first group.
    pub first: usize,
    /// Size of the second group.
    pub second: usize,
    pub kind: GroupKind,
}

impl MaskMachine for GroupMask {
    fn delimiter(&self) -> Option<char> {
        Some('-')
    }

    fn on_char(
        &self,
        c: char,
        buf: &mut EditBuffer,
        session: &mut EditSession,
        ctx: &MaskCtx<'_>,
        sink: &mut dyn ErrorSink,
    ) -> MaskOutcome {
        let all = buf.is_all_selected();
        if all {
            session.reset();
        }
        let idx = if all {
            None
        } else {
            last_delim(buf.text(), '-')
        };
        let len = buf.len();

        if !(c.is_ascii_digit() || c == '-') {
            sink.set_error(&ctx.msg.text(MessageKey::OnlyDigitAndDash));
            return MaskOutcome::Unchanged;
        }
        if len >= buf.max_len() {
            return MaskOutcome::Unchanged;
        }

        sink.set_error("");
        if c != '-' {
            session.digit_pos = match idx {
                Some(i) if i > 0 => len - i,
                _ => session.digit_pos + 1,
            };
        }

        let mut out = MaskOutcome::PassThrough;

        if idx.is_some()
            && session.digit_pos == self.second
            && session.delimiter_count == 1
            && c != '-'
        {
            buf.append_char(c);
            buf.append("-");
            session.delimiter_count += 1;
            out = MaskOutcome::TextChanged;
        }

        if session.digit_pos == self.first && session.delimiter_count == 0 && c != '-' {
            buf.append_char(c);
            buf.append("-");
            session.delimiter_count += 1;
            out = MaskOutcome::TextChanged;
        }

        if out == MaskOutcome::PassThrough && session.digit_pos > 4 {
            return MaskOutcome::Unchanged;
        }
        out
    }

    fn on_leave(&self, text: &str, ctx: &MaskCtx<'_>, sink: &mut dyn ErrorSink) {
        static PHONE_RE: OnceLock<Regex> = OnceLock::new();
        static SSN_RE: OnceLock<Regex> = OnceLock::new();

        let (re, key) = match self.kind {
            GroupKind::Phone => (
                PHONE_RE.get_or_init(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").expect("regex")),
                MessageKey::PhoneFormat,
            ),
            GroupKind::Ssn => (
                SSN_RE.get_or_init(|| Regex::new(r"^\d{3}-\d{2}-\d{4}$").expect("regex")),
                MessageKey::SsnFormat,
            ),
        };
        if !re.is_match(text) {
            sink.set_error(&ctx.msg.text(key));
        }
    }
}
