//!
//! Date entry, `mm/dd/yyyy`.
//!
//! Incremental machine over the session counters. The month group has
//! a carry re-interpretation: a two-digit value over 12 re-reads as a
//! zero-padded month with the day group already begun.
//!

use crate::buffer::{EditBuffer, byte_of};
use crate::mask::{
    EditSession, MaskCtx, MaskMachine, check_day, date_leave, head, last_delim, tail_after,
};
use crate::message::MessageKey;
use crate::sink::ErrorSink;
use crate::{DateFormat, MaskOutcome};

#[derive(Debug)]
pub(crate) struct MdyDateMask;

impl MaskMachine for MdyDateMask {
    fn delimiter(&self) -> Option<char> {
        Some('/')
    }

    fn on_char(
        &self,
        c: char,
        buf: &mut EditBuffer,
        session: &mut EditSession,
        ctx: &MaskCtx<'_>,
        sink: &mut dyn ErrorSink,
    ) -> MaskOutcome {
        if !(c.is_ascii_digit() || c == '/') {
            sink.set_error(&ctx.msg.text(MessageKey::OnlyDigitAndSlash));
            return MaskOutcome::Unchanged;
        }

        let all = buf.is_all_selected();
        if all {
            session.reset();
            buf.clear();
        }
        let idx = if all {
            None
        } else {
            last_delim(buf.text(), '/')
        };
        let len = buf.len();

        if len >= buf.max_len() {
            return MaskOutcome::Unchanged;
        }

        if c == '/' {
            if session.delimiter_count < 2 {
                session.delimiter_count += 1;
            }
            if session.digit_pos == 1 {
                // zero-pad the open group
                let at = idx.map_or(0, |i| i + 1);
                let mut t = buf.text().to_string();
                t.insert(byte_of(&t, at), '0');
                buf.set_text(t);
                buf.append("/");
                return MaskOutcome::TextChanged;
            }
            return MaskOutcome::PassThrough;
        }

        session.digit_pos = match idx {
            Some(i) if i > 0 => len - i,
            _ => session.digit_pos + 1,
        };

        if session.digit_pos == 3 && session.delimiter_count < 2 {
            session.delimiter_count += 1;
            buf.append("/");
            // the digit lands after the slash
        }

        sink.set_error("");

        let d = c as u32 - '0' as u32;

        if session.digit_pos == 2 || (d > 1 && session.delimiter_count == 0) {
            if session.delimiter_count < 2 {
                match idx {
                    None => return self.close_month_group(c, buf, session),
                    Some(i) => {
                        if session.delimiter_count == 1 {
                            return self.close_day_group(c, i, buf, session, ctx, sink);
                        }
                        // second year digit, plain insert
                    }
                }
            }
        } else if session.digit_pos == 1 && d > 3 && session.delimiter_count < 2 {
            // a single digit over 3 can only be a zero-padded group
            buf.append("0");
            buf.append_char(c);
            buf.append("/");
            session.delimiter_count += 1;
            return MaskOutcome::TextChanged;
        } else if session.digit_pos == 1 && session.delimiter_count == 2 && c > '2' {
            // advisory only, the digit still goes in
            sink.set_error(&ctx.msg.text(MessageKey::YearStartWith));
        }

        if session.digit_pos > 4 {
            return MaskOutcome::Unchanged;
        }
        MaskOutcome::PassThrough
    }

    fn on_leave(&self, text: &str, ctx: &MaskCtx<'_>, sink: &mut dyn ErrorSink) {
        date_leave(text, DateFormat::MmDdYyyy, ctx, sink);
    }
}

impl MdyDateMask {
    /// Second digit of the month group. Values over 12 carry: the
    /// month is zero-padded and the digit re-reads as the start of the
    /// day group.
    fn close_month_group(
        &self,
        c: char,
        buf: &mut EditBuffer,
        session: &mut EditSession,
    ) -> MaskOutcome {
        let mut t = buf.text().to_string();
        if session.digit_pos == 1 {
            t.push('0');
        }
        t.push(c);

        let month = t.parse::<u32>().unwrap_or(0);
        if month > 12 {
            let mut padded = format!("0{}", t);
            if month > 13 {
                // "14" -> "01/04/", day group closed too
                padded.insert(2, '/');
                padded.insert(3, '0');
                session.delimiter_count += 1;
                padded.push('/');
            } else {
                // "13" -> "01/3", day group begun
                padded.insert(2, '/');
            }
            session.delimiter_count += 1;
            buf.set_text(padded);
        } else {
            t.push('/');
            session.delimiter_count += 1;
            buf.set_text(t);
        }
        MaskOutcome::TextChanged
    }

    /// Second digit of the day group, validated against the month.
    fn close_day_group(
        &self,
        c: char,
        idx: usize,
        buf: &mut EditBuffer,
        session: &mut EditSession,
        ctx: &MaskCtx<'_>,
        sink: &mut dyn ErrorSink,
    ) -> MaskOutcome {
        let month = head(buf.text(), idx).parse::<u32>().unwrap_or(0);
        let day = format!("{}{}", tail_after(buf.text(), idx), c)
            .parse::<u32>()
            .unwrap_or(0);

        if check_day(month, day, ctx) {
            buf.append_char(c);
            buf.append("/");
            session.delimiter_count += 1;
            MaskOutcome::TextChanged
        } else {
            sink.set_error(&format!(
                "{} 31",
                ctx.msg.text(MessageKey::NumberSmallerThan)
            ));
            MaskOutcome::Unchanged
        }
    }
}
