//!
//! Dotted-quad IPv4 entry.
//!

use crate::MaskOutcome;
use crate::buffer::EditBuffer;
use crate::mask::{EditSession, MaskCtx, MaskMachine, last_delim, tail_after};
use crate::message::MessageKey;
use crate::sink::ErrorSink;

#[derive(Debug)]
pub(crate) struct IpMask;

impl MaskMachine for IpMask {
    fn delimiter(&self) -> Option<char> {
        Some('.')
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
            last_delim(buf.text(), '.')
        };
        let len = buf.len();

        if !(c.is_ascii_digit() || c == '.') {
            sink.set_error(&ctx.msg.text(MessageKey::OnlyDigitAndDot));
            return MaskOutcome::Unchanged;
        }

        sink.set_error("");
        if len >= buf.max_len() {
            return MaskOutcome::Unchanged;
        }

        if c != '.' {
            let digit_pos = match idx {
                Some(i) if i > 0 => len - i,
                _ => session.digit_pos + 1,
            };

            if digit_pos == 3 {
                // candidate octet, tail since the last dot plus the
                // typed digit
                let tail = match idx {
                    Some(i) => tail_after(buf.text(), i),
                    None => buf.text(),
                };
                let over = format!("{}{}", tail, c)
                    .parse::<u32>()
                    .map_or(true, |v| v > 255);
                if over {
                    sink.set_error(&format!(
                        "{} 255",
                        ctx.msg.text(MessageKey::NumberSmallerThan)
                    ));
                    // counter stays put so the octet can be retried
                    return MaskOutcome::Unchanged;
                }
            }
            session.digit_pos = digit_pos;

            if digit_pos == 3 && session.delimiter_count < 3 {
                buf.append_char(c);
                buf.append(".");
                session.delimiter_count += 1;
                return MaskOutcome::TextChanged;
            }
            if digit_pos == 4 {
                if session.delimiter_count < 3 {
                    buf.append(".");
                    session.delimiter_count += 1;
                } else {
                    return MaskOutcome::Unchanged;
                }
            }
            MaskOutcome::PassThrough
        } else {
            let caret = buf.caret();
            // a dot right after the delimiter is redundant, not wrong
            if caret > 0 && buf.text().chars().nth(caret - 1) == Some('.') {
                return MaskOutcome::Unchanged;
            }
            // a leading dot, or one pushed against the next, can never
            // become valid
            let after = buf.text().chars().nth(caret + buf.selection_len()) == Some('.');
            if caret == 0 || after {
                sink.set_error(&ctx.msg.text(MessageKey::IpFormat));
                return MaskOutcome::Unchanged;
            }
            if session.delimiter_count < 3 {
                session.delimiter_count += 1;
            }
            MaskOutcome::PassThrough
        }
    }

    fn on_leave(&self, text: &str, ctx: &MaskCtx<'_>, sink: &mut dyn ErrorSink) {
        let dots = text.chars().filter(|c| *c == '.').count();
        if text.contains("..") || dots < 3 || text.ends_with('.') {
            sink.set_error(&ctx.msg.text(MessageKey::IpFormat));
        }
    }
}
