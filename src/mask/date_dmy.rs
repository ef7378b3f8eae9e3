//!
//! Date entry, `dd/mm/yyyy`.
//!
//! Unlike the other machines this one works on a whole-string
//! simulation: the typed char is spliced in at the caret, the
//! candidate is checked and either committed completely or dropped.
//!

use crate::buffer::{EditBuffer, byte_of, splice};
use crate::mask::{EditSession, MaskCtx, MaskMachine, check_day, date_leave, sub};
use crate::message::MessageKey;
use crate::sink::ErrorSink;
use crate::{DateFormat, MaskOutcome};
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug)]
pub(crate) struct DmyDateMask;

impl MaskMachine for DmyDateMask {
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
        static DD_D: OnceLock<Regex> = OnceLock::new();

        sink.set_error("");

        if !(c.is_ascii_digit() || c == '/') {
            sink.set_error(&ctx.msg.text(MessageKey::OnlyDigitAndSlash));
            if buf.is_all_selected() && !buf.is_empty() {
                buf.clear();
                session.reset();
                return MaskOutcome::TextChanged;
            }
            return MaskOutcome::Unchanged;
        }
        if buf.len() >= buf.max_len() {
            return MaskOutcome::Unchanged;
        }

        // simulate the edit
        let mut value = if buf.is_all_selected() {
            session.reset();
            c.to_string()
        } else {
            splice(
                buf.text(),
                buf.selection_start(),
                0,
                c.encode_utf8(&mut [0u8; 4]),
            )
        };

        let mut ok = true;

        if c == '/' {
            match value.chars().count() {
                1 | 4 | 7 => {
                    sink.set_error(&ctx.msg.text(MessageKey::OnlyDigit));
                    ok = false;
                }
                n @ (2 | 5) => {
                    // zero-pad the group just closed, then it must not
                    // be zero
                    value.insert(byte_of(&value, n - 2), '0');
                    let group = sub(&value, n - 2, n).parse::<u32>().unwrap_or(0);
                    if group == 0 {
                        sink.set_error(&ctx.msg.text(MessageKey::DayNotValid));
                        ok = false;
                    }
                }
                _ => {}
            }
        } else {
            match value.chars().count() {
                2 => {
                    if value.parse::<u32>().map_or(true, |v| v > 31) {
                        sink.set_error(&format!(
                            "{} 31",
                            ctx.msg.text(MessageKey::NumberSmallerThan)
                        ));
                        ok = false;
                    }
                    value.push('/');
                }
                4 => {
                    let shape = DD_D.get_or_init(|| Regex::new(r"^\d{2}/\d$").expect("regex"));
                    if !shape.is_match(&value) {
                        sink.set_error(&ctx.msg.text(MessageKey::DateFormatDmy));
                        ok = false;
                    }
                }
                n @ (3 | 6) => {
                    value.insert(byte_of(&value, n - 1), '/');
                }
                5 => {
                    if sub(&value, 3, 5).parse::<u32>().map_or(true, |v| v > 12) {
                        sink.set_error(&format!(
                            "{} 12",
                            ctx.msg.text(MessageKey::NumberSmallerThan)
                        ));
                        ok = false;
                    } else {
                        value.push('/');
                    }
                }
                10 => {
                    let year = sub(&value, 6, 10).parse::<i32>().unwrap_or(0);
                    if year < ctx.min_year || year > ctx.max_year {
                        sink.set_error(&format!(
                            "{}: {}-{}",
                            ctx.msg.text(MessageKey::YearBetween),
                            ctx.min_year,
                            ctx.max_year
                        ));
                        ok = false;
                    }
                }
                _ => {}
            }
        }

        // `dd/mm` complete: cross-check the day against the month
        if value.chars().count() == 6 {
            let day = sub(&value, 0, 2).parse::<u32>().unwrap_or(0);
            let month = sub(&value, 3, 5).parse::<u32>().unwrap_or(0);
            if !check_day(month, day, ctx) {
                sink.set_error(&ctx.msg.text(MessageKey::DayNotValid));
                ok = false;
            }
        }

        if ok {
            buf.set_text(value);
            MaskOutcome::TextChanged
        } else {
            buf.set_caret(buf.len());
            MaskOutcome::Unchanged
        }
    }

    fn on_leave(&self, text: &str, ctx: &MaskCtx<'_>, sink: &mut dyn ErrorSink) {
        date_leave(text, DateFormat::DdMmYyyy, ctx, sink);
    }
}
