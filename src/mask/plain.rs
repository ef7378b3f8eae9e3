//!
//! The unstructured masks: none, digits, decimal.
//!

use crate::MaskOutcome;
use crate::buffer::EditBuffer;
use crate::mask::{EditSession, MaskCtx, MaskMachine};
use crate::message::MessageKey;
use crate::sink::ErrorSink;

/// [Mask::None](crate::Mask::None). Everything passes through.
#[derive(Debug)]
pub(crate) struct PassMask;

impl MaskMachine for PassMask {
    fn on_char(
        &self,
        _c: char,
        _buf: &mut EditBuffer,
        _session: &mut EditSession,
        _ctx: &MaskCtx<'_>,
        _sink: &mut dyn ErrorSink,
    ) -> MaskOutcome {
        MaskOutcome::PassThrough
    }
}

/// Digits only.
#[derive(Debug)]
pub(crate) struct DigitMask;

impl MaskMachine for DigitMask {
    fn on_char(
        &self,
        c: char,
        _buf: &mut EditBuffer,
        _session: &mut EditSession,
        ctx: &MaskCtx<'_>,
        sink: &mut dyn ErrorSink,
    ) -> MaskOutcome {
        if c.is_ascii_digit() {
            sink.set_error("");
            MaskOutcome::PassThrough
        } else {
            sink.set_error(&ctx.msg.text(MessageKey::OnlyDigit));
            MaskOutcome::Unchanged
        }
    }
}

/// Digits and a decimal point. No structural checks while typing.
#[derive(Debug)]
pub(crate) struct DecimalMask;

impl MaskMachine for DecimalMask {
    fn on_char(
        &self,
        c: char,
        _buf: &mut EditBuffer,
        _session: &mut EditSession,
        ctx: &MaskCtx<'_>,
        sink: &mut dyn ErrorSink,
    ) -> MaskOutcome {
        if c.is_ascii_digit() || c == '.' {
            sink.set_error("");
            MaskOutcome::PassThrough
        } else {
            sink.set_error(&ctx.msg.text(MessageKey::OnlyDigitAndDot));
            MaskOutcome::Unchanged
        }
    }
}
