#![doc = include_str!("../readme.md")]
#![allow(clippy::uninlined_format_args)]

pub mod buffer;
pub mod calendar;
pub mod message;
pub mod sink;

mod mask;
mod masked_edit;

pub use mask::EditSession;
pub use masked_edit::{DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, MaskedEditState};

/// The supported input masks.
///
/// A closed set; there is no mask pattern language. Selecting a mask
/// clears the field and sets the maximum length.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mask {
    /// No masking. Everything passes through.
    #[default]
    None,
    /// Short date, `dd/mm/yyyy` or `mm/dd/yyyy`. See [DateFormat].
    DateOnly,
    /// North-American phone number with area code, `999-999-9999`.
    PhoneWithArea,
    /// Dotted-quad IPv4 address.
    IpAddress,
    /// Social security number, `999-99-9999`.
    Ssn,
    /// Digits and a decimal point.
    Decimal,
    /// Digits only.
    DigitOnly,
}

impl Mask {
    /// Maximum text length for this mask.
    /// Unbounded masks report `usize::MAX`.
    pub fn max_len(self) -> usize {
        match self {
            Mask::DateOnly => 10,
            Mask::IpAddress => 15,
            Mask::PhoneWithArea => 12,
            Mask::Ssn => 11,
            Mask::None | Mask::Decimal | Mask::DigitOnly => usize::MAX,
        }
    }

    /// Separator auto-inserted by this mask, if it has one.
    pub fn delimiter(self) -> Option<char> {
        match self {
            Mask::DateOnly => Some('/'),
            Mask::PhoneWithArea | Mask::Ssn => Some('-'),
            Mask::IpAddress => Some('.'),
            Mask::None | Mask::Decimal | Mask::DigitOnly => None,
        }
    }

    /// Upper bound for auto-inserted delimiters.
    pub fn max_delimiters(self) -> usize {
        match self {
            Mask::DateOnly | Mask::PhoneWithArea | Mask::Ssn => 2,
            Mask::IpAddress => 3,
            Mask::None | Mask::Decimal | Mask::DigitOnly => 0,
        }
    }
}

/// Date sub-format for [Mask::DateOnly].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `dd/mm/yyyy`
    #[default]
    DdMmYyyy,
    /// `mm/dd/yyyy`
    MmDdYyyy,
}

impl DateFormat {
    /// chrono format pattern.
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::DdMmYyyy => "%d/%m/%Y",
            DateFormat::MmDdYyyy => "%m/%d/%Y",
        }
    }
}

/// Result of handling one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MaskOutcome {
    /// The character was accepted as typed and the default edit applied
    /// unchanged. The machine may still have touched the buffer first,
    /// e.g. appended a delimiter the typed digit then lands after.
    PassThrough,
    /// The event was consumed but the text did not change.
    /// Rejected characters and overflow end up here.
    Unchanged,
    /// The machine rewrote the buffer itself.
    TextChanged,
}

impl MaskOutcome {
    /// Anything but [MaskOutcome::PassThrough]. The equivalent of
    /// `Handled` on a key-press event.
    pub fn is_consumed(&self) -> bool {
        *self != MaskOutcome::PassThrough
    }
}

impl From<bool> for MaskOutcome {
    fn from(value: bool) -> Self {
        if value {
            MaskOutcome::TextChanged
        } else {
            MaskOutcome::Unchanged
        }
    }
}
