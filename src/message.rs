//!
//! The validation message catalog.
//!
//! The core never owns language text. Every message is addressed by a
//! [MessageKey] and resolved through a [MessageLookup] injected into
//! the controller at construction; only numeric bounds are
//! interpolated by the core itself. [EnglishMessages] is the bundled
//! default.
//!

use dyn_clone::{DynClone, clone_box};
use std::borrow::Cow;
use std::fmt::Debug;

/// Keys for the validation message catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Character outside a digits-only mask.
    OnlyDigit,
    /// Character outside a digits-and-dot mask.
    OnlyDigitAndDot,
    /// Character outside a digits-and-slash mask.
    OnlyDigitAndSlash,
    /// Character outside a digits-and-dash mask.
    OnlyDigitAndDash,
    /// Malformed `mm/dd/yyyy` date.
    DateFormatMdy,
    /// Malformed `dd/mm/yyyy` date.
    DateFormatDmy,
    /// Year outside the configured bounds. The bounds are appended.
    YearBetween,
    /// Malformed phone number.
    PhoneFormat,
    /// Malformed SSN.
    SsnFormat,
    /// Malformed IP address.
    IpFormat,
    /// Numeric component over its bound. The bound is appended.
    NumberSmallerThan,
    /// Day does not exist in the month.
    DayNotValid,
    /// Year digit outside the expected leading 1/2.
    YearStartWith,
}

impl MessageKey {
    /// The resource key, as handed to the lookup.
    pub fn key(self) -> &'static str {
        match self {
            MessageKey::OnlyDigit => "ONLYDIGIT",
            MessageKey::OnlyDigitAndDot => "ONLYDIGITANDDOT",
            MessageKey::OnlyDigitAndSlash => "ONLYDIGITANDSLASH",
            MessageKey::OnlyDigitAndDash => "ONLYDIGITANDDASH",
            MessageKey::DateFormatMdy => "DATEFORMAT",
            MessageKey::DateFormatDmy => "DATEFORMATddmmyyyy",
            MessageKey::YearBetween => "YEARBETWEEN",
            MessageKey::PhoneFormat => "PHONEFORMAT",
            MessageKey::SsnFormat => "SSNFORMAT",
            MessageKey::IpFormat => "IP_FORMAT",
            MessageKey::NumberSmallerThan => "NUMBERISSMALLERTHAN",
            MessageKey::DayNotValid => "DAYNOTVALID",
            MessageKey::YearStartWith => "YEARSTARTWITH",
        }
    }
}

/// Resolves message keys to display text.
///
/// Implement this to plug in your own localization; the default is
/// [EnglishMessages].
pub trait MessageLookup: DynClone + Debug {
    /// Text for the key.
    fn text(&self, key: MessageKey) -> Cow<'_, str>;
}

impl Clone for Box<dyn MessageLookup> {
    fn clone(&self) -> Self {
        clone_box(self.as_ref())
    }
}

impl MessageLookup for Box<dyn MessageLookup> {
    fn text(&self, key: MessageKey) -> Cow<'_, str> {
        self.as_ref().text(key)
    }
}

/// Built-in English messages.
#[derive(Debug, Default, Clone)]
pub struct EnglishMessages;

impl MessageLookup for EnglishMessages {
    fn text(&self, key: MessageKey) -> Cow<'_, str> {
        Cow::Borrowed(match key {
            MessageKey::OnlyDigit => "Only digits are accepted",
            MessageKey::OnlyDigitAndDot => "Only digits and '.' are accepted",
            MessageKey::OnlyDigitAndSlash => "Only digits and '/' are accepted",
            MessageKey::OnlyDigitAndDash => "Only digits and '-' are accepted",
            MessageKey::DateFormatMdy => "The date must match mm/dd/yyyy",
            MessageKey::DateFormatDmy => "The date must match dd/mm/yyyy",
            MessageKey::YearBetween => "The year must be between",
            MessageKey::PhoneFormat => "The phone number must match 999-999-9999",
            MessageKey::SsnFormat => "The SSN must match 999-99-9999",
            MessageKey::IpFormat => "This is not a valid IP address",
            MessageKey::NumberSmallerThan => "Enter a number smaller than",
            MessageKey::DayNotValid => "This is not a valid day of month",
            MessageKey::YearStartWith => "The year should start with 1 or 2",
        })
    }
}
