//!
//! Where validation messages end up.
//!
//! One last-write-wins slot per field. The host decides how to surface
//! it; an error balloon, a status line, anything. [ErrorSlot] is the
//! bundled implementation, a custom [ErrorSink] can forward messages
//! elsewhere.
//!

use dyn_clone::{DynClone, clone_box};
use std::fmt::Debug;

/// Receives validation messages for one field.
///
/// Last write wins, the empty string clears.
pub trait ErrorSink: DynClone + Debug {
    /// Set the current message. `""` clears it.
    fn set_error(&mut self, msg: &str);

    /// The current message, if any.
    fn error(&self) -> Option<&str>;
}

impl Clone for Box<dyn ErrorSink> {
    fn clone(&self) -> Self {
        clone_box(self.as_ref())
    }
}

impl ErrorSink for Box<dyn ErrorSink> {
    fn set_error(&mut self, msg: &str) {
        self.as_mut().set_error(msg);
    }

    fn error(&self) -> Option<&str> {
        self.as_ref().error()
    }
}

/// Plain message slot.
#[derive(Debug, Default, Clone)]
pub struct ErrorSlot {
    msg: Option<String>,
}

impl ErrorSlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ErrorSink for ErrorSlot {
    fn set_error(&mut self, msg: &str) {
        self.msg = if msg.is_empty() {
            None
        } else {
            Some(msg.to_string())
        };
    }

    fn error(&self) -> Option<&str> {
        self.msg.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot() {
        let mut s = ErrorSlot::new();
        assert_eq!(s.error(), None);
        s.set_error("bad");
        assert_eq!(s.error(), Some("bad"));
        s.set_error("worse");
        assert_eq!(s.error(), Some("worse"));
        s.set_error("");
        assert_eq!(s.error(), None);
    }
}
