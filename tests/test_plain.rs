use masked_edit::{Mask, MaskOutcome, MaskedEditState};

fn type_str(s: &mut MaskedEditState, text: &str) {
    for c in text.chars() {
        s.key_char(c);
    }
}

#[test]
fn test_no_mask() {
    let mut s = MaskedEditState::new();
    assert_eq!(s.mask(), Mask::None);

    type_str(&mut s, "hello 42!");
    assert_eq!(s.text(), "hello 42!");
    assert_eq!(s.error(), None);

    s.focus_leave();
    assert_eq!(s.error(), None);
}

#[test]
fn test_digit_only() {
    let mut s = MaskedEditState::with_mask(Mask::DigitOnly);

    type_str(&mut s, "123");
    assert_eq!(s.text(), "123");
    assert_eq!(s.error(), None);

    assert_eq!(s.key_char('a'), MaskOutcome::Unchanged);
    assert_eq!(s.text(), "123");
    assert_eq!(s.error(), Some("Only digits are accepted"));

    // next valid digit clears the message
    assert_eq!(s.key_char('4'), MaskOutcome::PassThrough);
    assert_eq!(s.text(), "1234");
    assert_eq!(s.error(), None);
}

#[test]
fn test_decimal() {
    let mut s = MaskedEditState::with_mask(Mask::Decimal);

    type_str(&mut s, "3.14");
    assert_eq!(s.text(), "3.14");
    assert_eq!(s.error(), None);

    assert_eq!(s.key_char('x'), MaskOutcome::Unchanged);
    assert_eq!(s.text(), "3.14");
    assert_eq!(s.error(), Some("Only digits and '.' are accepted"));

    // no structural check while typing, a second dot goes in
    s.key_char('.');
    assert_eq!(s.text(), "3.14.");
    assert_eq!(s.error(), None);
}

#[test]
fn test_insert_at_caret() {
    let mut s = MaskedEditState::with_mask(Mask::DigitOnly);
    type_str(&mut s, "19");
    s.set_caret(1);
    s.key_char('0');
    assert_eq!(s.text(), "109");
    assert_eq!(s.caret(), 2);
}

#[test]
fn test_replace_selection() {
    let mut s = MaskedEditState::with_mask(Mask::DigitOnly);
    type_str(&mut s, "12345");
    s.set_selection(1, 3);
    s.key_char('9');
    assert_eq!(s.text(), "195");
}

#[test]
fn test_backspace() {
    let mut s = MaskedEditState::with_mask(Mask::DigitOnly);
    type_str(&mut s, "12");
    assert_eq!(s.backspace(), MaskOutcome::TextChanged);
    assert_eq!(s.text(), "1");
    assert_eq!(s.backspace(), MaskOutcome::TextChanged);
    assert_eq!(s.text(), "");
    assert_eq!(s.backspace(), MaskOutcome::Unchanged);
}

#[test]
fn test_clear() {
    let mut s = MaskedEditState::with_mask(Mask::DigitOnly);
    type_str(&mut s, "12");
    s.key_char('a');
    assert!(s.error().is_some());

    s.clear();
    assert_eq!(s.text(), "");
    assert_eq!(s.error(), None);
}
