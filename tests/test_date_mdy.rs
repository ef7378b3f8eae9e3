use masked_edit::{DateFormat, Mask, MaskOutcome, MaskedEditState};

fn state() -> MaskedEditState {
    let mut s = MaskedEditState::with_mask(Mask::DateOnly);
    s.set_date_format(DateFormat::MmDdYyyy);
    s.set_reference_year(2024);
    s
}

fn type_str(s: &mut MaskedEditState, text: &str) {
    for c in text.chars() {
        s.key_char(c);
    }
}

#[test]
fn test_mdy_entry() {
    let mut s = state();

    s.key_char('1');
    assert_eq!(s.text(), "1");
    assert_eq!(s.key_char('2'), MaskOutcome::TextChanged);
    assert_eq!(s.text(), "12/");

    type_str(&mut s, "25");
    assert_eq!(s.text(), "12/25/");
    type_str(&mut s, "2024");
    assert_eq!(s.text(), "12/25/2024");
    assert_eq!(s.error(), None);

    s.focus_leave();
    assert_eq!(s.error(), None);
}

#[test]
fn test_mdy_month_carry() {
    // a two-digit month over 13 re-reads as month and first day digit
    let mut s = state();
    type_str(&mut s, "14");
    assert_eq!(s.text(), "01/04/");

    // exactly 13 leaves the day group open
    let mut s = state();
    type_str(&mut s, "13");
    assert_eq!(s.text(), "01/3");
    s.key_char('0');
    assert_eq!(s.text(), "01/30/");
}

#[test]
fn test_mdy_single_digit_month() {
    // anything over 1 can only be a one-digit month
    let mut s = state();
    s.key_char('2');
    assert_eq!(s.text(), "02/");
}

#[test]
fn test_mdy_single_digit_day() {
    // day digits over 3 close the day group on their own
    let mut s = state();
    type_str(&mut s, "01");
    assert_eq!(s.text(), "01/");
    s.key_char('4');
    assert_eq!(s.text(), "01/04/");
}

#[test]
fn test_mdy_day_against_month() {
    let mut s = state();
    type_str(&mut s, "023");
    assert_eq!(s.text(), "02/3");
    // 30th of February never exists
    assert_eq!(s.key_char('0'), MaskOutcome::Unchanged);
    assert_eq!(s.text(), "02/3");
    assert_eq!(s.error(), Some("Enter a number smaller than 31"));

    // 29th depends on the reference year
    let mut s = state();
    type_str(&mut s, "0229");
    assert_eq!(s.text(), "02/29/");

    let mut s = state();
    s.set_reference_year(2023);
    type_str(&mut s, "0229");
    assert_eq!(s.text(), "02/2");
    assert_eq!(s.error(), Some("Enter a number smaller than 31"));
}

#[test]
fn test_mdy_slash_pads() {
    let mut s = state();
    type_str(&mut s, "1/");
    assert_eq!(s.text(), "01/");

    s.key_char('5');
    assert_eq!(s.text(), "01/05/");
}

#[test]
fn test_mdy_year_advisory() {
    let mut s = state();
    type_str(&mut s, "1225");
    assert_eq!(s.text(), "12/25/");

    // the digit still goes in, the message just warns
    assert_eq!(s.key_char('3'), MaskOutcome::PassThrough);
    assert_eq!(s.text(), "12/25/3");
    assert_eq!(s.error(), Some("The year should start with 1 or 2"));

    s.key_char('1');
    assert_eq!(s.text(), "12/25/31");
    assert_eq!(s.error(), None);
}

#[test]
fn test_mdy_rejects() {
    let mut s = state();
    assert_eq!(s.key_char('x'), MaskOutcome::Unchanged);
    assert_eq!(s.text(), "");
    assert_eq!(s.error(), Some("Only digits and '/' are accepted"));
}

#[test]
fn test_mdy_select_all_restart() {
    let mut s = state();
    type_str(&mut s, "1225");
    assert_eq!(s.text(), "12/25/");

    s.select_all();
    s.key_char('9');
    assert_eq!(s.text(), "09/");
}

#[test]
fn test_mdy_backspace() {
    let mut s = state();
    type_str(&mut s, "1225");
    assert_eq!(s.text(), "12/25/");

    s.backspace();
    s.backspace();
    assert_eq!(s.text(), "12/2");
    s.key_char('5');
    assert_eq!(s.text(), "12/25/");
}
