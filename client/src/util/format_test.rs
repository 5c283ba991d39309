use super::*;

#[test]
fn display_date_keeps_date_part() {
    assert_eq!(display_date(Some("2024-03-05T10:20:30")), "2024-03-05");
    assert_eq!(display_date(Some("2024-03-05 10:20:30")), "2024-03-05");
    assert_eq!(display_date(Some("2024-03-05")), "2024-03-05");
}

#[test]
fn display_date_missing_renders_dash() {
    assert_eq!(display_date(None), "-");
    assert_eq!(display_date(Some("  ")), "-");
}

#[test]
fn click_label_pluralizes() {
    assert_eq!(click_label(0), "0 clicks");
    assert_eq!(click_label(1), "1 click");
    assert_eq!(click_label(12), "12 clicks");
}
