use super::*;

#[test]
fn date_part_strips_time() {
    assert_eq!(date_part("2024-05-01T10:22:33.123"), "2024-05-01");
}

#[test]
fn date_part_keeps_plain_dates() {
    assert_eq!(date_part("2024-05-01"), "2024-05-01");
    assert_eq!(date_part(""), "");
}

#[test]
fn format_iso_pads_components() {
    assert_eq!(format_iso(2025, 3, 7), "2025-03-07");
}

#[test]
fn is_before_compares_calendar_dates() {
    assert!(is_before("2024-12-31", "2025-01-01"));
    assert!(!is_before("2025-01-01", "2025-01-01"));
    assert!(!is_before("2025-01-02T00:00:00", "2025-01-01"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn today_is_unknown_outside_browser() {
    assert_eq!(today_iso(), None);
}
