use super::*;

#[test]
fn js_parts_use_zero_based_month() {
    let stamp = from_js_parts(2024, 0, 31, 23, 59).expect("valid date");
    assert_eq!(stamp.month(), time::Month::January);
    assert_eq!(stamp.day(), 31);
    assert_eq!(stamp.hour(), 23);
    assert_eq!(stamp.minute(), 59);
}

#[test]
fn js_parts_reject_out_of_range_values() {
    assert_eq!(from_js_parts(2024, 12, 1, 0, 0), None);
    assert_eq!(from_js_parts(2023, 1, 29, 0, 0), None);
    assert_eq!(from_js_parts(2024, 5, 1, 24, 0), None);
}

#[test]
fn epoch_fallback_is_unix_epoch() {
    assert_eq!(epoch().year(), 1970);
}

#[test]
fn now_is_after_epoch() {
    assert!(now() > epoch());
}
