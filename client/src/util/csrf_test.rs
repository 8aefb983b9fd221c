use super::*;

#[test]
fn meta_selector_targets_named_tag() {
    assert_eq!(meta_selector("csrf-token"), "meta[name=\"csrf-token\"]");
}

#[test]
fn normalize_token_trims_and_drops_blank() {
    assert_eq!(normalize_token(Some("  abc123 ".to_owned())), Some("abc123".to_owned()));
    assert_eq!(normalize_token(Some("   ".to_owned())), None);
    assert_eq!(normalize_token(None), None);
}

#[test]
fn read_token_is_absent_off_browser() {
    assert_eq!(read_token(), None);
}
