use super::*;

#[test]
fn extracts_token_from_meta_tag() {
    let html = r#"<html><head><meta charset="utf-8"><meta name="csrf-token" content="abc123"></head></html>"#;
    assert_eq!(extract_token(html).unwrap().as_deref(), Some("abc123"));
}

#[test]
fn accepts_reordered_attributes_and_single_quotes() {
    let html = "<meta content='tok-9' name='csrf-token' />";
    assert_eq!(extract_token(html).unwrap().as_deref(), Some("tok-9"));
}

#[test]
fn ignores_other_meta_tags() {
    let html = r#"<meta name="viewport" content="width=device-width"><meta name="csrf-token" content="x">"#;
    assert_eq!(extract_token(html).unwrap().as_deref(), Some("x"));
}

#[test]
fn missing_or_blank_token_is_none() {
    assert_eq!(extract_token("<html><head></head></html>").unwrap(), None);
    assert_eq!(extract_token(r#"<meta name="csrf-token" content="  ">"#).unwrap(), None);
}
