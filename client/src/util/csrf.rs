//! CSRF token lookup.
//!
//! The host page renders `<meta name="csrf-token" content="...">`. The token
//! is read once at startup and attached to every mutating request.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

#[cfg(any(test, feature = "csr"))]
fn meta_selector(name: &str) -> String {
    format!("meta[name=\"{name}\"]")
}

/// Blank `content` attributes count as no token.
fn normalize_token(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}

/// Read the token from the page's `<meta>` tag.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let document = web_sys::window()?.document()?;
        let meta = document
            .query_selector(&meta_selector(desk::api::CSRF_META_NAME))
            .ok()
            .flatten()?;
        normalize_token(meta.get_attribute("content"))
    }
    #[cfg(not(feature = "csr"))]
    {
        normalize_token(None)
    }
}
