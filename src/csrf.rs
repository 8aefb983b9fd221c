//! CSRF token scraping from the desk's HTML page.
//!
//! The server renders the token as `<meta name="csrf-token" content="...">`;
//! attribute order and quoting vary, so each `<meta>` tag is matched on its own.

use desk::api::CSRF_META_NAME;
use regex::Regex;

/// Token from the first `<meta>` tag named [`CSRF_META_NAME`], if any.
///
/// Blank `content` attributes count as no token.
pub fn extract_token(html: &str) -> Result<Option<String>, regex::Error> {
    let meta = Regex::new(r"(?is)<meta\b[^>]*>")?;
    let name = Regex::new(&format!(r#"(?i)\bname\s*=\s*["']{}["']"#, regex::escape(CSRF_META_NAME)))?;
    let content = Regex::new(r#"(?i)\bcontent\s*=\s*(?:"([^"]*)"|'([^']*)')"#)?;

    let token = meta
        .find_iter(html)
        .map(|tag| tag.as_str())
        .filter(|tag| name.is_match(tag))
        .find_map(|tag| {
            let caps = content.captures(tag)?;
            caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str().trim().to_owned())
        })
        .filter(|token| !token.is_empty());
    Ok(token)
}

#[cfg(test)]
#[path = "csrf_test.rs"]
mod tests;
