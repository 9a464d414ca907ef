//! Reference resolver - turns a task's reference map into link text
//!
//! Only GitHub links are reported. A reference counts as a GitHub link when
//! its decoded URL or its alias contains `github.com`.
//!
//! # Examples
//!
//! ```
//! use planex::core::models::Reference;
//! use planex::core::services::resolve_references;
//!
//! let refs = vec![Reference::new("https%3A//github%2Ecom/org/repo/pull/5", None)];
//! assert_eq!(resolve_references(Some(&refs)), "https://github.com/org/repo/pull/5");
//! assert_eq!(resolve_references(None), "No references");
//! ```

use std::borrow::Cow;

use crate::core::models::Reference;

/// Attachments text when the task has no reference map at all
pub const NO_REFERENCES: &str = "No references";

/// Attachments text when no reference is a GitHub link
pub const NO_GITHUB_LINKS: &str = "No GitHub links";

const GITHUB_MARKER: &str = "github.com";

const TOKEN_SEPARATOR: &str = "; ";

/// Case-sensitive GitHub link test
#[must_use]
pub fn is_github_like(text: &str) -> bool {
    text.contains(GITHUB_MARKER)
}

/// URL-decode a reference key, falling back to the raw key
#[must_use]
pub fn decode_reference_key(key: &str) -> Cow<'_, str> {
    urlencoding::decode(key).unwrap_or(Cow::Borrowed(key))
}

/// The token a single reference contributes, if any
#[must_use]
pub fn reference_token(reference: &Reference) -> Option<String> {
    let url = decode_reference_key(&reference.key);
    let alias = reference.alias.as_deref().unwrap_or_default();

    match (is_github_like(&url), is_github_like(alias)) {
        (true, true) if url == alias => Some(url.into_owned()),
        (true, true) => Some(format!("{alias} ({url})")),
        (true, false) => Some(url.into_owned()),
        (false, true) => Some(alias.to_string()),
        (false, false) => None,
    }
}

/// Resolve the Attachments text for a task
///
/// Tokens keep the order of the reference map. Identical tokens from
/// different entries are all kept.
#[must_use]
pub fn resolve_references(references: Option<&[Reference]>) -> String {
    let Some(references) = references else {
        return NO_REFERENCES.to_string();
    };

    let tokens: Vec<String> = references.iter().filter_map(reference_token).collect();
    if tokens.is_empty() {
        NO_GITHUB_LINKS.to_string()
    } else {
        tokens.join(TOKEN_SEPARATOR)
    }
}
