//! Link beautifier - rewrites pull-request URLs in Markdown as links
//!
//! `https://github.com/org/repo/pull/42` becomes
//! `[PR#42](https://github.com/org/repo/pull/42)`. Links that are already in
//! that form are left alone, so running the pass again changes nothing.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use log::{debug, info};
use regex::{Captures, Regex};

use crate::core::error::ExportError;

const PR_URL: &str = r"https?://github\.com/[\w.-]+/[\w.-]+/pull/\d+";

static PR_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\[PR#\d+\]\({PR_URL}\)|(?P<url>https?://github\.com/[\w.-]+/[\w.-]+/pull/(?P<number>\d+))"
    ))
    .expect("pull request pattern is valid")
});

/// Distinct bare pull-request URLs, ignoring ones already wrapped in a link
#[must_use]
pub fn pull_request_urls(markdown: &str) -> BTreeSet<String> {
    PR_LINK
        .captures_iter(markdown)
        .filter_map(|caps| caps.name("url").map(|url| url.as_str().to_string()))
        .collect()
}

/// Wrap every bare pull-request URL as `[PR#<n>](<url>)`
#[must_use]
pub fn beautify_links(markdown: &str) -> String {
    PR_LINK
        .replace_all(markdown, |caps: &Captures<'_>| match (caps.name("url"), caps.name("number")) {
            (Some(url), Some(number)) => format!("[PR#{}]({})", number.as_str(), url.as_str()),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

/// Beautify a Markdown file in place
///
/// Returns how many distinct URLs were rewritten. The file is only written
/// when something changed.
pub fn beautify_file(path: &Path) -> Result<usize, ExportError> {
    let content = fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
    let urls = pull_request_urls(&content);
    if urls.is_empty() {
        debug!("No bare pull request links in {}", path.display());
        return Ok(0);
    }

    fs::write(path, beautify_links(&content)).map_err(|e| ExportError::io(path, e))?;
    info!("Beautified {} pull request link(s) in {}", urls.len(), path.display());
    Ok(urls.len())
}
