//! Beautify command - link pull requests in an existing Markdown report

use std::path::Path;

use planex::core::services::beautify_file;
use planex::output::{BeautifyResult, OutputMode};

/// Handle `planex beautify`
pub fn beautify(file: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let links_beautified = beautify_file(file)?;

    BeautifyResult {
        file: file.display().to_string(),
        links_beautified,
    }
    .render(mode);
    Ok(())
}
