use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{BreakdownError, Result};

/// `## Section N` heading, case-insensitive, also accepting the Korean `섹션`.
/// The number may be followed by anything except another digit.
static SECTION_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^##[ ]+(?:section|섹션)[ ]+([0-9]+)(?:[^0-9]|$)").expect("valid regex")
});

/// Any level-2 heading. `###` never matches since a space must follow `##`.
static LEVEL2_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^##[ ]+").expect("valid regex"));

/// Return the text of `## Section <section>` up to the next `##` heading.
///
/// The result starts at the heading line itself and is trimmed. Only the
/// first matching heading is used.
pub fn locate_section(content: &str, section: u32) -> Result<&str> {
    let start = SECTION_HEADING
        .captures_iter(content)
        .find(|caps| caps[1].parse::<u32>().ok() == Some(section))
        .and_then(|caps| caps.get(0))
        .map(|m| m.start())
        .ok_or(BreakdownError::SectionNotFound { section })?;

    let heading_end = content[start..]
        .find('\n')
        .map(|offset| start + offset)
        .unwrap_or(content.len());

    let end = LEVEL2_HEADING
        .find(&content[heading_end..])
        .map(|m| heading_end + m.start())
        .unwrap_or(content.len());

    let text = content[start..end].trim();
    tracing::debug!("Located section {} ({} bytes)", section, text.len());
    Ok(text)
}
