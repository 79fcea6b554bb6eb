use crate::error::Result;
use crate::models::Project;

/// Render a project as pretty-printed JSON with a trailing newline.
pub fn render_json(project: &Project) -> Result<String> {
    let mut out = serde_json::to_string_pretty(project)?;
    out.push('\n');
    Ok(out)
}
