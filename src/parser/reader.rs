use std::path::Path;

use crate::error::{BreakdownError, Result};

const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Read a planning document into memory.
///
/// Files that are not valid UTF-8 are decoded as Latin-1 instead of being
/// rejected, so documents exported by older editors still go through.
pub fn read_document(path: &Path) -> Result<String> {
    let is_markdown = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| MARKDOWN_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false);
    if !is_markdown {
        tracing::warn!("{} may not be a markdown file", path.display());
    }

    let bytes = std::fs::read(path).map_err(|source| BreakdownError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let content = decode_document(bytes);
    tracing::info!("Read {} ({} characters)", path.display(), content.chars().count());
    Ok(content)
}

/// Decode raw file bytes, dropping a UTF-8 byte-order mark if present.
pub fn decode_document(mut bytes: Vec<u8>) -> String {
    if bytes.starts_with(UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }

    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!("Document is not valid UTF-8, decoding as Latin-1");
            err.into_bytes().into_iter().map(char::from).collect()
        }
    }
}
