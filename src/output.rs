use std::fs;
use std::path::Path;

use log::info;

use crate::error::ExportError;
use crate::models::Conversation;

/// Serializes the full export and persists it atomically: the JSON is
/// written to a sibling temp file first, then renamed over the target,
/// so a failed run never leaves a partial artifact behind.
pub fn write_json<P: AsRef<Path>>(
    path: P,
    conversations: &[Conversation],
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(conversations)?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;

    info!(
        "Wrote {} conversations to {}",
        conversations.len(),
        path.display()
    );
    Ok(())
}
