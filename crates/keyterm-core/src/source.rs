//! Document content loading

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::SourceError;

/// Read a whole document into memory
pub fn load_content(path: impl AsRef<Path>) -> Result<String, SourceError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "loaded content");
    Ok(content)
}
