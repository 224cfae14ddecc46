/*!
 * Textual Memory Map
 * Human-readable hole list and file export
 */

use crate::core::limits::{MAP_FILE_MODE, MAP_SEPARATOR};
use crate::memory::types::{MemoryError, MemoryResult, Segment};
use log::{info, warn};
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Renders free segments as `"[start, length] - [start, length]"`
///
/// Zero holes render as the empty string.
pub struct MemoryMap<'a> {
    segments: &'a [Segment],
}

impl<'a> MemoryMap<'a> {
    pub fn new(segments: &'a [Segment]) -> Self {
        Self { segments }
    }
}

impl fmt::Display for MemoryMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, hole) in self.segments.iter().filter(|s| s.is_free).enumerate() {
            if i > 0 {
                f.write_str(MAP_SEPARATOR)?;
            }
            write!(f, "[{}, {}]", hole.start, hole.length)?;
        }
        Ok(())
    }
}

/// Create or truncate `path` and write `text` with no trailing newline
pub fn write_memory_map(path: &Path, text: &str) -> MemoryResult<()> {
    let export_err = |e: std::io::Error| {
        warn!("Memory map export to {} failed: {}", path.display(), e);
        MemoryError::ExportIo {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(MAP_FILE_MODE);
    }

    let mut file = options.open(path).map_err(export_err)?;
    file.write_all(text.as_bytes()).map_err(export_err)?;
    file.flush().map_err(export_err)?;

    info!(
        "Exported memory map ({} bytes) to {}",
        text.len(),
        path.display()
    );
    Ok(())
}
