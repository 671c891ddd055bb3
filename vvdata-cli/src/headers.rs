//! Cloudflare Pages `_headers` maintenance

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// CORS and no-store rules for the published data tree
pub const HEADERS_CONTENT: &str = "/vv/data/*\n  \
Access-Control-Allow-Origin: *\n  \
Cache-Control: no-store\n\n\
/vv/manifests/*\n  \
Access-Control-Allow-Origin: *\n  \
Cache-Control: no-store\n\n";

/// Make sure `path` holds exactly [`HEADERS_CONTENT`]
///
/// Returns whether the file was (re)written.
pub fn ensure_headers(path: &Path) -> Result<bool> {
    let current = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    if current == HEADERS_CONTENT {
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, HEADERS_CONTENT)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Updated {}", path.display());
    Ok(true)
}
