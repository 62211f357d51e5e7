use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::output::errors::OutputError;
use crate::output::render_xdf;
use crate::xdf::XdfNode;

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Renders `root` and replaces `path` with it. The document is fully rendered and
/// written to a sibling temp file first, so a failure never leaves a truncated XDF behind.
pub fn write_xdf(root: &XdfNode, path: &str) -> Result<usize, OutputError> {
    let contents = render_xdf(root)?;
    let target = Path::new(path);
    let staging = temp_path(target);

    let io_error = |source| OutputError::OutputWriteError {
        path: path.to_string(),
        source,
    };

    let committed =
        std::fs::write(&staging, &contents).and_then(|()| std::fs::rename(&staging, target));
    if let Err(e) = committed {
        let _ = std::fs::remove_file(&staging);
        return Err(io_error(e));
    }

    tracing::debug!("Wrote {} bytes to {}", contents.len(), path);
    Ok(contents.len())
}
