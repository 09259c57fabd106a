// Native-only code i.e. gated in mod.rs by #[cfg(not(target_arch = "wasm32"))] so no need to gate internally here

use {
    crate::errors::PipelineError,
    std::{fs, path::Path},
};

/// Reads a trade-history file from disk. An empty path means nothing was chosen.
pub fn read_csv_file(path: impl AsRef<Path>) -> Result<String, PipelineError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(PipelineError::NoFileSelected);
    }
    fs::read_to_string(path).map_err(|e| PipelineError::Read(format!("{}: {}", path.display(), e)))
}
