use {
    crate::{
        errors::PipelineError,
        models::{PipelineReport, run_pipeline_bytes},
    },
    eframe::egui::{Context, DroppedFile},
    std::sync::Arc,
};

#[cfg(not(target_arch = "wasm32"))]
use {crate::models::run_pipeline_file, std::path::PathBuf};

/// Where the next trade-history CSV comes from.
#[derive(Debug, Clone)]
pub(crate) enum FileSource {
    /// Typed into the path box, passed with `--file`, or dropped from a file manager.
    #[cfg(not(target_arch = "wasm32"))]
    Path(PathBuf),
    /// Contents handed over by the windowing layer (always the case in the browser).
    Bytes { name: String, bytes: Arc<[u8]> },
}

impl FileSource {
    /// From the native path box. Blank input means nothing was chosen.
    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn from_path_input(input: &str) -> Result<Self, PipelineError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PipelineError::NoFileSelected);
        }
        Ok(Self::Path(PathBuf::from(trimmed)))
    }

    /// Prefers bytes when egui already read the file.
    pub(crate) fn from_dropped(file: &DroppedFile) -> Result<Self, PipelineError> {
        if let Some(bytes) = &file.bytes {
            return Ok(Self::Bytes {
                name: file.name.clone(),
                bytes: Arc::clone(bytes),
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(path) = &file.path {
            return Ok(Self::Path(path.clone()));
        }
        Err(PipelineError::NoFileSelected)
    }

    pub(crate) fn display_name(&self) -> String {
        match self {
            #[cfg(not(target_arch = "wasm32"))]
            Self::Path(path) => path.display().to_string(),
            Self::Bytes { name, .. } => name.clone(),
        }
    }

    pub(crate) fn run(&self) -> Result<PipelineReport, PipelineError> {
        match self {
            #[cfg(not(target_arch = "wasm32"))]
            Self::Path(path) => run_pipeline_file(path),
            Self::Bytes { bytes, .. } => run_pipeline_bytes(bytes),
        }
    }
}

/// The file dropped on the window this frame, if any. Only the first of several is used.
pub(crate) fn dropped_file_request(ctx: &Context) -> Option<Result<FileSource, PipelineError>> {
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());
    if dropped.len() > 1 {
        log::warn!("{} files dropped; loading only the first", dropped.len());
    }
    dropped.first().map(FileSource::from_dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "DATE,AMOUNT\n1/05/24,10\n1/05/24,-4\n";

    #[test]
    fn dropped_bytes_run_through_the_pipeline() {
        let file = DroppedFile {
            name: "trades.csv".to_string(),
            bytes: Some(Arc::from(CSV.as_bytes())),
            ..Default::default()
        };
        let source = FileSource::from_dropped(&file).unwrap();
        assert_eq!(source.display_name(), "trades.csv");
        let report = source.run().unwrap();
        assert_eq!(report.aggregation.daily.get("1/05/24"), Some(6.0));
    }

    #[test]
    fn dropped_file_without_content_counts_as_no_selection() {
        let file = DroppedFile::default();
        assert_eq!(
            FileSource::from_dropped(&file).unwrap_err(),
            PipelineError::NoFileSelected
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn blank_path_input_counts_as_no_selection() {
        assert_eq!(
            FileSource::from_path_input("   ").unwrap_err(),
            PipelineError::NoFileSelected
        );
        assert!(matches!(
            FileSource::from_path_input(" trades.csv "),
            Ok(FileSource::Path(p)) if p == PathBuf::from("trades.csv")
        ));
    }
}
