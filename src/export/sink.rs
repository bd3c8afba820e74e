use std::path::{Path, PathBuf};

use tracing::debug;

use super::encode_with_bom;
use crate::error::ServiceError;

/// Destination for an exported match log.
pub trait ExportSink {
    /// Store `content` under the suggested `filename`.
    fn export(&self, content: &str, filename: &str) -> Result<(), ServiceError>;
}

/// Writes exports as BOM-prefixed UTF-8 files into a directory.
#[derive(Debug, Clone)]
pub struct FileExportSink {
    dir: PathBuf,
}

impl FileExportSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for FileExportSink {
    fn export(&self, content: &str, filename: &str) -> Result<(), ServiceError> {
        let path = self.dir.join(filename);
        std::fs::write(&path, encode_with_bom(content)).map_err(|e| ServiceError::Io {
            path: path.clone(),
            source: e,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "match log exported");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{export_filename, UTF8_BOM};

    #[test]
    fn test_file_sink_writes_bom_prefixed_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileExportSink::new(dir.path());
        let filename = export_filename("01.01.2025");

        sink.export("Wynik: Żółci 1 - 0 Niebiescy", &filename)
            .unwrap();

        let bytes = std::fs::read(dir.path().join("dziennik_meczu_01.01.2025.txt")).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        assert_eq!(
            std::str::from_utf8(&bytes[UTF8_BOM.len()..]).unwrap(),
            "Wynik: Żółci 1 - 0 Niebiescy"
        );
    }

    #[test]
    fn test_file_sink_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileExportSink::new(dir.path().join("missing"));
        let err = sink.export("x", "log.txt").unwrap_err();
        assert!(matches!(err, ServiceError::Io { .. }));
    }
}
