use super::DataStore;
use crate::error::{CatalogError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct FileStore {
    base_dir: Option<PathBuf>,
}

impl FileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl DataStore for FileStore {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let full = self.resolve(path);
        let file = File::open(&full).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CatalogError::FileNotFound(path.to_path_buf()),
            _ => CatalogError::Io(e),
        })?;

        let lines = BufReader::new(file)
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .map_err(CatalogError::Io)?;
        tracing::debug!(path = %full.display(), lines = lines.len(), "read catalog file");
        Ok(lines)
    }

    fn write_lines(&mut self, path: &Path, lines: &[String]) -> Result<()> {
        let full = self.resolve(path);
        let file = File::create(&full).map_err(CatalogError::Io)?;
        let mut writer = BufWriter::new(file);
        for line in lines {
            writeln!(writer, "{}", line).map_err(CatalogError::Io)?;
        }
        writer.flush().map_err(CatalogError::Io)?;
        tracing::debug!(path = %full.display(), lines = lines.len(), "wrote catalog file");
        Ok(())
    }
}
