//! Stdout and file writers for rendered HCL

use log::debug;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::config::terraform;
use crate::error::{GocdError, Result};

/// One rendered pipeline or template
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    /// Entity name, used as the file stem
    pub name: String,
    pub content: String,
}

impl RenderedDocument {
    pub fn new(name: &str, content: String) -> Self {
        Self {
            name: name.to_string(),
            content,
        }
    }

    /// File name used with [`OutputTarget::Directory`]
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, terraform::FILE_EXTENSION)
    }
}

/// Where rendered documents are written
#[derive(Debug, Clone, PartialEq)]
pub enum OutputTarget {
    Stdout,
    Directory(PathBuf),
}

impl OutputTarget {
    /// Build the target from the `--to-file` and `--output-dir` flags
    pub fn new(to_file: bool, output_dir: &Path) -> Self {
        if to_file {
            OutputTarget::Directory(output_dir.to_path_buf())
        } else {
            OutputTarget::Stdout
        }
    }

    /// Write a document, returning the file path when one was written
    pub async fn write(&self, document: &RenderedDocument) -> Result<Option<PathBuf>> {
        match self {
            OutputTarget::Stdout => {
                write_stream(&mut std::io::stdout().lock(), document)?;
                Ok(None)
            }
            OutputTarget::Directory(dir) => {
                let path = dir.join(document.file_name());
                write_file(&path, &document.content).await?;
                Ok(Some(path))
            }
        }
    }
}

/// Write a document and a trailing newline to a stream
fn write_stream<W: Write>(out: &mut W, document: &RenderedDocument) -> Result<()> {
    writeln!(out, "{}", document.content)
        .and_then(|_| out.flush())
        .map_err(|e| {
            GocdError::Output(format!("Failed to write '{}' to stdout: {}", document.name, e))
        })
}

async fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(|e| {
            GocdError::Output(format!(
                "Failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut file = fs::File::create(path).await.map_err(|e| {
        GocdError::Output(format!("Failed to create file '{}': {}", path.display(), e))
    })?;

    file.write_all(content.as_bytes()).await.map_err(|e| {
        GocdError::Output(format!("Failed to write to '{}': {}", path.display(), e))
    })?;

    file.flush().await.map_err(|e| {
        GocdError::Output(format!("Failed to flush file '{}': {}", path.display(), e))
    })?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
