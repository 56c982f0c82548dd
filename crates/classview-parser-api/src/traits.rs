use crate::{config::ParserConfig, errors::ParserError, metrics::ParserMetrics};
use crate::metrics::duration_serde;
use classview::ClassRegistry;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Outcome of one parsed file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Where the text came from
    pub file_path: PathBuf,

    /// Full names of the records this file registered, in registration order
    pub classes: Vec<String>,

    /// Wall time of the parse session
    #[serde(with = "duration_serde")]
    pub parse_time: Duration,

    /// Line count of the source text
    pub line_count: usize,

    /// Length of the source text in bytes
    pub byte_count: usize,
}

impl FileInfo {
    /// Number of records registered from this file
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}

/// Aggregate information about a parsed batch of files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// One entry per file that was read and parsed
    pub files: Vec<FileInfo>,

    /// Total number of records across all files
    pub total_classes: usize,

    /// Sum of the per-file parse times
    #[serde(with = "duration_serde")]
    pub total_parse_time: Duration,

    /// Files that could not be read, with the error message
    pub failed_files: Vec<(PathBuf, String)>,
}

impl ProjectInfo {
    /// Empty summary, to be filled by [`ProjectInfo::record`]
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            total_classes: 0,
            total_parse_time: Duration::ZERO,
            failed_files: Vec::new(),
        }
    }

    /// Fold one file's outcome into the summary
    pub fn record(&mut self, path: &Path, result: Result<FileInfo, ParserError>) {
        match result {
            Ok(info) => {
                self.total_classes += info.classes.len();
                self.total_parse_time += info.parse_time;
                self.files.push(info);
            }
            Err(e) => {
                self.failed_files.push((path.to_path_buf(), e.to_string()));
            }
        }
    }

    /// Files attempted, whether read or not
    pub fn total_files(&self) -> usize {
        self.files.len() + self.failed_files.len()
    }

    /// Fraction of attempted files that were read, 0.0 for an empty batch
    pub fn success_rate(&self) -> f64 {
        if self.total_files() == 0 {
            0.0
        } else {
            self.files.len() as f64 / self.total_files() as f64
        }
    }

    /// Mean parse time over the files that were read
    pub fn avg_parse_time(&self) -> Duration {
        if self.files.is_empty() {
            Duration::ZERO
        } else {
            self.total_parse_time / self.files.len() as u32
        }
    }
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry points shared by the language front ends
///
/// A parser turns source text into class records and appends them to a
/// [`ClassRegistry`] supplied by the caller. Each file is its own parse session
/// (package and import state reset per file) while records accumulate in the one
/// registry.
///
/// # Thread Safety
/// Implementations must be `Send + Sync`; a single parse session is never shared
/// between threads.
pub trait CodeParser: Send + Sync {
    /// Returns the language identifier (lowercase, e.g., "java")
    fn language(&self) -> &str;

    /// Returns supported file extensions (e.g., [".java"])
    fn file_extensions(&self) -> &[&str];

    /// Read a single file and register its types
    ///
    /// **Note on Metrics**: This method updates parser metrics.
    ///
    /// # Errors
    /// Returns `ParserError` if the file cannot be read or exceeds the size limit.
    /// Source that does not parse cleanly is not an error.
    fn parse_file(&self, path: &Path, registry: &mut ClassRegistry) -> Result<FileInfo, ParserError>;

    /// Run one parse session over in-memory text
    ///
    /// **Note on Metrics**: This method does NOT update parser metrics, so that
    /// `parse_file()` can call it without double-counting.
    ///
    /// # Arguments
    /// * `source` - Text to scan
    /// * `file_path` - Logical path for this source
    /// * `registry` - Registry receiving the finished records
    fn parse_source(
        &self,
        source: &str,
        file_path: &Path,
        registry: &mut ClassRegistry,
    ) -> Result<FileInfo, ParserError>;

    /// Parse a batch of files into one registry
    ///
    /// Default implementation parses files sequentially. A failing file is recorded
    /// in `failed_files` and the batch continues.
    fn parse_files(
        &self,
        paths: &[PathBuf],
        registry: &mut ClassRegistry,
    ) -> Result<ProjectInfo, ParserError> {
        let mut project = ProjectInfo::new();
        for path in paths {
            let result = self.parse_file(path, registry);
            project.record(path, result);
        }
        Ok(project)
    }

    /// Parse every matching file below `dir`
    fn parse_directory(
        &self,
        dir: &Path,
        registry: &mut ClassRegistry,
    ) -> Result<ProjectInfo, ParserError> {
        info!("Parsing {} sources under {}", self.language(), dir.display());
        let paths = self.discover_files(dir)?;
        self.parse_files(&paths, registry)
    }

    /// Parse a file or, if `path` is a directory, every matching file below it
    ///
    /// A file named directly is parsed whatever its extension.
    fn parse_path(&self, path: &Path, registry: &mut ClassRegistry) -> Result<ProjectInfo, ParserError> {
        if path.is_dir() {
            self.parse_directory(path, registry)
        } else {
            self.parse_files(&[path.to_path_buf()], registry)
        }
    }

    /// List the files below `dir` this parser accepts
    ///
    /// Default implementation walks the directory depth-first, entries sorted by
    /// name so batch results are order-stable, and filters by extension.
    fn discover_files(&self, dir: &Path) -> Result<Vec<PathBuf>, ParserError> {
        use std::fs;

        let mut files = Vec::new();
        let extensions = self.file_extensions();

        fn walk_dir(
            dir: &Path,
            extensions: &[&str],
            files: &mut Vec<PathBuf>,
        ) -> Result<(), ParserError> {
            if !dir.is_dir() {
                return Ok(());
            }

            let mut entries = Vec::new();
            for entry in
                fs::read_dir(dir).map_err(|e| ParserError::IoError(dir.to_path_buf(), e))?
            {
                let entry = entry.map_err(|e| ParserError::IoError(dir.to_path_buf(), e))?;
                entries.push(entry.path());
            }
            entries.sort();

            for path in entries {
                if path.is_dir() {
                    walk_dir(&path, extensions, files)?;
                } else if has_extension(&path, extensions) {
                    files.push(path);
                }
            }

            Ok(())
        }

        walk_dir(dir, extensions, &mut files)?;
        debug!("Discovered {} files under {}", files.len(), dir.display());
        Ok(files)
    }

    /// Whether `path` carries one of [`CodeParser::file_extensions`]
    fn can_parse(&self, path: &Path) -> bool {
        has_extension(path, self.file_extensions())
    }

    /// Active configuration
    fn config(&self) -> &ParserConfig;

    /// Snapshot of the counters kept by `parse_file`
    fn metrics(&self) -> ParserMetrics;

    /// Zero the counters
    fn reset_metrics(&mut self);
}

/// `extensions` are written with their leading dot
fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .is_some_and(|ext| extensions.contains(&ext.as_str()))
}
