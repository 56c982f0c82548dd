//! `CodeParser` front end for Java sources

use classview::ClassRegistry;
use classview_parser_api::{
    CodeParser, FileInfo, ParserConfig, ParserError, ParserMetrics, ProjectInfo,
};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::extractor;

/// Parser for `.java` files, one parse session per file
pub struct JavaParser {
    config: ParserConfig,
    metrics: Mutex<ParserMetrics>,
}

impl JavaParser {
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
            metrics: Mutex::new(ParserMetrics::default()),
        }
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            metrics: Mutex::new(ParserMetrics::default()),
        }
    }

    fn lock_metrics(&self) -> MutexGuard<'_, ParserMetrics> {
        self.metrics.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn update_metrics(&self, success: bool, duration: Duration, classes: usize) {
        let mut metrics = self.lock_metrics();
        metrics.files_attempted += 1;
        if success {
            metrics.files_succeeded += 1;
        } else {
            metrics.files_failed += 1;
        }
        metrics.total_parse_time += duration;
        metrics.total_classes += classes;
    }
}

impl Default for JavaParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeParser for JavaParser {
    fn language(&self) -> &str {
        "java"
    }

    fn file_extensions(&self) -> &[&str] {
        &[".java"]
    }

    fn parse_file(&self, path: &Path, registry: &mut ClassRegistry) -> Result<FileInfo, ParserError> {
        let start = Instant::now();
        let result = self.read_source(path).and_then(|source| self.parse_source(&source, path, registry));

        let duration = start.elapsed();
        match &result {
            Ok(info) => {
                debug!("Parsed {} ({} types)", path.display(), info.class_count());
                self.update_metrics(true, duration, info.class_count());
            }
            Err(e) => {
                debug!("Failed to parse {}: {e}", path.display());
                self.update_metrics(false, duration, 0);
            }
        }

        result
    }

    fn parse_source(
        &self,
        source: &str,
        file_path: &Path,
        registry: &mut ClassRegistry,
    ) -> Result<FileInfo, ParserError> {
        let start = Instant::now();
        let classes = extractor::extract(source, registry, &self.config);

        Ok(FileInfo {
            file_path: file_path.to_path_buf(),
            classes,
            parse_time: start.elapsed(),
            line_count: source.lines().count(),
            byte_count: source.len(),
        })
    }

    fn config(&self) -> &ParserConfig {
        &self.config
    }

    fn metrics(&self) -> ParserMetrics {
        self.lock_metrics().clone()
    }

    fn reset_metrics(&mut self) {
        *self.lock_metrics() = ParserMetrics::default();
    }

    fn parse_files(
        &self,
        paths: &[PathBuf],
        registry: &mut ClassRegistry,
    ) -> Result<ProjectInfo, ParserError> {
        info!("Parsing {} Java files", paths.len());
        if self.config.parallel {
            self.parse_files_parallel(paths, registry)
        } else {
            self.parse_files_sequential(paths, registry)
        }
    }
}

impl JavaParser {
    /// Size-check and read a file; invalid UTF-8 is replaced rather than rejected.
    fn read_source(&self, path: &Path) -> Result<String, ParserError> {
        let metadata =
            fs::metadata(path).map_err(|e| ParserError::IoError(path.to_path_buf(), e))?;

        if metadata.len() as usize > self.config.max_file_size {
            return Err(ParserError::FileTooLarge(
                path.to_path_buf(),
                metadata.len() as usize,
            ));
        }

        let bytes = fs::read(path).map_err(|e| ParserError::IoError(path.to_path_buf(), e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// One shared registry, files in input order
    fn parse_files_sequential(
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

    /// Parse on a rayon pool
    ///
    /// Every file gets its own registry; they are merged in input order afterwards so
    /// the first declaration of a name wins exactly as in sequential parsing.
    fn parse_files_parallel(
        &self,
        paths: &[PathBuf],
        registry: &mut ClassRegistry,
    ) -> Result<ProjectInfo, ParserError> {
        use rayon::prelude::*;

        // Defaults to one worker per core
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(num_threads) = self.config.parallel_workers {
            builder = builder.num_threads(num_threads);
        }
        let pool = builder.build().map_err(|e| {
            ParserError::RegistryError(format!("Failed to create thread pool: {e}"))
        })?;

        let results: Vec<_> = pool.install(|| {
            paths
                .par_iter()
                .map(|path| {
                    let mut local = ClassRegistry::new();
                    self.parse_file(path, &mut local).map(|info| (info, local))
                })
                .collect()
        });

        let mut project = ProjectInfo::new();
        for (path, result) in paths.iter().zip(results) {
            let result = result.map(|(mut info, local)| {
                let skipped = registry.merge(local);
                info.classes.retain(|name| !skipped.contains(name));
                info
            });
            project.record(path, result);
        }
        Ok(project)
    }
}
