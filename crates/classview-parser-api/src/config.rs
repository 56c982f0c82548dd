use serde::{Deserialize, Serialize};

/// Configuration for parser behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Maximum file size to parse (in bytes)
    /// Files larger than this fail with `FileTooLarge`
    pub max_file_size: usize,

    /// Scan method bodies for local variable declarations
    pub harvest_locals: bool,

    /// Enable parallel parsing (for `parse_files`)
    ///
    /// Each file is parsed into its own registry on a worker pool and the results
    /// are merged in input order, so the outcome matches sequential parsing.
    pub parallel: bool,

    /// Number of parallel workers (None = one per CPU)
    pub parallel_workers: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024, // 10 MB
            harvest_locals: true,
            parallel: false,
            parallel_workers: None,
        }
    }
}

impl ParserConfig {
    /// Create config for fast parsing (skips method bodies)
    pub fn fast() -> Self {
        Self {
            harvest_locals: false,
            ..Default::default()
        }
    }

    /// Create config for comprehensive parsing
    pub fn comprehensive() -> Self {
        Self {
            harvest_locals: true,
            ..Default::default()
        }
    }

    /// Enable parallel parsing
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the number of parallel workers
    pub fn with_parallel_workers(mut self, workers: usize) -> Self {
        self.parallel_workers = Some(workers);
        self
    }

    /// Set maximum file size
    pub fn with_max_file_size(mut self, size: usize) -> Self {
        self.max_file_size = size;
        self
    }

    /// Enable or disable local variable harvesting
    pub fn with_harvest_locals(mut self, harvest: bool) -> Self {
        self.harvest_locals = harvest;
        self
    }
}
