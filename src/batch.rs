//! Batch processing: many packages in, one summary per built workout out.
//!
//! Batch files are TOML with one `[[package]]` table per reading:
//!
//! ```toml
//! [[package]]
//! code = "RUN"
//! data = [15000, 1, 75]
//! ```

use std::{fs, io, path::Path, path::PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::model::Summary;
use crate::package::Package;

/// Errors that can occur while loading a batch file.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid batch file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Deserialize)]
struct BatchFile {
    #[serde(default)]
    package: Vec<Package>,
}

/// Load every package from a TOML batch file.
pub fn load(path: &Path) -> Result<Vec<Package>, BatchError> {
    let contents = fs::read_to_string(path).map_err(|source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file: BatchFile = toml::from_str(&contents).map_err(|source| BatchError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(file.package)
}

/// Outcome of processing a batch of packages.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One summary per workout that was built, in input order.
    pub summaries: Vec<Summary>,

    /// Packages with an unknown code.
    pub skipped: usize,

    /// Packages with a known code that could not be built.
    pub failed: usize,
}

/// Build and summarize each package independently.
///
/// Unknown codes are skipped; packages that fail to build are counted.
/// Neither stops the rest of the batch.
pub fn process(packages: &[Package]) -> BatchReport {
    let mut report = BatchReport::default();

    for (index, package) in packages.iter().enumerate() {
        match package.read() {
            Ok(Some(workout)) => report.summaries.push(workout.as_training().summary()),
            Ok(None) => {
                warn!(index, code = %package.code, "unknown workout type, skipping");
                report.skipped += 1;
            }
            Err(e) => {
                warn!(index, code = %package.code, "failed to build workout: {e}");
                report.failed += 1;
            }
        }
    }

    report
}
