//! Opening and decoding results files, plain or gzipped.

use crate::results::ResultsDocument;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read and decode a results document. Paths ending in `.gz` are run
/// through a gzip decoder first; everything else is decoded as-is.
pub fn load_results(path: impl AsRef<Path>) -> Result<ResultsDocument, LoadError> {
    let path = path.as_ref();
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");
    debug!(path = %path.display(), gzipped, "loading results document");
    let file = File::open(path)?;
    if gzipped {
        let doc = serde_json::from_reader(BufReader::new(GzDecoder::new(file)))?;
        Ok(doc)
    } else {
        let doc = serde_json::from_reader(BufReader::new(file))?;
        Ok(doc)
    }
}
