// crates/population-core/src/loader/common_io.rs
use crate::error::{PopulationError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a dataset file and hands back a reader over its JSON text.
/// Files ending in `.gz` are decompressed on the fly.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        PopulationError::DataUnavailable(format!(
            "dataset not found at {}: {}",
            path.display(),
            e
        ))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(PopulationError::InvalidData(format!(
            "{} is gzip-compressed but 'compact' is disabled",
            path.display()
        )))
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
