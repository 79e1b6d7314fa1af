//! Canonical-name CSV output.

use std::path::Path;

use canon_model::{CANONICAL_NAME_COLUMN, CanonicalizationResult, RAW_NAME_COLUMN};

use crate::common::write_atomic;
use crate::error::{OutputError, Result};

/// Write the `RAW_NAME`,`CANONICAL_NAME` table in input row order.
pub fn write_canonical_csv(path: &Path, result: &CanonicalizationResult) -> Result<()> {
    let csv_error = |source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };

    write_atomic(path, |file| {
        let mut writer = csv::Writer::from_writer(file.as_file_mut());
        writer
            .write_record([RAW_NAME_COLUMN, CANONICAL_NAME_COLUMN])
            .map_err(csv_error)?;
        for pair in result.pairs() {
            writer
                .write_record([pair.raw_name.as_str(), pair.canonical_name.as_str()])
                .map_err(csv_error)?;
        }
        writer.flush().map_err(|source| OutputError::Persist {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    })?;

    tracing::info!(path = %path.display(), rows = result.len(), "wrote canonical names");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use canon_model::NameDataset;

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let dataset: NameDataset = ["Acme, Inc.", ""].into_iter().collect();
        let result =
            CanonicalizationResult::zip(&dataset, vec!["acme".to_string(), String::new()])
                .unwrap();

        write_canonical_csv(&path, &result).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "RAW_NAME,CANONICAL_NAME\n\"Acme, Inc.\",acme\n,\n");
    }
}
