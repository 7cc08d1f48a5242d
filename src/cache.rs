//! Flat-file cache for the raw draw history.
//!
//! The cache mirrors the remote payload shape (a JSON array of raw records),
//! so the decode path is identical for live and cached data. It is written by
//! the `update` command, not by the live request path.

use std::path::Path;

use anyhow::Result;

use crate::draws::RawDraw;

/// Write the raw draw history to `path`, creating parent directories.
pub fn store_raw_draws(path: &Path, records: &[RawDraw]) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let content = serde_json::to_string_pretty(records)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Read the raw draw history back from `path`.
pub fn load_raw_draws(path: &Path) -> Result<Vec<RawDraw>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draws::RawNumber;

    fn raw(contest: u32, date: &str, numbers: &[u8]) -> RawDraw {
        RawDraw {
            concurso: contest,
            data: date.to_string(),
            dezenas: numbers.iter().map(|&n| RawNumber::Int(n)).collect(),
        }
    }

    #[test]
    fn test_store_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("draws.json");

        let records = vec![raw(1, "10/01/2024", &[1, 2, 3]), raw(2, "11/01/2024", &[4, 5])];
        store_raw_draws(&path, &records).unwrap();

        let loaded = load_raw_draws(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].concurso, 1);
        assert_eq!(loaded[1].data, "11/01/2024");
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_raw_draws(&dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn test_cache_accepts_remote_payload_shape() {
        // The live API serves dezenas as zero-padded strings; the cache must
        // read that form unchanged.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draws.json");
        std::fs::write(
            &path,
            r#"[{"concurso": 3000, "data": "15/01/2024", "dezenas": ["01", "02", "25"]}]"#,
        )
        .unwrap();

        let loaded = load_raw_draws(&path).unwrap();
        assert_eq!(loaded[0].concurso, 3000);
        assert_eq!(loaded[0].dezenas.len(), 3);
    }
}
