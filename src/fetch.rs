//! Draw history retrieval.
//!
//! The live fetch degrades to an empty list on any failure: callers never see
//! a transport or decode error, but can detect "no data" and respond
//! accordingly. The cached path propagates errors normally since it runs in
//! CLI contexts where the failure is user-visible.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::cache;
use crate::config::SourceConfig;
use crate::draws::{decode_draws, Draw, RawDraw};

/// Fetch the raw draw history from the remote endpoint.
pub async fn fetch_raw_draws(
    client: &reqwest::Client,
    source: &SourceConfig,
) -> Result<Vec<RawDraw>> {
    let records = client
        .get(&source.results_url)
        .timeout(Duration::from_secs(source.timeout_secs))
        .send()
        .await
        .context("request failed")?
        .error_for_status()
        .context("server returned an error status")?
        .json::<Vec<RawDraw>>()
        .await
        .context("malformed payload")?;

    Ok(records)
}

/// Fetch and decode the full draw history, ascending by date.
///
/// Any failure (network, bad status, malformed payload, undecodable record)
/// is logged and collapsed to an empty list. No retries.
pub async fn fetch_draws(client: &reqwest::Client, source: &SourceConfig) -> Vec<Draw> {
    let result = async {
        let records = fetch_raw_draws(client, source).await?;
        decode_draws(records).context("undecodable draw record")
    }
    .await;

    match result {
        Ok(draws) => {
            debug!("fetched {} draws from {}", draws.len(), source.results_url);
            draws
        }
        Err(e) => {
            warn!("fetching draws failed: {:#}", e);
            Vec::new()
        }
    }
}

/// Load and decode the draw history from the local cache file.
///
/// Yields the same draw-list shape as the live fetch, so the two sources are
/// interchangeable for the aggregation core.
pub fn load_cached_draws(path: &Path) -> Result<Vec<Draw>> {
    let records = cache::load_raw_draws(path)
        .with_context(|| format!("reading cache file {}", path.display()))?;
    Ok(decode_draws(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draws::RawNumber;

    #[test]
    fn test_cached_draws_match_decode_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draws.json");

        let records = vec![
            RawDraw {
                concurso: 2,
                data: "12/01/2024".to_string(),
                dezenas: vec![RawNumber::Int(5)],
            },
            RawDraw {
                concurso: 1,
                data: "10/01/2024".to_string(),
                dezenas: vec![RawNumber::Text("03".to_string())],
            },
        ];
        cache::store_raw_draws(&path, &records).unwrap();

        let draws = load_cached_draws(&path).unwrap();
        assert_eq!(draws.len(), 2);
        // Sorted ascending by date, just like the live fetch.
        assert_eq!(draws[0].contest, 1);
        assert_eq!(draws[0].numbers, vec![3]);
    }

    #[test]
    fn test_cached_draws_bad_record_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draws.json");
        std::fs::write(
            &path,
            r#"[{"concurso": 1, "data": "bad-date", "dezenas": ["01"]}]"#,
        )
        .unwrap();

        assert!(load_cached_draws(&path).is_err());
    }

    #[tokio::test]
    async fn test_fetch_draws_degrades_to_empty_on_failure() {
        // Unroutable address: the request fails fast and must collapse to an
        // empty list instead of propagating.
        let source = SourceConfig {
            results_url: "http://127.0.0.1:1/api/lotofacil".to_string(),
            timeout_secs: 1,
            ..Default::default()
        };
        let client = reqwest::Client::new();

        let draws = fetch_draws(&client, &source).await;
        assert!(draws.is_empty());
    }
}
