//! Draw data model and payload decoding.
//!
//! The remote API and the local cache file share the same record shape
//! (`concurso` / `data` / `dezenas`), so both sources go through the same
//! decode path and yield identical draw lists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Date format used by the results API (`DD/MM/YYYY`).
const DATE_FORMAT: &str = "%d/%m/%Y";

/// A single historical draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub contest: u32,
    pub date: NaiveDate,
    pub numbers: Vec<u8>,
}

/// A drawn number as it appears on the wire.
///
/// The live API serves the numbers as zero-padded strings ("01".."25") while
/// the cache writer stores plain integers; both forms are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Int(u8),
    Text(String),
}

/// Raw draw record matching the remote payload and the cache file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDraw {
    pub concurso: u32,
    pub data: String,
    #[serde(default)]
    pub dezenas: Vec<RawNumber>,
}

/// Decode failure for a single raw record.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("draw {contest}: invalid date {value:?}: {source}")]
    Date {
        contest: u32,
        value: String,
        source: chrono::ParseError,
    },
    #[error("draw {contest}: invalid number {value:?}")]
    Number { contest: u32, value: String },
}

impl Draw {
    /// Decode a raw record into a draw.
    ///
    /// Numbers are taken verbatim from the source field; any unparsable
    /// number fails the record rather than being silently dropped.
    pub fn from_raw(raw: &RawDraw) -> Result<Self, DecodeError> {
        let date = NaiveDate::parse_from_str(&raw.data, DATE_FORMAT).map_err(|source| {
            DecodeError::Date {
                contest: raw.concurso,
                value: raw.data.clone(),
                source,
            }
        })?;

        let numbers = raw
            .dezenas
            .iter()
            .map(|n| match n {
                RawNumber::Int(v) => Ok(*v),
                RawNumber::Text(s) => s.trim().parse::<u8>().map_err(|_| DecodeError::Number {
                    contest: raw.concurso,
                    value: s.clone(),
                }),
            })
            .collect::<Result<Vec<u8>, DecodeError>>()?;

        Ok(Draw {
            contest: raw.concurso,
            date,
            numbers,
        })
    }
}

/// Decode a full payload and sort it ascending by date.
///
/// Either every record decodes or the whole payload is rejected; there is no
/// partial-data mode.
pub fn decode_draws(records: Vec<RawDraw>) -> Result<Vec<Draw>, DecodeError> {
    let mut draws = records
        .iter()
        .map(Draw::from_raw)
        .collect::<Result<Vec<Draw>, DecodeError>>()?;

    draws.sort_by_key(|d| d.date);
    Ok(draws)
}
