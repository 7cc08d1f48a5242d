//! Frequency aggregation and suggestion strategies.
//!
//! Two strategies are derived from the filtered draw history:
//!
//! 1. **Hot columns**: each draw's 15 sorted numbers split into three columns
//!    of five (ranks 1-5, 6-10, 11-15); the five most frequent numbers of each
//!    column, concatenated in column order.
//! 2. **Cold numbers**: the 15 least frequent numbers overall.
//!
//! Ties always break toward the lower number, in both strategies.

use std::collections::BTreeMap;

use crate::draws::Draw;
use crate::period::Period;
use crate::types::SuggestionsResponse;

/// Number of columns a draw is split into.
pub const NUM_COLUMNS: usize = 3;
/// Numbers per column.
pub const COLUMN_SIZE: usize = 5;
/// Highest drawable number.
pub const MAX_NUMBER: u8 = 25;

/// Occurrence count per number, keyed 1..=25.
///
/// Numbers that never appear are still present with count 0.
pub type FrequencyTable = BTreeMap<u8, u32>;

fn empty_table() -> FrequencyTable {
    (1..=MAX_NUMBER).map(|n| (n, 0)).collect()
}

/// Count how often each number appears across the given draws.
pub fn number_frequency(draws: &[Draw]) -> FrequencyTable {
    let mut freq = empty_table();
    for draw in draws {
        for &num in &draw.numbers {
            *freq.entry(num).or_insert(0) += 1;
        }
    }
    freq
}

/// Count occurrences per column.
///
/// Column identity is positional: the draw's numbers are sorted ascending and
/// ranks 0-4, 5-9, 10-14 feed three independent tables. The same value can
/// land in different columns across draws.
pub fn column_frequency(draws: &[Draw]) -> [FrequencyTable; NUM_COLUMNS] {
    let mut tables: [FrequencyTable; NUM_COLUMNS] =
        [empty_table(), empty_table(), empty_table()];

    for draw in draws {
        let mut sorted = draw.numbers.clone();
        sorted.sort_unstable();
        for (col, chunk) in sorted.chunks(COLUMN_SIZE).take(NUM_COLUMNS).enumerate() {
            for &num in chunk {
                *tables[col].entry(num).or_insert(0) += 1;
            }
        }
    }

    tables
}

/// Top `count` numbers of a table by descending frequency, lower number first
/// on ties, re-sorted ascending for output.
fn top_by_count(table: &FrequencyTable, count: usize) -> Vec<u8> {
    // BTreeMap iteration is ascending by number, and the sort is stable, so
    // equal counts keep the lower number ahead.
    let mut entries: Vec<(u8, u32)> = table.iter().map(|(&n, &c)| (n, c)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    let mut picked: Vec<u8> = entries.iter().take(count).map(|&(n, _)| n).collect();
    picked.sort_unstable();
    picked
}

/// Bottom `count` numbers of a table by ascending frequency, lower number
/// first on ties, sorted ascending for output.
fn bottom_by_count(table: &FrequencyTable, count: usize) -> Vec<u8> {
    let mut entries: Vec<(u8, u32)> = table.iter().map(|(&n, &c)| (n, c)).collect();
    entries.sort_by_key(|&(_, c)| c);

    let mut picked: Vec<u8> = entries.iter().take(count).map(|&(n, _)| n).collect();
    picked.sort_unstable();
    picked
}

/// Strategy 1: the five hottest numbers of each column, concatenated in
/// column order. Columns are never merged or re-ranked against each other,
/// and no cross-column dedup is applied.
pub fn hot_columns(draws: &[Draw]) -> Vec<Vec<u8>> {
    column_frequency(draws)
        .iter()
        .map(|table| top_by_count(table, COLUMN_SIZE))
        .collect()
}

/// Strategy 2: the 15 coldest numbers overall, sorted ascending.
pub fn cold_numbers(draws: &[Draw]) -> Vec<u8> {
    bottom_by_count(&number_frequency(draws), 15)
}

/// Filter the history to the requested period and compose both strategies.
///
/// Returns `None` when the filtered subset is empty; running the composer on
/// no data would yield degenerate selections, so callers must reject instead.
pub fn suggestions(draws: &[Draw], period: Period) -> Option<SuggestionsResponse> {
    let filtered = period.filter(draws);
    if filtered.is_empty() {
        return None;
    }

    Some(SuggestionsResponse {
        strategy1: hot_columns(&filtered).concat(),
        strategy2: cold_numbers(&filtered),
        period: period.as_str().to_string(),
    })
}
