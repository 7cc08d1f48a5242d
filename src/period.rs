//! Analysis period selection.

use chrono::Duration;

use crate::draws::Draw;

/// Trailing window used to narrow the draw history before aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    LastMonth,
    LastWeek,
    Last10,
    All,
}

impl Period {
    /// Parse a period token. Unknown tokens fall back to `All`, never an error.
    pub fn parse(token: &str) -> Self {
        match token {
            "last_month" => Period::LastMonth,
            "last_week" => Period::LastWeek,
            "last_10" => Period::Last10,
            _ => Period::All,
        }
    }

    /// Token form, echoed back in responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::LastMonth => "last_month",
            Period::LastWeek => "last_week",
            Period::Last10 => "last_10",
            Period::All => "all",
        }
    }

    /// Filter a date-ascending draw history down to this window.
    ///
    /// "Today" is the date of the most recent draw in the input, not the wall
    /// clock, so the result is a pure function of the history.
    pub fn filter(&self, draws: &[Draw]) -> Vec<Draw> {
        let Some(today) = draws.last().map(|d| d.date) else {
            return Vec::new();
        };

        match self {
            Period::LastMonth => {
                let cutoff = today - Duration::days(30);
                draws.iter().filter(|d| d.date >= cutoff).cloned().collect()
            }
            Period::LastWeek => {
                let cutoff = today - Duration::days(7);
                draws.iter().filter(|d| d.date >= cutoff).cloned().collect()
            }
            Period::Last10 => {
                let start = draws.len().saturating_sub(10);
                draws[start..].to_vec()
            }
            Period::All => draws.to_vec(),
        }
    }
}
