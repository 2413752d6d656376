use crate::data::Dataset;
use crate::stats::WinCounts;

/// Winner and runner-up names recorded for one year. Multiple rows can in
/// principle share a year, so both sides are lists, deduplicated in
/// first-occurrence order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalDetails {
    pub winners: Vec<String>,
    pub runner_ups: Vec<String>,
}

/// Read-only lookups over a normalized dataset. Holds its own copy of the
/// data, handed in at construction; nothing here mutates, so any number of
/// callers can query at once.
pub struct QueryService {
    dataset: Dataset,
    wins: WinCounts,
}

impl QueryService {
    /// Takes ownership of an already-normalized dataset and derives the win
    /// table once.
    pub fn new(dataset: Dataset) -> Self {
        let wins = WinCounts::from_dataset(&dataset);
        Self { dataset, wins }
    }

    /// Finals won by `country`. Unknown names are a legal query and count
    /// zero.
    pub fn wins_for_country(&self, country: &str) -> u32 {
        self.wins.get(country)
    }

    /// Distinct winners and runner-ups for `year`, or `None` when the year
    /// has no record.
    pub fn final_details_for_year(&self, year: u16) -> Option<FinalDetails> {
        let mut winners: Vec<String> = Vec::new();
        let mut runner_ups: Vec<String> = Vec::new();
        for record in self.dataset.records().iter().filter(|r| r.year == year) {
            if !winners.iter().any(|w| w == &record.winner) {
                winners.push(record.winner.clone());
            }
            if !runner_ups.iter().any(|r| r == &record.runner_up) {
                runner_ups.push(record.runner_up.clone());
            }
        }
        if winners.is_empty() {
            None
        } else {
            Some(FinalDetails {
                winners,
                runner_ups,
            })
        }
    }

    /// Every country with at least one title, alphabetical.
    pub fn all_winning_countries(&self) -> Vec<&str> {
        self.wins.countries()
    }

    /// Every year with a recorded final, ascending.
    pub fn all_years(&self) -> Vec<u16> {
        let mut years: Vec<u16> = self.dataset.records().iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// (country, wins) rows for the standings table, best first.
    pub fn win_counts(&self) -> Vec<(&str, u32)> {
        self.wins.ranked()
    }

    pub fn record_count(&self) -> usize {
        self.dataset.len()
    }
}
