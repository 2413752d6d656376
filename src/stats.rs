use std::collections::BTreeMap;

use crate::data::Dataset;

/// Win totals per country, keyed by canonical name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WinCounts {
    counts: BTreeMap<String, u32>,
}

impl WinCounts {
    /// Group-by-count over the winner column. Expects a normalized dataset;
    /// run the alias table first or historical names count separately.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut counts: BTreeMap<String, u32> = BTreeMap::new();
        for record in dataset.records() {
            *counts.entry(record.winner.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Wins for one country, zero when it never won.
    pub fn get(&self, country: &str) -> u32 {
        self.counts.get(country).copied().unwrap_or(0)
    }

    /// Distinct winners, alphabetical.
    pub fn countries(&self) -> Vec<&str> {
        self.counts.keys().map(String::as_str).collect()
    }

    /// (country, wins) sorted by wins descending, ties alphabetical.
    pub fn ranked(&self) -> Vec<(&str, u32)> {
        let mut rows: Vec<(&str, u32)> = self
            .counts
            .iter()
            .map(|(country, wins)| (country.as_str(), *wins))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        rows
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MatchRecord;

    fn record(year: u16, winner: &str, runner_up: &str) -> MatchRecord {
        MatchRecord {
            year,
            winner: winner.into(),
            runner_up: runner_up.into(),
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            record(1958, "Brazil", "Sweden"),
            record(1962, "Brazil", "Czechoslovakia"),
            record(1930, "Uruguay", "Argentina"),
            record(1966, "England", "West Germany"),
        ])
    }

    #[test]
    fn counts_wins_per_country() {
        let wins = WinCounts::from_dataset(&dataset());
        assert_eq!(wins.get("Brazil"), 2);
        assert_eq!(wins.get("Uruguay"), 1);
        assert_eq!(wins.get("Sweden"), 0);
    }

    #[test]
    fn countries_are_alphabetical() {
        let wins = WinCounts::from_dataset(&dataset());
        assert_eq!(wins.countries(), vec!["Brazil", "England", "Uruguay"]);
    }

    #[test]
    fn ranked_orders_by_wins_then_name() {
        let wins = WinCounts::from_dataset(&dataset());
        assert_eq!(
            wins.ranked(),
            vec![("Brazil", 2), ("England", 1), ("Uruguay", 1)]
        );
    }

    #[test]
    fn total_equals_record_count() {
        let data = dataset();
        let wins = WinCounts::from_dataset(&data);
        assert_eq!(wins.total() as usize, data.len());
    }
}
