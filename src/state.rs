use crossterm::event::KeyCode;

use crate::query::QueryService;

/// Which list the left panel is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    Countries,
    Years,
}

pub struct AppState {
    service: QueryService,
    pub lookup: Lookup,
    pub countries: Vec<String>,
    pub years: Vec<u16>,
    pub selected: usize,
    pub detail: String,
}

impl AppState {
    const COUNTRY_PROMPT: &'static str = "Please select a country to see the number of wins.";
    const YEAR_PROMPT: &'static str = "Please select a year to see the final match details.";

    pub fn new(service: QueryService) -> Self {
        let countries = service
            .all_winning_countries()
            .iter()
            .map(|country| country.to_string())
            .collect();
        let years = service.all_years();
        Self {
            service,
            lookup: Lookup::Countries,
            countries,
            years,
            selected: 0,
            detail: Self::COUNTRY_PROMPT.to_string(),
        }
    }

    pub fn service(&self) -> &QueryService {
        &self.service
    }

    pub fn list_len(&self) -> usize {
        match self.lookup {
            Lookup::Countries => self.countries.len(),
            Lookup::Years => self.years.len(),
        }
    }

    pub fn list_items(&self) -> Vec<String> {
        match self.lookup {
            Lookup::Countries => self.countries.clone(),
            Lookup::Years => self.years.iter().map(|year| year.to_string()).collect(),
        }
    }

    /// Returns true when the app should exit.
    pub fn handle_input(&mut self, key: KeyCode) -> bool {
        use KeyCode::*;
        match key {
            Char('q') => return true,
            Tab => self.toggle_lookup(),
            Up => {
                if self.selected > 0 {
                    self.selected -= 1
                }
            }
            Down => {
                if self.selected + 1 < self.list_len() {
                    self.selected += 1
                }
            }
            Enter => self.run_lookup(),
            _ => {}
        }
        false
    }

    fn toggle_lookup(&mut self) {
        self.lookup = match self.lookup {
            Lookup::Countries => Lookup::Years,
            Lookup::Years => Lookup::Countries,
        };
        self.selected = 0;
        self.detail = match self.lookup {
            Lookup::Countries => Self::COUNTRY_PROMPT.to_string(),
            Lookup::Years => Self::YEAR_PROMPT.to_string(),
        };
    }

    /// Dispatches the current selection to the query service and keeps the
    /// formatted answer for the result panel.
    fn run_lookup(&mut self) {
        match self.lookup {
            Lookup::Countries => {
                let Some(country) = self.countries.get(self.selected) else {
                    return;
                };
                let wins = self.service.wins_for_country(country);
                self.detail = format!("{country} has won the World Cup {wins} time(s).");
            }
            Lookup::Years => {
                let Some(&year) = self.years.get(self.selected) else {
                    return;
                };
                self.detail = match self.service.final_details_for_year(year) {
                    Some(details) => format!(
                        "In {year}, Winner(s): {} | Runner-up(s): {}",
                        details.winners.join(", "),
                        details.runner_ups.join(", ")
                    ),
                    None => format!("No data available for the year {year}."),
                };
            }
        }
    }
}
